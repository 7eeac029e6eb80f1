use std::{fmt::Display, net::SocketAddr};

pub enum ServerHost {
    Ip(SocketAddr),
    DomainName(String),
}

impl Display for ServerHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerHost::Ip(socket_addr) => socket_addr.fmt(f),
            ServerHost::DomainName(domain_name) => domain_name.fmt(f),
        }
    }
}

impl From<SocketAddr> for ServerHost {
    fn from(value: SocketAddr) -> Self {
        Self::Ip(value)
    }
}

impl From<String> for ServerHost {
    fn from(value: String) -> Self {
        Self::DomainName(value)
    }
}

impl From<&str> for ServerHost {
    fn from(value: &str) -> Self {
        Self::DomainName(value.to_string())
    }
}



pub struct ApiServerOptions {
    pub use_https: bool,

    /// Path prefix all endpoints live under, including the leading slash.
    pub base_path: String,
}

impl Default for ApiServerOptions {
    fn default() -> Self {
        Self {
            use_https: true,
            base_path: "/client/v4".to_string(),
        }
    }
}


#[derive(Debug)]
pub struct ApiServer {
    base_api_url: String,
}

impl ApiServer {
    pub fn new<S>(server_host: S, options: ApiServerOptions) -> Self
    where
        S: Into<ServerHost>,
    {
        let protocol = match options.use_https {
            true => "https",
            false => "http",
        };

        Self {
            base_api_url: format!(
                "{}://{}{}",
                protocol,
                server_host.into(),
                options.base_path.trim_end_matches('/')
            ),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }
}
