use std::time::Duration;

use serde::Deserialize;

use crate::{traits::TryResolve, ApiConfigurationError};


fn default_use_https() -> bool {
    true
}

fn default_base_path() -> String {
    "/client/v4".to_string()
}


#[derive(Deserialize, Clone, Debug)]
pub(crate) struct UnresolvedApiConfiguration {
    host: String,

    #[serde(default = "default_use_https")]
    use_https: bool,

    #[serde(default = "default_base_path")]
    base_path: String,

    #[serde(default)]
    api_token: Option<String>,

    #[serde(default)]
    default_account_id: Option<String>,

    #[serde(default)]
    request_timeout_seconds: Option<u64>,
}


/// Configuration of the remote account-management API.
#[derive(Clone)]
pub struct ApiConfiguration {
    /// Host (and optionally port) of the API server, e.g. `api.cloudflare.com`.
    pub host: String,

    pub use_https: bool,

    /// Path prefix of all endpoints, e.g. `/client/v4`.
    pub base_path: String,

    /// Pre-issued API token, sent as a bearer token if set.
    pub api_token: Option<String>,

    /// Account to operate on when none is given on the command line.
    pub default_account_id: Option<String>,

    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("host", &self.host)
            .field("use_https", &self.use_https)
            .field("base_path", &self.base_path)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "<redacted>"),
            )
            .field("default_account_id", &self.default_account_id)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl TryResolve for UnresolvedApiConfiguration {
    type Resolved = ApiConfiguration;
    type Error = ApiConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        let host = self.host.trim().to_string();
        if host.is_empty() {
            return Err(ApiConfigurationError::EmptyHost);
        }

        if !self.base_path.starts_with('/') {
            return Err(ApiConfigurationError::InvalidBasePath {
                base_path: self.base_path,
            });
        }

        if matches!(&self.api_token, Some(token) if token.trim().is_empty()) {
            return Err(ApiConfigurationError::EmptyApiToken);
        }

        let request_timeout = match self.request_timeout_seconds {
            Some(0) => return Err(ApiConfigurationError::InvalidRequestTimeout),
            Some(seconds) => Some(Duration::from_secs(seconds)),
            None => None,
        };

        Ok(ApiConfiguration {
            host,
            use_https: self.use_https,
            base_path: self.base_path,
            api_token: self.api_token,
            default_account_id: self.default_account_id,
            request_timeout,
        })
    }
}
