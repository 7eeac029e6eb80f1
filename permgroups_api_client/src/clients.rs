use std::{sync::Arc, time::Duration};

use tracing::debug;
use url::Url;

use crate::{
    api::permission_groups::PermissionGroupsApi,
    authentication::AccessToken,
    errors::{ClientError, ClientInitializationError, ClientResult},
    response::ServerResponse,
    server::ApiServer,
};


/// The transport every API call goes through.
///
/// Implementations perform exactly one request per call and report transport-level
/// failures as [`ClientError::RequestExecutionError`]. Status codes are not
/// interpreted here, that is up to the caller.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    fn server(&self) -> &ApiServer;

    async fn get(&self, url: Url) -> ClientResult<ServerResponse>;
}



fn build_client_user_agent() -> String {
    format!(
        "permgroups_api_client / v{}",
        env!("CARGO_PKG_VERSION")
    )
}


#[derive(Default, Clone, Debug)]
pub struct ClientOptions {
    /// Applies to the whole request, from connecting until the body has been read.
    /// No timeout is applied if unset.
    pub request_timeout: Option<Duration>,
}


pub struct Client {
    server: Arc<ApiServer>,
    http_client: reqwest::Client,
}

impl Client {
    pub fn new(
        server: Arc<ApiServer>,
        options: ClientOptions,
    ) -> Result<Self, ClientInitializationError> {
        let mut client_builder = reqwest::Client::builder()
            .zstd(true)
            .user_agent(build_client_user_agent());

        if let Some(request_timeout) = options.request_timeout {
            client_builder = client_builder.timeout(request_timeout);
        }

        let http_client = client_builder
            .build()
            .map_err(|error| ClientInitializationError::UnableToInitializeReqwestClient { error })?;

        Ok(Self {
            server,
            http_client,
        })
    }

    pub fn with_authentication(&self, authentication: &Arc<AccessToken>) -> AuthenticatedClient {
        AuthenticatedClient::new(
            self.server.clone(),
            authentication.clone(),
            self.http_client.clone(),
        )
    }

    pub fn permission_groups(&self) -> PermissionGroupsApi<'_, Self> {
        PermissionGroupsApi::new(self)
    }
}

impl HttpClient for Client {
    fn server(&self) -> &ApiServer {
        &self.server
    }

    async fn get(&self, url: Url) -> ClientResult<ServerResponse> {
        debug!(url = url.as_str(), "Sending GET request.");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ClientError::request_execution)?;

        ServerResponse::prefetch_reqwest_response(response).await
    }
}



pub struct AuthenticatedClient {
    server: Arc<ApiServer>,
    authentication: Arc<AccessToken>,
    http_client: reqwest::Client,
}

impl AuthenticatedClient {
    pub(crate) fn new(
        server: Arc<ApiServer>,
        authentication: Arc<AccessToken>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            server,
            authentication,
            http_client,
        }
    }

    pub fn permission_groups(&self) -> PermissionGroupsApi<'_, Self> {
        PermissionGroupsApi::new(self)
    }
}

impl HttpClient for AuthenticatedClient {
    fn server(&self) -> &ApiServer {
        &self.server
    }

    async fn get(&self, url: Url) -> ClientResult<ServerResponse> {
        debug!(
            url = url.as_str(),
            "Sending authenticated GET request."
        );

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.authentication.access_token())
            .send()
            .await
            .map_err(ClientError::request_execution)?;

        ServerResponse::prefetch_reqwest_response(response).await
    }
}
