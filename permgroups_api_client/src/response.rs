use bytes::Bytes;
use permgroups_core::api_models::ErrorEnvelope;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::errors::{ClientError, ClientResult};


/// A server response whose body has already been read in full.
///
/// Transports hand these back to the API layer, which inspects the
/// status code and decodes the body.
#[derive(Clone, Debug)]
pub struct ServerResponse {
    status_code: StatusCode,
    body: Bytes,
}

impl ServerResponse {
    pub fn new<B>(status_code: StatusCode, body: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub(crate) async fn prefetch_reqwest_response(response: reqwest::Response) -> ClientResult<Self> {
        let status_code = response.status();

        let body = response
            .bytes()
            .await
            .map_err(ClientError::request_execution)?;

        Ok(Self { status_code, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub(crate) fn json<V>(&self) -> ClientResult<V>
    where
        V: DeserializeOwned,
    {
        serde_json::from_slice(&self.body).map_err(|error| ClientError::ResponseJsonBodyError { error })
    }

    /// Attempts to read the error messages out of a (usually non-2xx) response.
    ///
    /// Bodies that aren't an envelope yield no messages.
    pub(crate) fn envelope_errors(&self) -> Vec<String> {
        self.json::<ErrorEnvelope>()
            .map(|envelope| envelope.errors)
            .unwrap_or_default()
    }
}
