use std::error::Error;

use reqwest::StatusCode;
use thiserror::Error;



#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to prepare a URL")]
    UrlPreparationError {
        #[from]
        #[source]
        error: url::ParseError,
    },

    /// The transport was unable to complete the request
    /// (network failure, timeout, aborted connection, ...).
    #[error("failed while executing HTTP request")]
    RequestExecutionError {
        #[source]
        error: Box<dyn Error + Send + Sync>,
    },

    #[error(
        "server responded with a non-success {} status code (errors: {:?})",
        .status_code,
        .errors
    )]
    UnexpectedStatusCode {
        status_code: StatusCode,

        /// Error messages extracted from the response envelope, if the body had one.
        errors: Vec<String>,
    },

    #[error(
        "failed to extract JSON body from response \
        (either invalid JSON syntax or mismatching content schema)"
    )]
    ResponseJsonBodyError {
        #[source]
        error: serde_json::Error,
    },

    /// The server answered with a success status code,
    /// but the envelope itself reports a failure.
    #[error(
        "server reported an unsuccessful API call (errors: {:?}, messages: {:?})",
        .errors,
        .messages
    )]
    ApiFailure {
        errors: Vec<String>,
        messages: Vec<String>,
    },
}

impl ClientError {
    #[inline]
    pub fn request_execution<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::RequestExecutionError {
            error: error.into(),
        }
    }

    #[inline]
    pub(crate) const fn unexpected_status_code(
        status_code: StatusCode,
        errors: Vec<String>,
    ) -> Self {
        Self::UnexpectedStatusCode {
            status_code,
            errors,
        }
    }

    #[inline]
    pub(crate) const fn api_failure(errors: Vec<String>, messages: Vec<String>) -> Self {
        Self::ApiFailure { errors, messages }
    }
}


pub type ClientResult<V, E = ClientError> = Result<V, E>;



#[derive(Debug, Error)]
pub enum ClientInitializationError {
    #[error("unable to initialize reqwest HTTP client")]
    UnableToInitializeReqwestClient {
        #[from]
        #[source]
        error: reqwest::Error,
    },
}
