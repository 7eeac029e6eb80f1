use std::{borrow::Cow, io, path::PathBuf};

use thiserror::Error;


#[derive(Debug, Error)]
pub enum LoggingConfigurationError {
    #[error(
        "invalid tracing filter of type {} (doesn't parse with EnvFilter): {}",
        .kind,
        .invalid_filter
    )]
    InvalidTracingFilter {
        invalid_filter: String,

        kind: Cow<'static, str>,

        #[source]
        error: tracing_subscriber::filter::ParseError,
    },
}


#[derive(Debug, Error)]
pub enum ApiConfigurationError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("base path must start with a slash, got \"{}\"", .base_path)]
    InvalidBasePath { base_path: String },

    #[error("api token must not be empty if present")]
    EmptyApiToken,

    #[error("request timeout must be a positive number of seconds")]
    InvalidRequestTimeout,
}


#[derive(Debug, Error)]
pub enum ConfigurationResolutionError {
    #[error("error while resolving \"logging\" table")]
    LoggingConfigurationError {
        #[from]
        #[source]
        error: LoggingConfigurationError,
    },

    #[error("error while resolving \"api\" table")]
    ApiConfigurationError {
        #[from]
        #[source]
        error: ApiConfigurationError,
    },
}


#[derive(Debug, Error)]
pub enum ConfigurationLoadingError {
    #[error("unable to read configuration file at {}", .path.display())]
    UnableToReadConfigurationFile {
        path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("failed to parse the contents of the configuration file as TOML")]
    ParsingError {
        #[from]
        #[source]
        error: toml::de::Error,
    },

    #[error("failed to resolve and validate the contents of the configuration")]
    ResolutionError {
        #[from]
        #[source]
        error: ConfigurationResolutionError,
    },
}
