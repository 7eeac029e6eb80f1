use std::{borrow::Cow, path::PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::{traits::TryResolve, LoggingConfigurationError};


#[derive(Deserialize, Clone, Debug)]
pub(crate) struct UnresolvedLoggingConfiguration {
    console_output_level_filter: String,

    log_file_output_level_filter: String,

    log_file_output_directory: String,
}

/// Logging-related configuration.
#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    /// Filter for console output, in `EnvFilter` syntax (e.g. `info,permgroups_api_client=debug`).
    pub console_output_level_filter: String,

    /// Filter for the rolling log file, in `EnvFilter` syntax.
    pub log_file_output_level_filter: String,

    pub log_file_output_directory: PathBuf,
}

impl TryResolve for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Error = LoggingConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        // Validate the file and console level filters.
        if let Err(error) = EnvFilter::try_new(&self.console_output_level_filter) {
            return Err(LoggingConfigurationError::InvalidTracingFilter {
                invalid_filter: self.console_output_level_filter,
                kind: Cow::Borrowed("console_output_level_filter"),
                error,
            });
        }

        if let Err(error) = EnvFilter::try_new(&self.log_file_output_level_filter) {
            return Err(LoggingConfigurationError::InvalidTracingFilter {
                invalid_filter: self.log_file_output_level_filter,
                kind: Cow::Borrowed("log_file_output_level_filter"),
                error,
            });
        }

        Ok(Self::Resolved {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory: PathBuf::from(self.log_file_output_directory),
        })
    }
}

impl LoggingConfiguration {
    // Both filters were validated in `try_resolve`, so the lossy constructor
    // never actually drops a directive here.

    pub fn console_output_level_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.console_output_level_filter)
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_file_output_level_filter)
    }
}
