use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod api;
mod logging;

pub use api::*;
pub use logging::*;

use crate::traits::{TryResolve, TryResolveWithContext};
use crate::utilities::get_default_configuration_file_path;
use crate::{ConfigurationLoadingError, ConfigurationResolutionError};



#[derive(Deserialize, Debug)]
pub(crate) struct UnresolvedConfiguration {
    /// Logging-related configuration.
    logging: UnresolvedLoggingConfiguration,

    /// Configuration related to the remote API.
    api: UnresolvedApiConfiguration,
}


/// The entire permgroups configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this [`Configuration`] instance was loaded from.
    pub configuration_file_path: PathBuf,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the remote API.
    pub api: ApiConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    configuration_file_path: PathBuf,
}


impl TryResolveWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let logging = self.logging.try_resolve()?;
        let api = self.api.try_resolve()?;

        Ok(Configuration {
            configuration_file_path: context.configuration_file_path,
            logging,
            api,
        })
    }
}


impl Configuration {
    /// Parse and resolve the configuration from a TOML string.
    ///
    /// `configuration_file_path` is only recorded, not read.
    pub fn load_from_str<P: Into<PathBuf>>(
        configuration_string: &str,
        configuration_file_path: P,
    ) -> Result<Self, ConfigurationLoadingError> {
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path: configuration_file_path.into(),
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Read the configuration file into memory as a string.
        let configuration_string =
            fs::read_to_string(configuration_file_path.as_ref()).map_err(|error| {
                ConfigurationLoadingError::UnableToReadConfigurationFile {
                    path: configuration_file_path.as_ref().to_path_buf(),
                    error,
                }
            })?;

        Self::load_from_str(
            &configuration_string,
            configuration_file_path.as_ref(),
        )
    }

    /// Load the configuration from the default path (`./data/configuration.toml`).
    pub fn load_from_default_path() -> Result<Self, ConfigurationLoadingError> {
        Configuration::load_from_path(get_default_configuration_file_path())
    }
}
