use std::path::PathBuf;


/// Returns the default configuration file path, which is at
/// `./data/configuration.toml` (relative to the current directory).
pub fn get_default_configuration_file_path() -> PathBuf {
    PathBuf::from("./data/configuration.toml")
}
