//! Configuration discovery and loading.

pub mod types;

use {
    crate::{constants::CONFIG_FILE, Error, Result},
    std::path::Path,
};
pub use types::Config;

/// Loads configuration from `explicit` or, failing that, from `pygen.toml` in
/// the working directory if it exists. Otherwise returns defaults.
///
/// # Errors
/// Returns an error if `explicit` does not exist or a config file is malformed.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) if !path.is_file() => Err(Error::ConfigNotFound(path.to_path_buf())),
        Some(path) => read(path),
        None if Path::new(CONFIG_FILE).exists() => read(Path::new(CONFIG_FILE)),
        None => Ok(Config::default()),
    }
}

fn read(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
