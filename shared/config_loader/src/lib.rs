//! # Config Loader
//!
//! Locates, reads and parses configuration files.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_properties};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("data-consumer.conf")?;
//!     let props = load_properties(&path)?;
//!     let level = props.get("logging.level").unwrap_or("info");
//!     println!("log level: {}", level);
//!     Ok(())
//! }
//! ```

pub mod error;
mod properties;

pub use error::{ConfigError, Result};
pub use properties::Properties;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "DATA_CONSUMER_CONFIG";

/// Reads a configuration file into a string.
///
/// The content is not validated here.
///
/// # Errors
///
/// [`ConfigError::FileNotFound`] if the path does not exist,
/// [`ConfigError::ReadError`] if it cannot be read.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Reads and parses a properties file.
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Properties> {
    let content = load_config_file(path)?;
    Properties::parse(&content)
}

/// Looks for a configuration file in the usual places.
///
/// Search order:
/// 1. the path in [`CONFIG_PATH_ENV`], if set and existing
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    search_dirs(filename, &[Path::new("./config"), Path::new("./")]).ok_or_else(|| {
        ConfigError::FileNotFound(format!(
            "'{}' not found. Searched: {} env var, ./config/{}, ./{}",
            filename, CONFIG_PATH_ENV, filename, filename
        ))
    })
}

/// Finds, reads and parses a properties file in one step.
pub fn find_and_load(filename: &str) -> Result<Properties> {
    let path = find_config_file(filename)?;
    load_properties(path)
}

fn search_dirs(filename: &str, dirs: &[&Path]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}
