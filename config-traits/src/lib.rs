use std::fmt;
use std::fs::create_dir_all;
use std::path::PathBuf;

use log::{error, warn};
pub use ron;
use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Ron(ron::Error),
    RonParse(ron::error::SpannedError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config {path:?}: {e}"),
            ConfigError::Ron(e) => write!(f, "RON Error: {e}"),
            ConfigError::RonParse(e) => write!(f, "RON Parse Error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        Self::Ron(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::RonParse(e)
    }
}

/// Config file helper traits. Only `new()`, `file_name()` and `config_dir()`
/// are required to be implemented, the rest are intended to be free methods.
pub trait StdConfig
where
    Self: Serialize + DeserializeOwned,
{
    /// Taking over the standard `new()` to ensure things can be generic
    fn new() -> Self;

    /// Return the config files names, such as `wibble.ron`
    fn file_name(&self) -> String;

    /// Return the full path to the directory the config file resides in
    fn config_dir(&self) -> PathBuf;

    /// Return the full path to the config file
    fn file_path(&self) -> PathBuf {
        let mut config = self.config_dir();
        config.push(self.file_name());
        config
    }

    /// Parse the config file, `Ok(None)` if there is no file yet
    fn read(&self) -> Result<Option<Self>, ConfigError> {
        let path = self.file_path();
        match std::fs::read_to_string(&path) {
            Ok(buf) if buf.trim().is_empty() => {
                warn!("File is empty {path:?}");
                Ok(None)
            }
            Ok(buf) => Ok(Some(ron::from_str(&buf)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Io(path, e)),
        }
    }

    /// Write the config file data to pretty ron format, creating the config
    /// directory if needed
    fn write(&self) -> Result<(), ConfigError> {
        let dir = self.config_dir();
        create_dir_all(&dir).map_err(|e| ConfigError::Io(dir, e))?;
        let ron = ron::ser::to_string_pretty(&self, PrettyConfig::new().depth_limit(4))?;
        let path = self.file_path();
        std::fs::write(&path, ron).map_err(|e| ConfigError::Io(path, e))
    }

    /// Renames the existing file to `<file>-old`
    fn rename_file_old(&self) -> Result<(), ConfigError> {
        warn!(
            "Renaming {} to {}-old and recreating config",
            self.file_name(),
            self.file_name()
        );
        let cfg_old = self.file_path().to_string_lossy().to_string() + "-old";
        std::fs::rename(self.file_path(), cfg_old).map_err(|e| ConfigError::Io(self.file_path(), e))
    }
}

/// Loading with recovery.
///
/// # Example
/// ```rust
/// use std::path::PathBuf;
/// use serde::{Deserialize, Serialize};
/// use config_traits::{StdConfig, StdConfigLoad};
///
/// #[derive(Deserialize, Serialize)]
/// struct LightConfig {}
///
/// impl StdConfig for LightConfig {
///     fn new() -> Self { Self {} }
///
///     fn file_name(&self) -> std::string::String { "test_name.ron".to_owned() }
///
///     fn config_dir(&self) -> PathBuf { std::env::temp_dir() }
/// }
///
/// impl StdConfigLoad for LightConfig {}
/// ```
///
/// `self` is the default config and decides where the file lives. A missing
/// file is created from it. A file that fails to parse is renamed to
/// `<file>-old` and replaced by it.
pub trait StdConfigLoad
where
    Self: StdConfig,
{
    fn load(self) -> Result<Self, ConfigError> {
        let config = match self.read() {
            Ok(Some(data)) => return Ok(data),
            Ok(None) => self,
            Err(ConfigError::Io(path, e)) => return Err(ConfigError::Io(path, e)),
            Err(e) => {
                error!("Could not parse {:?}: {e}", self.file_path());
                self.rename_file_old()?;
                self
            }
        };
        config.write()?;
        Ok(config)
    }
}
