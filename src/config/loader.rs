use std::fs;
use std::path::Path;

use crate::error::{IntakeBoardError, Result};

use super::model::{Config, CONFIG_FILE_NAME};

/// Trait for loading configuration from some source.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when none exists.
    ///
    /// # Errors
    /// Returns an error if a present file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from TOML files on disk.
#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        self.load_from_path(path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(IntakeBoardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
