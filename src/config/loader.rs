//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::ConserveError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .smart-conserve.toml in the given directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use smart_conserve::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Loaded config with seed: {:?}", config.seed);
    /// # Ok::<(), smart_conserve::error::ConserveError>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile, ConserveError> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        project_root: &Path,
        fs: &FS,
    ) -> Result<ConfigFile, ConserveError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(ConserveError::Io {
                    context: format!("reading {}", config_path.display()),
                    source: e,
                });
            }
        };

        toml_edit::de::from_str(&contents).map_err(|source| ConserveError::Config {
            path: config_path,
            source,
        })
    }

    /// Save config to .smart-conserve.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<(), ConserveError> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<(), ConserveError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = toml_edit::ser::to_string_pretty(config)?;

        fs.write(&config_path, contents)
            .map_err(|source| ConserveError::Io {
                context: format!("writing {}", config_path.display()),
                source,
            })
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE_NAME).exists()
    }
}
