//! Configuration file support for menubar.
//!
//! The configuration is a small JSON document stored in the standard config
//! directory (`~/.config/menubar/config.json` on most platforms). It names
//! where the menu documents live and where the TUI should write its log.
//! Every field is optional; a missing file yields the defaults.
//!
//! Document roots resolve in layers: command-line flags, then the
//! `MENUBAR_DATA_DIR`/`MENUBAR_BASE_URL` environment variables, then the
//! configuration file, and finally the current directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use menubar_types::MenuLocations;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "MENUBAR_CONFIG_PATH";

/// Environment variable naming a directory that holds the menu documents.
pub const DATA_DIR_ENV: &str = "MENUBAR_DATA_DIR";

/// Environment variable naming a base URL that serves the menu documents.
pub const BASE_URL_ENV: &str = "MENUBAR_BASE_URL";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error surfaced when reading configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file (for example, permissions).
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A single layer named both a data directory and a base URL.
    #[error("{layer} sets both a data directory and a base URL; choose one")]
    AmbiguousRoot { layer: &'static str },
}

/// Where the three menu documents are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRoot {
    Directory(PathBuf),
    Url(String),
}

/// Persisted configuration values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenubarConfig {
    /// Directory holding the menu documents.
    pub data_dir: Option<PathBuf>,
    /// Base URL serving the menu documents.
    pub base_url: Option<String>,
    /// Per-menu document names relative to the root.
    pub locations: MenuLocations,
    /// File that receives log output while the TUI owns the terminal.
    pub log_file: Option<PathBuf>,
}

impl MenubarConfig {
    /// Loads the configuration from `$MENUBAR_CONFIG_PATH` or the default config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path())
    }

    /// Loads the configuration from an explicit path.
    ///
    /// A missing file yields defaults. A file that cannot be parsed is logged
    /// and also yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file found; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match serde_json::from_str::<MenubarConfig>(&data) {
            Ok(mut config) => {
                config.data_dir = config.data_dir.map(|dir| expand_tilde(&dir.to_string_lossy()));
                config.log_file = config.log_file.map(|file| expand_tilde(&file.to_string_lossy()));
                Ok(config)
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse config file; using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Resolves the document root from flags, environment, and this config.
    pub fn resolve_root(&self, data_dir: Option<PathBuf>, base_url: Option<String>) -> Result<DocumentRoot, ConfigError> {
        if let Some(root) = pick_root("command line", data_dir, base_url)? {
            return Ok(root);
        }

        let env_dir = non_empty_env(DATA_DIR_ENV).map(|value| expand_tilde(&value));
        let env_url = non_empty_env(BASE_URL_ENV);
        if let Some(root) = pick_root("environment", env_dir, env_url)? {
            return Ok(root);
        }

        if let Some(root) = pick_root("config file", self.data_dir.clone(), self.base_url.clone())? {
            return Ok(root);
        }

        Ok(DocumentRoot::Directory(PathBuf::from(".")))
    }
}

fn pick_root(layer: &'static str, data_dir: Option<PathBuf>, base_url: Option<String>) -> Result<Option<DocumentRoot>, ConfigError> {
    match (data_dir, base_url) {
        (Some(_), Some(_)) => Err(ConfigError::AmbiguousRoot { layer }),
        (Some(dir), None) => Ok(Some(DocumentRoot::Directory(dir))),
        (None, Some(url)) => Ok(Some(DocumentRoot::Url(url))),
        (None, None) => Ok(None),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Path of the configuration file, honoring `MENUBAR_CONFIG_PATH`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = non_empty_env(CONFIG_PATH_ENV) {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("menubar")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use menubar_types::MenuKey;
    use tempfile::tempdir;

    fn unset_root_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars_unset([DATA_DIR_ENV, BASE_URL_ENV], f)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = MenubarConfig::load_from(&dir.path().join("absent.json")).expect("load");
        assert_eq!(config, MenubarConfig::default());
        assert_eq!(config.locations.get(MenuKey::Menu1), "menu1-data.json");
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").expect("write");
        let config = MenubarConfig::load_from(&path).expect("load");
        assert_eq!(config, MenubarConfig::default());
    }

    #[test]
    fn reads_fields_and_partial_locations() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{ "base_url": "https://example.com/site/", "locations": { "menu3": "kunskap.json" } }"#,
        )
        .expect("write");
        let config = MenubarConfig::load_from(&path).expect("load");
        assert_eq!(config.base_url.as_deref(), Some("https://example.com/site/"));
        assert_eq!(config.locations.get(MenuKey::Menu2), "menu2-data.json");
        assert_eq!(config.locations.get(MenuKey::Menu3), "kunskap.json");
    }

    #[test]
    fn command_line_wins_over_environment_and_file() {
        let config = MenubarConfig {
            base_url: Some("https://file.example.com/".into()),
            ..Default::default()
        };
        temp_env::with_var(DATA_DIR_ENV, Some("/env/menus"), || {
            let root = config.resolve_root(Some(PathBuf::from("/cli/menus")), None).expect("resolve");
            assert_eq!(root, DocumentRoot::Directory(PathBuf::from("/cli/menus")));
        });
    }

    #[test]
    fn environment_wins_over_file() {
        let config = MenubarConfig {
            data_dir: Some(PathBuf::from("/file/menus")),
            ..Default::default()
        };
        temp_env::with_vars(
            [(DATA_DIR_ENV, None), (BASE_URL_ENV, Some("http://localhost:8080/"))],
            || {
                let root = config.resolve_root(None, None).expect("resolve");
                assert_eq!(root, DocumentRoot::Url("http://localhost:8080/".into()));
            },
        );
    }

    #[test]
    fn falls_back_to_file_then_current_directory() {
        unset_root_env(|| {
            let config = MenubarConfig {
                data_dir: Some(PathBuf::from("/file/menus")),
                ..Default::default()
            };
            assert_eq!(
                config.resolve_root(None, None).expect("resolve"),
                DocumentRoot::Directory(PathBuf::from("/file/menus"))
            );
            assert_eq!(
                MenubarConfig::default().resolve_root(None, None).expect("resolve"),
                DocumentRoot::Directory(PathBuf::from("."))
            );
        });
    }

    #[test]
    fn both_roots_in_one_layer_is_rejected() {
        unset_root_env(|| {
            let config = MenubarConfig {
                data_dir: Some(PathBuf::from("/a")),
                base_url: Some("http://b/".into()),
                ..Default::default()
            };
            let error = config.resolve_root(None, None).expect_err("ambiguous");
            assert!(matches!(error, ConfigError::AmbiguousRoot { layer: "config file" }));
        });
    }

    #[test]
    fn config_path_env_override_is_used() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/menubar-test/config.json"), || {
            assert_eq!(default_config_path(), PathBuf::from("/tmp/menubar-test/config.json"));
        });
    }
}
