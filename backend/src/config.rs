//! # Application Configuration
//!
//! The server reads its settings from `instance/prod.json`. When that file is
//! absent the development configuration is used instead, which seeds a local
//! SQLite file on every start. Keys missing from the file fall back to the
//! development values as well, so a production file only has to override what
//! differs.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory holding the config file and the development database.
pub const INSTANCE_DIR: &str = "instance";

/// File name of the production configuration inside [`INSTANCE_DIR`].
pub const CONFIG_FILE: &str = "prod.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How unknown paths are resolved against the embedded site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendMode {
    /// `/page` resolves to `page.html`; anything else is a 404.
    Static,
    /// Anything unknown resolves to `index.html`.
    Spa,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `:memory:` or a path to the SQLite file.
    pub db_uri: String,
    /// Drop, recreate and seed every table on startup.
    pub seed_db: bool,
    /// Selects the resource URI domain and verbose query logging.
    pub dev_mode: bool,
    pub frontend: FrontendMode,
    /// Open the site in the default browser once the server is up (dev mode only).
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_uri: format!("{}/packagename.sqlite", INSTANCE_DIR),
            seed_db: true,
            dev_mode: true,
            frontend: FrontendMode::Static,
            open_browser: true,
        }
    }
}

impl AppConfig {
    /// Loads `prod.json` from `instance_dir`, creating the directory if needed.
    ///
    /// A missing file is not an error: the development config is returned and
    /// a warning is logged. An unreadable or malformed file is.
    pub fn load(instance_dir: &Path) -> Result<Self, ConfigError> {
        fs::create_dir_all(instance_dir).map_err(|source| ConfigError::Io {
            path: instance_dir.to_path_buf(),
            source,
        })?;

        let path = instance_dir.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("No config file found at {}", path.display());
                warn!("Falling back to dev config...");
                warn!("DO NOT run this config in prod!");
                return Ok(AppConfig::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
