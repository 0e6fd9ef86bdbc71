use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shared::catalog::{Catalog, CatalogError};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_MODEL: &str = "gemini-pro";
const CONFIG_FILE_NAME: &str = "book_recommender.toml";
const CONFIG_DIR_NAME: &str = "book_recommender";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid option catalog in '{path}': {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Not checked for presence; an empty key simply fails at the remote end.
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub catalog_dir: Option<PathBuf>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("catalog_dir", &self.catalog_dir)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.into(),
            model: DEFAULT_MODEL.into(),
            catalog_dir: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    gemini_api_key: Option<String>,
    gemini_endpoint: Option<String>,
    gemini_model: Option<String>,
    catalog_dir: Option<PathBuf>,
}

/// Defaults, then the TOML file, then environment overrides.
///
/// An explicit `config_path` must be readable; the implicit locations are optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_with(config_path, |name| std::env::var(name).ok())
}

fn load_settings_with(
    config_path: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    let raw = match config_path {
        Some(path) => Some(fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?),
        None => default_config_paths()
            .into_iter()
            .find_map(|path| fs::read_to_string(path).ok()),
    };

    if let Some(raw) = raw {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, var);

    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join("config.toml"));
    }
    paths
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("ignoring malformed settings file: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.gemini_api_key {
        settings.api_key = v;
    }
    if let Some(v) = file_cfg.gemini_endpoint {
        settings.endpoint = v;
    }
    if let Some(v) = file_cfg.gemini_model {
        settings.model = v;
    }
    if let Some(v) = file_cfg.catalog_dir {
        settings.catalog_dir = Some(v);
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("GEMINI_API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = var("APP__GEMINI_API_KEY") {
        settings.api_key = v;
    }

    if let Some(v) = var("APP__GEMINI_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = var("APP__GEMINI_MODEL") {
        settings.model = v;
    }
    if let Some(v) = var("APP__CATALOG_DIR") {
        settings.catalog_dir = Some(PathBuf::from(v));
    }
}

impl Settings {
    /// The configured catalog directory (`genres.json` + `moods.json`), or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(dir) = &self.catalog_dir else {
            return Catalog::builtin().map_err(|source| ConfigError::Catalog {
                path: PathBuf::from("<builtin>"),
                source,
            });
        };

        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })
        };
        let genres = read("genres.json")?;
        let moods = read("moods.json")?;

        Catalog::from_json(&genres, &moods).map_err(|source| ConfigError::Catalog {
            path: dir.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
