use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use serde::Deserialize;

const SETTINGS_FILE: &str = "site.toml";

/// Where the exported site lives and how it is served
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub bind: String,
    pub dist_dir: PathBuf,
    /// URL prefix the bundle was built for, without trailing slash. Empty serves at the root.
    pub base_path: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".into(),
            dist_dir: PathBuf::from("frontend/dist"),
            base_path: "/procabservices".into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid bind address {0:?}")]
    InvalidBind(String),
    #[error("base path must start with '/', got {0:?}")]
    InvalidBasePath(String),
}

impl SiteSettings {
    /// Defaults, then `site.toml` if present, then `SITE_*` environment overrides
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
    }

    pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = if path.exists() {
            let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str::<SiteSettings>(&raw).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            SiteSettings::default()
        };

        if let Some(v) = env("SITE_BIND") {
            settings.bind = v;
        }
        if let Some(v) = env("SITE_DIST_DIR") {
            settings.dist_dir = PathBuf::from(v);
        }
        if let Some(v) = env("SITE_BASE_PATH") {
            settings.base_path = v;
        }

        settings.base_path = normalize_base_path(&settings.base_path)?;
        Ok(settings)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidBind(self.bind.clone()))
    }
}

fn normalize_base_path(raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(SettingsError::InvalidBasePath(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
