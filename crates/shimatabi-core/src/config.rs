//! Site and operator configuration.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure, loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings.
    #[serde(default)]
    pub serve: ServeConfig,

    /// Deployment settings.
    #[serde(default)]
    pub deploy: DeployConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Bundler output directory.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// Static asset directory copied through to the output.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

/// Development server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Deployment configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Public URL the site is published at (GitHub Pages).
    #[serde(default)]
    pub pages_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_title() -> String {
    "濑户内海艺术祭六日跳岛游".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is a [`CoreError::Config`]; other read failures stay
    /// IO errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::config_with_source(
                    format!("configuration file {} not found", path.display()),
                    e,
                )
            } else {
                CoreError::Io(e)
            }
        })?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.build.dist_dir, "dist");
        assert_eq!(config.build.public_dir, "public");
        assert_eq!(config.serve.port, 3000);
        assert!(config.deploy.pages_url.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[site]
title = "跳岛游"
description = "六日行程"

[build]
dist_dir = "out"

[serve]
port = 8080

[deploy]
pages_url = "https://example.github.io/tour/"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.site.title, "跳岛游");
        assert_eq!(config.site.description.as_deref(), Some("六日行程"));
        assert_eq!(config.build.dist_dir, "out");
        // Unset sections fall back to defaults.
        assert_eq!(config.build.public_dir, "public");
        assert_eq!(config.serve.port, 8080);
        assert_eq!(
            config.deploy.pages_url.as_deref(),
            Some("https://example.github.io/tour/")
        );
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.site.title, default_title());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = Config::load("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
        assert!(err.to_string().contains("does-not-exist.toml"));
    }

    #[test]
    fn test_load_malformed_toml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[site\ntitle = ").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
