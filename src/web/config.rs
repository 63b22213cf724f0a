use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::views::ViewConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("default view {0} is not configured")]
    UnknownDefaultView(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    pub views: Vec<ViewConfig>,
    #[serde(default)]
    pub default_view: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        if let Some(name) = &config.default_view {
            if !config.views.iter().any(|v| &v.name == name) {
                return Err(ConfigError::UnknownDefaultView(name.clone()));
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewKind;

    #[test]
    fn example_config_parses() {
        let config = Config::from_str(include_str!("../../config.example.yaml")).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:8080");
        assert_eq!(config.default_view.as_deref(), Some("replay"));
        assert_eq!(config.views.len(), 4);
        assert!(matches!(config.views[0].kind, ViewKind::Replay(_)));
        assert!(matches!(config.views[3].kind, ViewKind::FlightPath(_)));
    }

    #[test]
    fn example_billboards_are_shipped() {
        let config = Config::from_str(include_str!("../../config.example.yaml")).unwrap();
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&config.web.assets_dir);
        let images: Vec<_> = config
            .views
            .iter()
            .filter_map(|view| match &view.kind {
                ViewKind::Billboard(b) => Some(b.billboard.image.clone()),
                _ => None,
            })
            .collect();

        assert!(!images.is_empty());
        for image in images {
            let relative = image.strip_prefix("/assets/").unwrap();
            assert!(assets.join(relative).is_file(), "{} is missing", image);
        }
    }

    #[test]
    fn web_section_is_optional() {
        let config = Config::from_str("views: []\n").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.web.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn default_view_must_exist() {
        assert!(matches!(
            Config::from_str("views: []\ndefault_view: replay\n"),
            Err(ConfigError::UnknownDefaultView(_))
        ));
    }
}
