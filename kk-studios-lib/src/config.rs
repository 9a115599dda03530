use std::{fs, io, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use thiserror::Error;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "kk_studios.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config file")]
    Io(#[from] io::Error),
    #[error("couldn't parse config file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, SmartDefault)]
#[serde(default)]
pub struct SiteConfig {
    #[default("KK Studios".to_string())]
    pub studio_name: String,
    #[default("assets/production.wav".to_string())]
    pub production_audio: String,
    #[default("assets/mixing.wav".to_string())]
    pub mixing_audio: String,
    #[default(10)]
    pub seek_step_secs: u64,
    #[default(default_gallery())]
    pub gallery: Vec<String>,
    /// pixels per carousel arrow press
    #[default(500.0)]
    pub scroll_step: f64,
    #[default(1500)]
    pub submission_delay_ms: u64,
}

fn default_gallery() -> Vec<String> {
    [
        "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4",
        "https://images.unsplash.com/photo-1494232410401-ad00d5433cfa",
        "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad",
        "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4",
        "https://images.unsplash.com/photo-1494232410401-ad00d5433cfa",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl SiteConfig {
    pub fn from_toml(text: &str) -> Result<SiteConfig, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// A missing file means defaults; an unreadable or broken one is still an
    /// error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                Ok(config)
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found, using defaults", path.display());
                Ok(SiteConfig::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn seek_step(&self) -> Duration {
        Duration::from_secs(self.seek_step_secs)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site() {
        let config = SiteConfig::default();
        assert_eq!(config.studio_name, "KK Studios");
        assert_eq!(config.seek_step(), Duration::from_secs(10));
        assert_eq!(config.scroll_step, 500.0);
        assert_eq!(config.gallery.len(), 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            studio_name = "Night Owl"
            gallery = ["one.png"]
            submission_delay_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.studio_name, "Night Owl");
        assert_eq!(config.gallery, vec!["one.png".to_string()]);
        assert_eq!(config.submission_delay(), Duration::from_millis(10));
        assert_eq!(config.mixing_audio, "assets/mixing.wav");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(
            SiteConfig::from_toml("seek_step_secs = \"ten\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = SiteConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn existing_file_that_isnt_utf8_is_an_error() {
        let path = std::env::temp_dir().join("kk_studios_config_not_utf8.toml");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let result = SiteConfig::load_or_default(&path);

        let _ = fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::Io(ref e)) if e.kind() == io::ErrorKind::InvalidData
        ));
    }

    #[test]
    fn existing_file_is_loaded() {
        let path = std::env::temp_dir().join("kk_studios_config_valid.toml");
        fs::write(&path, "scroll_step = 320.0\n").unwrap();

        let config = SiteConfig::load_or_default(&path).unwrap();

        let _ = fs::remove_file(&path);
        assert_eq!(config.scroll_step, 320.0);
    }
}
