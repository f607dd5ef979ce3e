use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_CONFIG_PATH: &str = "ARBINTEL_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const DEFAULT_TERMS_PATH: &str = "terms.json";

/// Attachment handling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentConfig {
    /// Maximum accepted size for a single uploaded file, in bytes.
    #[serde(default = "default_max_attachment_bytes")]
    pub max_bytes: usize,
}

fn default_max_attachment_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_attachment_bytes(),
        }
    }
}

/// Persistent state configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateConfig {
    /// Path of the terms-acceptance state file.
    #[serde(default)]
    pub terms_path: Option<PathBuf>,
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub attachments: Option<AttachmentConfig>,
    #[serde(default)]
    pub state: StateConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub attachments: AttachmentConfig,
    pub terms_path: PathBuf,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attachments: AttachmentConfig::default(),
            terms_path: PathBuf::from(DEFAULT_TERMS_PATH),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self {
            attachments: file.attachments.unwrap_or_default(),
            terms_path: file
                .state
                .terms_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TERMS_PATH)),
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.attachments.max_bytes, 10 * 1024 * 1024);
        assert_eq!(config.terms_path, PathBuf::from("terms.json"));
    }

    #[test]
    fn test_config_file_parsing() {
        let yaml = r#"
attachments:
  max_bytes: 1048576
state:
  terms_path: /var/lib/arbintel/terms.json
"#;
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.attachments.unwrap().max_bytes, 1_048_576);
        assert_eq!(
            file.state.terms_path.unwrap(),
            PathBuf::from("/var/lib/arbintel/terms.json")
        );
    }
}
