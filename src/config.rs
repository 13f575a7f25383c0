use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "team-report.json";
pub const DEFAULT_CONTACT_EMAIL: &str = "hackbio@example.com";
pub const DEFAULT_TOOL: &str = "team-report";
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
pub const DEFAULT_PREVIEW_LEN: usize = 60;

/// On-disk shape of `team-report.json`. Every key is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub preview_len: Option<usize>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub contact_email: Option<String>,
    pub preview_len: Option<usize>,
}

/// Immutable settings handed to the fetcher and reporter at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub contact_email: String,
    pub tool: String,
    pub base_url: String,
    pub preview_len: usize,
    pub api_key: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            preview_len: DEFAULT_PREVIEW_LEN,
            api_key: None,
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(
        path: Option<&Utf8Path>,
        overrides: ConfigOverrides,
    ) -> Result<ReportConfig, ConfigError> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let default_path = Utf8PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read(&default_path)?
                } else {
                    Config::default()
                }
            }
        };
        let env_api_key = std::env::var("NCBI_API_KEY").ok();
        Self::resolve_config(config, overrides, env_api_key)
    }

    fn read(path: &Utf8Path) -> Result<Config, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|_| ConfigError::Read(path.to_path_buf()))?;
        serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn resolve_config(
        config: Config,
        overrides: ConfigOverrides,
        env_api_key: Option<String>,
    ) -> Result<ReportConfig, ConfigError> {
        let defaults = ReportConfig::default();

        let contact_email = overrides
            .contact_email
            .or(config.contact_email)
            .unwrap_or(defaults.contact_email);
        if contact_email.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "contact email must not be empty".to_string(),
            ));
        }

        let preview_len = overrides
            .preview_len
            .or(config.preview_len)
            .unwrap_or(defaults.preview_len);
        if preview_len == 0 {
            return Err(ConfigError::Invalid(
                "preview length must be positive".to_string(),
            ));
        }

        let api_key = config
            .api_key
            .or(env_api_key)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(ReportConfig {
            contact_email: contact_email.trim().to_string(),
            tool: config.tool.unwrap_or(defaults.tool),
            base_url: config
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            preview_len,
            api_key,
        })
    }
}
