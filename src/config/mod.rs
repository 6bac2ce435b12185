mod defaults;
mod display;
mod validation;

use crate::cli::Args;
use crate::error::{HookchatError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{DEFAULT_TIMEOUT_SECS, DEFAULT_WEBHOOK_URL};
pub use display::DisplayConfig;
pub use validation::{expand_env_var_in_string, validate_webhook_url};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Shape of `.hookchat.yaml` / `.hookchat.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Resolved settings for one run of the client.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub timeout_secs: u64,
    pub verbose: bool,
    pub display: DisplayConfig,
}

/// Whether the status panel can promise a working endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotConfigured,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;
        Self::resolve(args, &file_config, |key| env::var(key).ok())
    }

    /// Merge settings: CLI args > environment > config file > defaults.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = args
            .webhook_url
            .clone()
            .or_else(|| lookup("HOOKCHAT_WEBHOOK_URL"))
            .or_else(|| file_config.webhook.url.clone())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        let webhook_url = expand_env_var_in_string(raw_url.trim(), &lookup);
        validate_webhook_url(&webhook_url).map_err(HookchatError::ConfigError)?;

        let env_timeout = match lookup("HOOKCHAT_TIMEOUT") {
            Some(v) => Some(v.trim().parse::<u64>().map_err(|_| {
                HookchatError::ConfigError(format!("HOOKCHAT_TIMEOUT must be a number, got '{}'", v))
            })?),
            None => None,
        };

        let timeout_secs = args
            .timeout
            .or(env_timeout)
            .or(file_config.webhook.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        if timeout_secs == 0 {
            return Err(HookchatError::ConfigError(
                "timeout must be at least 1 second".to_string(),
            ));
        }

        let verbose = args.verbose
            || lookup("HOOKCHAT_VERBOSE")
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Ok(Config {
            webhook_url,
            timeout_secs,
            verbose,
            display: file_config.display.clone(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn readiness(&self) -> Readiness {
        if self.webhook_url.is_empty() {
            Readiness::NotConfigured
        } else {
            Readiness::Ready
        }
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Ok(Self::load_from(&path)?);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".hookchat.yaml"),
            PathBuf::from(".hookchat.yml"),
            PathBuf::from(".hookchat.json"),
        ];

        if let Some(dir) = Self::user_config_dir() {
            paths.push(dir.join("hookchat.yaml"));
            paths.push(dir.join("hookchat.yml"));
            paths.push(dir.join("hookchat.json"));
        }

        paths
    }

    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("hookchat"))
    }

    pub fn example() -> Self {
        FileConfig {
            webhook: WebhookConfig {
                url: Some(DEFAULT_WEBHOOK_URL.to_string()),
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            },
            session: SessionConfig {
                verbose: Some(false),
            },
            display: DisplayConfig::default(),
        }
    }

    /// Write the example config to `path`, refusing to clobber an existing file.
    pub fn write_example(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(HookchatError::ConfigError(format!(
                "config file already exists: {}",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&Self::example())?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
