pub mod toml_config;

use crate::domain::model::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;
use toml_config::TomlConfig;

pub const BASE_URL_ENV: &str = "SERVICES_STATUS_BASE_URL";

/// 依序疊加：內建預設值、TOML 檔案、`SERVICES_STATUS_BASE_URL`、最後是明確指定的基底位址
pub fn resolve_client_config(
    config_path: Option<&Path>,
    base_url_override: Option<&str>,
) -> Result<ClientConfig> {
    let env_base_url = std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    resolve_with_env(config_path, env_base_url.as_deref(), base_url_override)
}

fn resolve_with_env(
    config_path: Option<&Path>,
    env_base_url: Option<&str>,
    base_url_override: Option<&str>,
) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(path) = config_path {
        tracing::debug!("Loading config file: {}", path.display());
        let file_config = TomlConfig::from_file(path)?;
        file_config.validate()?;
        config = file_config.apply_to(config)?;
    }

    if let Some(base_url) = env_base_url {
        tracing::debug!("Using base URL from {}", BASE_URL_ENV);
        config = config.with_base_url(base_url)?;
    }

    if let Some(base_url) = base_url_override {
        config = config.with_base_url(base_url)?;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "services-status")]
#[command(about = "Fetch the service list from a service-checker backend")]
pub struct CliConfig {
    /// Backend base URL, e.g. http://localhost:9000 (falls back to SERVICES_STATUS_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// TOML file with a [client] section
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn client_config(&self) -> Result<ClientConfig> {
        resolve_client_config(self.config.as_deref(), self.base_url.as_deref())
    }
}
