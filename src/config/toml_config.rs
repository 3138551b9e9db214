use crate::domain::model::ClientConfig;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_header, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| ClientError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${BACKEND_HOST})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ClientError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 把檔案中的設定疊加到既有的 ClientConfig 上
    pub fn apply_to(&self, mut config: ClientConfig) -> Result<ClientConfig> {
        if let Some(base_url) = &self.client.base_url {
            config = config.with_base_url(base_url)?;
        }

        if let Some(headers) = &self.client.headers {
            for (name, value) in headers {
                config = config.with_header(name, value)?;
            }
        }

        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.client.base_url {
            validate_url("client.base_url", base_url)?;
        }
        if let Some(headers) = &self.client.headers {
            for (name, value) in headers {
                validate_header(name, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[client]
base_url = "http://checker.internal:9000"

[client.headers]
X-Env = "staging"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("http://checker.internal:9000")
        );

        let client_config = config.apply_to(ClientConfig::default()).unwrap();
        assert_eq!(
            client_config.base_url().as_str(),
            "http://checker.internal:9000/"
        );
        assert_eq!(
            client_config.default_headers().get("X-Env").map(String::as_str),
            Some("staging")
        );
        assert!(client_config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let client_config = config.apply_to(ClientConfig::default()).unwrap();
        assert_eq!(client_config, ClientConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SERVICES_STATUS_TEST_HOST", "checker.test");

        let toml_content = r#"
[client]
base_url = "http://${SERVICES_STATUS_TEST_HOST}:9000"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("http://checker.test:9000")
        );

        std::env::remove_var("SERVICES_STATUS_TEST_HOST");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[client]
base_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(config.apply_to(ClientConfig::default()).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[client]
base_url = "https://status.example.com"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("https://status.example.com")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
