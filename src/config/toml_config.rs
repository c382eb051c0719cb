use crate::core::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::{FlyoverError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub http: HttpConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of passes to show; all of them when unset.
    pub limit: Option<usize>,
    pub format: OutputFormat,
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

        toml::from_str(&processed_content).map_err(|e| FlyoverError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ISS_FLYOVER_TIMEOUT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FlyoverError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("http.timeout_seconds", self.http.timeout_seconds, 1)?;

        if self.http.user_agent.trim().is_empty() {
            return Err(FlyoverError::InvalidConfigValueError {
                field: "http.user_agent".to_string(),
                value: self.http.user_agent.clone(),
                reason: "User agent cannot be empty".to_string(),
            });
        }

        if let Some(limit) = self.output.limit {
            validate_positive_number("output.limit", limit as u64, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn timeout_seconds(&self) -> u64 {
        self.http.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }

    fn pass_limit(&self) -> Option<usize> {
        self.output.limit
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[http]
timeout_seconds = 30
user_agent = "flyover-test/1.0"

[output]
limit = 5
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.timeout_seconds(), 30);
        assert_eq!(config.user_agent(), "flyover-test/1.0");
        assert_eq!(config.pass_limit(), Some(5));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.pass_limit(), None);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ISS_FLYOVER_TEST_AGENT", "from-env/2.0");

        let toml_content = r#"
[http]
user_agent = "${ISS_FLYOVER_TEST_AGENT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.http.user_agent, "from-env/2.0");

        std::env::remove_var("ISS_FLYOVER_TEST_AGENT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[http]
user_agent = "${ISS_FLYOVER_DEFINITELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.http.user_agent, "${ISS_FLYOVER_DEFINITELY_UNSET}");
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let toml_content = r#"
[output]
format = "yaml"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, FlyoverError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let zero_timeout = TomlConfig::from_toml_str("[http]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());

        let zero_limit = TomlConfig::from_toml_str("[output]\nlimit = 0\n").unwrap();
        assert!(zero_limit.validate().is_err());

        let blank_agent = TomlConfig::from_toml_str("[http]\nuser_agent = \" \"\n").unwrap();
        assert!(blank_agent.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[output]
limit = 3
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pass_limit(), Some(3));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/iss-flyover.toml").unwrap_err();
        assert!(matches!(err, FlyoverError::IoError(_)));
    }
}
