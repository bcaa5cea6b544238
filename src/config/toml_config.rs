use crate::config::DEFAULT_PREVIEW_COUNT;
use crate::core::ConfigProvider;
use crate::utils::error::{ImportError, Result};
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub preview: Option<PreviewConfig>,
    pub load: Option<LoadConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "compact" (default) or "json"
    pub format: Option<String>,
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

        toml::from_str(&processed_content).map_err(|e| ImportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${IMPORT_DIR})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ImportError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format == "json")
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn preview_count(&self) -> usize {
        self.preview
            .as_ref()
            .and_then(|p| p.count)
            .unwrap_or(DEFAULT_PREVIEW_COUNT)
    }

    fn output_path(&self) -> Option<&str> {
        self.load.as_ref().and_then(|l| l.output_path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.path", &self.source.path)?;
        validate_optional_path("load.output_path", self.output_path())?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format) {
                return Err(ImportError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
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
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
path = "data/customers.csv"

[preview]
count = 5

[load]
output_path = "out/customers.json"

[logging]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/customers.csv");
        assert_eq!(config.preview_count(), 5);
        assert_eq!(config.output_path(), Some("out/customers.json"));
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[source]\npath = \"customers.csv\"\n").unwrap();

        assert_eq!(config.preview_count(), 2);
        assert_eq!(config.output_path(), None);
        assert!(!config.json_logging());
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let result = TomlConfig::from_toml_str("[preview]\ncount = 1\n");
        assert!(matches!(result, Err(ImportError::ConfigError { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CUSTOMER_IMPORT_TEST_DIR", "/srv/imports");

        let toml_content = r#"
[source]
path = "${CUSTOMER_IMPORT_TEST_DIR}/customers.csv"

[load]
output_path = "${CUSTOMER_IMPORT_UNSET_VAR}/out.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/srv/imports/customers.csv");
        assert_eq!(
            config.output_path(),
            Some("${CUSTOMER_IMPORT_UNSET_VAR}/out.json")
        );

        std::env::remove_var("CUSTOMER_IMPORT_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let empty_path = TomlConfig::from_toml_str("[source]\npath = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());

        let bad_format = TomlConfig::from_toml_str(
            "[source]\npath = \"customers.csv\"\n[logging]\nformat = \"xml\"\n",
        )
        .unwrap();
        assert!(matches!(
            bad_format.validate(),
            Err(ImportError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\npath = \"file-test.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "file-test.csv");
    }
}
