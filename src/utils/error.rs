use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid {expected} in column '{column}' on line {line}: '{value}'")]
    InvalidNumberError {
        line: u64,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2, // 配置錯誤
            ErrorSeverity::High => 1,   // 資料錯誤
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::IoError(_) => ErrorCategory::Io,
            ImportError::CsvError(e) if e.is_io_error() => ErrorCategory::Io,
            ImportError::CsvError(_)
            | ImportError::SerializationError(_)
            | ImportError::InvalidNumberError { .. } => ErrorCategory::Data,
            ImportError::ConfigError { .. }
            | ImportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ImportError::IoError(_) => {
                "Check that the input file exists and is readable".to_string()
            }
            ImportError::CsvError(_) => {
                "Make sure the file is UTF-8 encoded, comma separated CSV with a header row"
                    .to_string()
            }
            ImportError::SerializationError(_) => {
                "The parsed records could not be rendered as JSON".to_string()
            }
            ImportError::InvalidNumberError { line, column, .. } => format!(
                "Fix or clear the '{}' value on line {} and run the import again",
                column, line
            ),
            ImportError::ConfigError { .. } | ImportError::InvalidConfigValueError { .. } => {
                "Review the command line options or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ImportError::IoError(e) => format!("Could not read the input file: {}", e),
            ImportError::CsvError(e) => format!("The input file is not valid CSV: {}", e),
            ImportError::InvalidNumberError {
                line,
                column,
                value,
                expected,
            } => format!(
                "Line {}: '{}' is not a valid {} for column '{}'. Nothing was imported.",
                line, value, expected, column
            ),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_is_a_data_error() {
        let err = ImportError::InvalidNumberError {
            line: 3,
            column: "damage_amount".to_string(),
            value: "abc".to_string(),
            expected: "decimal",
        };

        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err.user_friendly_message().contains("Line 3"));
        assert!(err.recovery_suggestion().contains("damage_amount"));
    }

    #[test]
    fn test_missing_file_is_critical() {
        let err = ImportError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.csv",
        ));

        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = ImportError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        assert_eq!(err.severity().exit_code(), 2);
    }
}
