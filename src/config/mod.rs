pub mod cli;
pub mod toml_config;

pub use cli::LocalStorage;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "../musteri_ornek_format_40_musteri.csv";
pub const DEFAULT_PREVIEW_COUNT: usize = 2;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customer-import")]
#[command(about = "Convert a customer CSV into nested customer/case JSON records")]
pub struct CliConfig {
    /// CSV file with a header row
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// Number of customers to print as a JSON preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COUNT)]
    pub preview_count: usize,

    /// Also write every customer as a JSON array to this file
    #[arg(long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn preview_count(&self) -> usize {
        self.preview_count
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_optional_path("output", self.output.as_deref())
    }
}

/// Plain options for library callers that do not go through a CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub input_path: String,
    pub preview_count: usize,
    pub output_path: Option<String>,
}

impl ImportOptions {
    pub fn new(input_path: impl Into<String>, preview_count: usize) -> Self {
        Self {
            input_path: input_path.into(),
            preview_count,
            output_path: None,
        }
    }

    pub fn with_output(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_PREVIEW_COUNT)
    }
}

impl ConfigProvider for ImportOptions {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn preview_count(&self) -> usize {
        self.preview_count
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for ImportOptions {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_optional_path("output_path", self.output_path.as_deref())
    }
}
