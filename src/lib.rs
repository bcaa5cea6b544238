pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ImportOptions, LocalStorage};

pub use crate::core::{
    engine::ImportEngine, parse_customers, pipeline::CustomerImportPipeline, run_import,
};
pub use domain::model::{Case, Customer, ImportReport};
pub use utils::error::{ImportError, Result};
