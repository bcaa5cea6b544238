pub mod engine;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Customer, ImportReport, SourceRow, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::config::{ImportOptions, LocalStorage};
use engine::ImportEngine;
use pipeline::CustomerImportPipeline;

/// Reads and converts every row of the CSV at `path`, in file order.
///
/// The first malformed numeric value aborts the whole call.
pub fn parse_customers(path: &str) -> Result<Vec<Customer>> {
    let options = ImportOptions {
        input_path: path.to_string(),
        ..ImportOptions::default()
    };
    let pipeline = CustomerImportPipeline::new(LocalStorage::default(), options);
    let rows = pipeline.extract()?;
    Ok(pipeline.transform(rows)?.customers)
}

/// Runs a full import of `input` and renders the first `preview_count` customers.
pub fn run_import(input: &str, preview_count: usize) -> Result<ImportReport> {
    let pipeline = CustomerImportPipeline::new(
        LocalStorage::default(),
        ImportOptions::new(input, preview_count),
    );
    ImportEngine::new(pipeline).run()
}
