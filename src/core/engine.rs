use crate::core::report;
use crate::core::Pipeline;
use crate::domain::model::ImportReport;
use crate::utils::error::Result;

pub struct ImportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ImportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ImportReport> {
        tracing::info!("Starting customer import");

        // Extract
        let rows = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows", rows.len());

        // Transform
        let result = self.pipeline.transform(rows)?;
        tracing::info!("Transformed {} customers", result.customers.len());

        // Load
        let output_path = self.pipeline.load(&result)?;
        if let Some(path) = &output_path {
            tracing::info!("Customers saved to: {}", path);
        }

        Ok(ImportReport {
            total: result.customers.len(),
            preview: report::preview(&result.customers, self.pipeline.preview_count())?,
            output_path,
        })
    }
}
