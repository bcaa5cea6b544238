use crate::domain::model::{SourceRow, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn preview_count(&self) -> usize;
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    /// How many customers the run report previews.
    fn preview_count(&self) -> usize;
    fn extract(&self) -> Result<Vec<SourceRow>>;
    fn transform(&self, rows: Vec<SourceRow>) -> Result<TransformResult>;
    /// Returns where the full record set was written, if anywhere.
    fn load(&self, result: &TransformResult) -> Result<Option<String>>;
}
