use crate::core::{ConfigProvider, Pipeline, SourceRow, Storage, TransformResult};
use crate::domain::model::{Customer, RawRow};
use crate::utils::error::Result;

pub struct CustomerImportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CustomerImportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads header-keyed rows from CSV bytes, in file order.
pub fn read_rows(data: &[u8]) -> Result<Vec<SourceRow>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = last_occurrence_headers(reader.headers()?);
    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // 欄位數與表頭對齊：缺的補空字串，多的丟掉
        record.truncate(headers.len());
        while record.len() < headers.len() {
            record.push_field("");
        }

        let row: RawRow = record.deserialize(Some(&headers))?;
        rows.push(SourceRow { line, row });
    }

    Ok(rows)
}

/// Blanks out every header that is repeated further right, so a duplicated
/// column resolves to its last cell and serde never sees the name twice.
fn last_occurrence_headers(headers: &csv::StringRecord) -> csv::StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if headers.iter().skip(i + 1).any(|later| later == name) {
                ""
            } else {
                name
            }
        })
        .collect()
}

impl<S: Storage, C: ConfigProvider> Pipeline for CustomerImportPipeline<S, C> {
    fn preview_count(&self) -> usize {
        self.config.preview_count()
    }

    fn extract(&self) -> Result<Vec<SourceRow>> {
        let path = self.config.input_path();
        tracing::debug!("Reading customer file: {}", path);

        let data = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", data.len());

        read_rows(&data)
    }

    fn transform(&self, rows: Vec<SourceRow>) -> Result<TransformResult> {
        let mut customers = Vec::with_capacity(rows.len());

        // 第一筆失敗即中止，不略過任何列
        for source in &rows {
            let customer = Customer::from_row(source)?;
            tracing::debug!(
                "Line {}: customer '{}' with case '{}'",
                source.line,
                customer.full_name,
                customer.case.case_number
            );
            customers.push(customer);
        }

        Ok(TransformResult { customers })
    }

    fn load(&self, result: &TransformResult) -> Result<Option<String>> {
        let Some(output_path) = self.config.output_path() else {
            tracing::debug!("No output path configured, skipping file output");
            return Ok(None);
        };

        let json_data = serde_json::to_string_pretty(&result.customers)?;
        tracing::debug!(
            "Writing {} customers ({} bytes) to {}",
            result.customers.len(),
            json_data.len(),
            output_path
        );
        self.storage.write_file(output_path, json_data.as_bytes())?;

        Ok(Some(output_path.to_string()))
    }
}
