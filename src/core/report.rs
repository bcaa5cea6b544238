use crate::domain::model::{Customer, ImportReport};
use crate::utils::error::Result;

/// Total line printed ahead of the preview.
pub fn summary_line(total: usize) -> String {
    format!("Toplam {} müşteri bulundu", total)
}

/// Pretty JSON (two-space indent, non-ASCII kept as is) of the first `count` customers.
pub fn preview(customers: &[Customer], count: usize) -> Result<String> {
    let head = &customers[..count.min(customers.len())];
    Ok(serde_json::to_string_pretty(head)?)
}

/// The text a run prints to stdout: the total line, then the preview.
pub fn render(report: &ImportReport) -> String {
    format!("{}\n{}", summary_line(report.total), report.preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RawRow, SourceRow};

    fn customer(name: &str) -> Customer {
        let row = RawRow {
            full_name: name.to_string(),
            address: "Üsküdar".to_string(),
            ..RawRow::default()
        };
        Customer::from_row(&SourceRow { line: 2, row }).unwrap()
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(40), "Toplam 40 müşteri bulundu");
        assert_eq!(summary_line(0), "Toplam 0 müşteri bulundu");
    }

    #[test]
    fn test_preview_is_limited_and_keeps_non_ascii() {
        let customers = vec![customer("Çağla"), customer("Şükrü"), customer("Ömer")];

        let text = preview(&customers, 2).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert!(text.contains("Çağla"));
        assert!(text.contains("Üsküdar"));
        assert!(!text.contains("Ömer"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  {\n    \"full_name\""));
    }

    #[test]
    fn test_preview_serializes_absent_fields_as_null() {
        let text = preview(&[customer("Çağla")], 2).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert!(parsed[0]["phone"].is_null());
        assert_eq!(parsed[0]["case"]["accident_date"], "");
        assert_eq!(parsed[0]["case"]["commission_rate"], 20);
    }

    #[test]
    fn test_defaulted_expenses_render_as_decimal() {
        let text = preview(&[customer("Çağla")], 1).unwrap();
        assert!(text.contains("\"notary_and_file_expenses\": 0.0,"));
        assert!(text.contains("\"fault_rate\": 0,"));
    }

    #[test]
    fn test_render_puts_total_first() {
        let report = ImportReport {
            total: 3,
            preview: preview(&[customer("Ali")], 2).unwrap(),
            output_path: None,
        };

        let text = render(&report);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Toplam 3 müşteri bulundu"));
        assert_eq!(lines.next(), Some("["));
    }

    #[test]
    fn test_preview_of_short_list() {
        assert_eq!(preview(&[], 2).unwrap(), "[]");
        let text = preview(&[customer("Ali")], 5).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }
}
