//! Column conversion rules shared by every row.
//!
//! All rules trim first. Numeric rules take the column name and line number so
//! a bad value can be reported precisely; a parse failure aborts the import.

use crate::domain::model::{
    Case, Customer, RawRow, SourceRow, DEFAULT_BOARD_STAGE, DEFAULT_COMMISSION_RATE,
    DEFAULT_CURRENT_STAGE, DEFAULT_FAULT_RATE, DEFAULT_NOTARY_AND_FILE_EXPENSES, DEFAULT_STATUS,
};
use crate::utils::error::{ImportError, Result};
use std::str::FromStr;

/// Trimmed text; blank stays `""`.
pub fn text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Trimmed text; blank becomes `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Trimmed text; blank falls back to `default`. Any other value is kept as is.
pub fn text_or(raw: &str, default: &str) -> String {
    optional_text(raw).unwrap_or_else(|| default.to_string())
}

/// Domestic numbers are stored with their leading trunk zero.
pub fn phone(raw: &str) -> Option<String> {
    optional_text(raw).map(|number| {
        if number.starts_with('0') {
            number
        } else {
            format!("0{}", number)
        }
    })
}

/// `nan`, `inf` and overflowing values are rejected: JSON would render them as null.
pub fn optional_decimal(line: u64, column: &str, raw: &str) -> Result<Option<f64>> {
    match parse_non_blank::<f64>(line, column, raw, "decimal")? {
        Some(value) if !value.is_finite() => Err(ImportError::InvalidNumberError {
            line,
            column: column.to_string(),
            value: raw.trim().to_string(),
            expected: "decimal",
        }),
        parsed => Ok(parsed),
    }
}

pub fn decimal_or(line: u64, column: &str, raw: &str, default: f64) -> Result<f64> {
    Ok(optional_decimal(line, column, raw)?.unwrap_or(default))
}

pub fn integer_or(line: u64, column: &str, raw: &str, default: i64) -> Result<i64> {
    Ok(parse_non_blank(line, column, raw, "integer")?.unwrap_or(default))
}

fn parse_non_blank<T: FromStr>(
    line: u64,
    column: &str,
    raw: &str,
    expected: &'static str,
) -> Result<Option<T>> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| ImportError::InvalidNumberError {
            line,
            column: column.to_string(),
            value: value.to_string(),
            expected,
        })
}

impl Customer {
    /// Builds the customer and its embedded case from one CSV row.
    pub fn from_row(source: &SourceRow) -> Result<Self> {
        let line = source.line;
        let row = &source.row;

        Ok(Customer {
            full_name: text(&row.full_name),
            email: text(&row.email),
            phone: phone(&row.phone),
            address: optional_text(&row.address),
            tc_kimlik: optional_text(&row.tc_kimlik),
            dosya_takip_numarasi: optional_text(&row.dosya_takip_numarasi),
            iban: optional_text(&row.iban),
            payment_person_name: optional_text(&row.payment_person_name),
            insurance_company: optional_text(&row.insurance_company),
            case: Case::from_row(line, row)?,
        })
    }
}

impl Case {
    pub fn from_row(line: u64, row: &RawRow) -> Result<Self> {
        Ok(Case {
            // These four keep "" instead of becoming null.
            case_number: text(&row.case_number),
            vehicle_plate: text(&row.vehicle_plate),
            vehicle_brand_model: text(&row.vehicle_brand_model),
            accident_date: text(&row.accident_date),
            accident_location: optional_text(&row.accident_location),
            damage_amount: optional_decimal(line, "damage_amount", &row.damage_amount)?,
            value_loss_amount: optional_decimal(line, "value_loss_amount", &row.value_loss_amount)?,
            fault_rate: integer_or(line, "fault_rate", &row.fault_rate, DEFAULT_FAULT_RATE)?,
            estimated_compensation: optional_decimal(
                line,
                "estimated_compensation",
                &row.estimated_compensation,
            )?,
            commission_rate: integer_or(
                line,
                "commission_rate",
                &row.commission_rate,
                DEFAULT_COMMISSION_RATE,
            )?,
            current_stage: text_or(&row.current_stage, DEFAULT_CURRENT_STAGE),
            board_stage: text_or(&row.board_stage, DEFAULT_BOARD_STAGE),
            assigned_lawyer: optional_text(&row.assigned_lawyer),
            status: text_or(&row.status, DEFAULT_STATUS),
            total_payment_amount: optional_decimal(
                line,
                "total_payment_amount",
                &row.total_payment_amount,
            )?,
            notary_and_file_expenses: decimal_or(
                line,
                "notary_and_file_expenses",
                &row.notary_and_file_expenses,
                DEFAULT_NOTARY_AND_FILE_EXPENSES,
            )?,
            insurance_response: optional_text(&row.insurance_response),
        })
    }
}
