use serde::{Deserialize, Serialize};

pub const DEFAULT_FAULT_RATE: i64 = 0;
pub const DEFAULT_COMMISSION_RATE: i64 = 20;
pub const DEFAULT_NOTARY_AND_FILE_EXPENSES: f64 = 0.0;
/// "application"
pub const DEFAULT_CURRENT_STAGE: &str = "başvuru";
/// "application received"
pub const DEFAULT_BOARD_STAGE: &str = "basvuru_alindi";
pub const DEFAULT_STATUS: &str = "active";

/// One data row of the customer CSV, keyed by header name.
///
/// Columns missing from the header, and trailing cells missing from a short
/// row, deserialize to an empty string. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub tc_kimlik: String,
    pub dosya_takip_numarasi: String,
    pub iban: String,
    pub payment_person_name: String,
    pub insurance_company: String,
    pub case_number: String,
    pub vehicle_plate: String,
    pub vehicle_brand_model: String,
    pub accident_date: String,
    pub accident_location: String,
    pub damage_amount: String,
    pub value_loss_amount: String,
    pub fault_rate: String,
    pub estimated_compensation: String,
    pub commission_rate: String,
    pub current_stage: String,
    pub board_stage: String,
    pub assigned_lawyer: String,
    pub status: String,
    pub total_payment_amount: String,
    pub notary_and_file_expenses: String,
    pub insurance_response: String,
}

/// A raw row together with the physical line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub line: u64,
    pub row: RawRow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tc_kimlik: Option<String>,
    pub dosya_takip_numarasi: Option<String>,
    pub iban: Option<String>,
    pub payment_person_name: Option<String>,
    pub insurance_company: Option<String>,
    pub case: Case,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub case_number: String,
    pub vehicle_plate: String,
    pub vehicle_brand_model: String,
    pub accident_date: String,
    pub accident_location: Option<String>,
    pub damage_amount: Option<f64>,
    pub value_loss_amount: Option<f64>,
    pub fault_rate: i64,
    pub estimated_compensation: Option<f64>,
    pub commission_rate: i64,
    pub current_stage: String,
    pub board_stage: String,
    pub assigned_lawyer: Option<String>,
    pub status: String,
    pub total_payment_amount: Option<f64>,
    pub notary_and_file_expenses: f64,
    pub insurance_response: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub customers: Vec<Customer>,
}

/// What a finished run reports back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub total: usize,
    pub preview: String,
    pub output_path: Option<String>,
}
