//! Financial document requirements and their reconciliation against uploads.

mod aggregate;
mod catalog;
mod matcher;
pub mod period;
mod requirements;

pub use aggregate::{financial_status, reconcile, ProcessedDocument};
pub use catalog::{is_approved, DocumentLabel, DocumentStatus, LabelId, StatusBucket};
pub use matcher::{find_match, SlotKey};
pub use period::{Period, ReportingYears};
pub use requirements::{annual_return_years, build_required_documents, RequiredDocumentSpec};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::wire::{
    lenient_datetime, lenient_integer, lenient_quarter, lenient_status, lenient_text,
};

/// Entry of the "list documents" endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialDocument {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub id: Option<i32>,
    pub label_id: LabelId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub label_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub period_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_quarter")]
    pub period_quarter: Option<u8>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: i32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl FinancialDocument {
    pub fn new(label_id: LabelId, year: Option<i32>, quarter: Option<u8>, status: i32) -> Self {
        Self {
            id: None,
            label_id,
            label_name: None,
            period_year: year,
            period_quarter: quarter,
            status,
            file_name: None,
            updated_at: None,
        }
    }

    /// Quarter with the "unassigned" marker and out-of-range values removed.
    pub fn quarter(&self) -> Option<u8> {
        self.period_quarter.filter(|quarter| (1..=4).contains(quarter))
    }

    pub fn slot_key(&self) -> SlotKey {
        SlotKey::new(self.label_id, self.period_year, self.quarter())
    }

    pub fn display_name(&self) -> String {
        display_name(self.label_id, self.label_name.as_deref())
    }
}

/// Catalog name first, then the name sent with the upload, then a generic fallback.
pub(crate) fn display_name(label_id: LabelId, uploaded_name: Option<&str>) -> String {
    if let Some(label) = label_id.known() {
        return label.label().to_string();
    }

    match uploaded_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("Document #{label_id}"),
    }
}
