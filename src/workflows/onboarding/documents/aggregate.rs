use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::super::domain::StepStatus;
use super::catalog::{is_approved, DocumentStatus, LabelId, StatusBucket};
use super::matcher::{best_candidate, SlotKey};
use super::requirements::RequiredDocumentSpec;
use super::{display_name, FinancialDocument};

/// One row of the financial documents table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedDocument {
    pub key: String,
    pub label_id: LabelId,
    pub label_name: String,
    pub year: Option<i32>,
    pub quarter: Option<u8>,
    pub is_required: bool,
    pub is_uploaded: bool,
    pub document_id: Option<i32>,
    pub status_code: Option<i32>,
    /// Catalog status for known codes; `None` when not uploaded or the code is unknown.
    pub review_status: Option<DocumentStatus>,
    pub status: Option<StatusBucket>,
    pub updated_at: Option<NaiveDateTime>,
}

impl ProcessedDocument {
    fn from_spec(spec: &RequiredDocumentSpec, upload: Option<&FinancialDocument>) -> Self {
        let key = SlotKey::from(spec);
        let mut processed = Self {
            key: key.to_string(),
            label_id: spec.label_id,
            label_name: display_name(spec.label_id, None),
            year: spec.year,
            quarter: spec.quarter,
            is_required: spec.is_required,
            is_uploaded: false,
            document_id: None,
            status_code: None,
            review_status: None,
            status: None,
            updated_at: None,
        };

        if let Some(upload) = upload {
            processed.attach(upload);
        }

        processed
    }

    fn from_upload(upload: &FinancialDocument) -> Self {
        let key = upload.slot_key();
        let mut processed = Self {
            key: key.to_string(),
            label_id: upload.label_id,
            label_name: upload.display_name(),
            year: key.year,
            quarter: key.quarter,
            is_required: false,
            is_uploaded: false,
            document_id: None,
            status_code: None,
            review_status: None,
            status: None,
            updated_at: None,
        };
        processed.attach(upload);
        processed
    }

    fn attach(&mut self, upload: &FinancialDocument) {
        self.is_uploaded = true;
        self.document_id = upload.id;
        self.status_code = Some(upload.status);
        self.review_status = DocumentStatus::from_code(upload.status);
        self.status = Some(StatusBucket::from_code(upload.status));
        self.updated_at = upload.updated_at;
    }

    pub fn is_approved(&self) -> bool {
        self.status_code.is_some_and(is_approved)
    }
}

/// Merge the required slots with every upload into one deduplicated table.
///
/// Only required or uploaded slots are emitted. Required rows come first and
/// both groups are ordered by label name; the sort is stable, so rows sharing
/// a name keep slot order.
pub fn reconcile(
    specs: &[RequiredDocumentSpec],
    uploaded: &[FinancialDocument],
) -> Vec<ProcessedDocument> {
    let mut taken = vec![false; uploaded.len()];
    let mut rows: Vec<ProcessedDocument> = Vec::with_capacity(specs.len() + uploaded.len());
    let mut row_by_slot: HashMap<SlotKey, usize> = HashMap::new();

    for spec in specs {
        let key = SlotKey::from(spec);
        if let Some(&row) = row_by_slot.get(&key) {
            rows[row].is_required |= spec.is_required;
            continue;
        }

        let matched = best_candidate(uploaded, &key, |index| taken[index]);
        if let Some(index) = matched {
            taken[index] = true;
        }

        tracing::debug!(slot = %key, uploaded = matched.is_some(), "document slot matched");

        row_by_slot.insert(key, rows.len());
        rows.push(ProcessedDocument::from_spec(
            spec,
            matched.map(|index| &uploaded[index]),
        ));
    }

    for (index, upload) in uploaded.iter().enumerate() {
        if taken[index] {
            continue;
        }

        let key = upload.slot_key();
        match row_by_slot.get(&key) {
            Some(&row) => {
                let existing = &mut rows[row];
                if !existing.is_uploaded || upload.updated_at > existing.updated_at {
                    existing.attach(upload);
                }
            }
            None => {
                row_by_slot.insert(key, rows.len());
                rows.push(ProcessedDocument::from_upload(upload));
            }
        }
    }

    rows.sort_by(|left, right| {
        right
            .is_required
            .cmp(&left.is_required)
            .then_with(|| name_order(&left.label_name, &right.label_name))
    });

    rows
}

fn name_order(left: &str, right: &str) -> std::cmp::Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

/// Document-driven verdict for the financial section.
pub fn financial_status(
    rows: &[ProcessedDocument],
    uploaded: &[FinancialDocument],
) -> StepStatus {
    if uploaded.is_empty() {
        return StepStatus::NotStarted;
    }

    let mut all_approved = true;
    for row in rows.iter().filter(|row| row.is_required) {
        if !row.is_uploaded {
            return StepStatus::Started;
        }
        all_approved &= row.is_approved();
    }

    if all_approved {
        StepStatus::Completed
    } else {
        StepStatus::Started
    }
}
