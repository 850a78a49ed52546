use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::LabelId;
use super::requirements::RequiredDocumentSpec;
use super::FinancialDocument;

/// `(label, year, quarter)` identity of a document slot.
///
/// Equality treats a missing year or quarter as its own value, so
/// `33-2024-null` and `33-2024-1` are different slots. Matching uploads
/// against a slot is looser, see [`SlotKey::accepts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub label_id: LabelId,
    pub year: Option<i32>,
    pub quarter: Option<u8>,
}

impl SlotKey {
    pub fn new(label_id: LabelId, year: Option<i32>, quarter: Option<u8>) -> Self {
        Self {
            label_id,
            year,
            quarter,
        }
    }

    /// Partial-key match: a slot without a quarter ignores the upload's
    /// quarter, a slot without a year ignores the upload's period entirely.
    pub fn accepts(&self, document: &FinancialDocument) -> bool {
        if self.label_id != document.label_id {
            return false;
        }

        match self.year {
            None => true,
            Some(year) if document.period_year != Some(year) => false,
            Some(_) => self
                .quarter
                .map_or(true, |quarter| document.quarter() == Some(quarter)),
        }
    }
}

impl From<&RequiredDocumentSpec> for SlotKey {
    fn from(spec: &RequiredDocumentSpec) -> Self {
        Self::new(spec.label_id, spec.year, spec.quarter)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.label_id)?;
        match self.year {
            Some(year) => write!(f, "{year}-")?,
            None => write!(f, "null-")?,
        }
        match self.quarter {
            Some(quarter) => write!(f, "{quarter}"),
            None => write!(f, "null"),
        }
    }
}

/// Best upload for `key`, if any.
///
/// Exact-key uploads beat partial matches; among equals the most recently
/// updated wins, then the earliest in the list.
pub fn find_match<'a>(
    documents: &'a [FinancialDocument],
    key: &SlotKey,
) -> Option<&'a FinancialDocument> {
    best_candidate(documents, key, |_| false).map(|index| &documents[index])
}

pub(crate) fn best_candidate(
    documents: &[FinancialDocument],
    key: &SlotKey,
    is_taken: impl Fn(usize) -> bool,
) -> Option<usize> {
    documents
        .iter()
        .enumerate()
        .filter(|(index, document)| !is_taken(*index) && key.accepts(document))
        .max_by(|(left_index, left), (right_index, right)| {
            let left_rank = (left.slot_key() == *key, left.updated_at);
            let right_rank = (right.slot_key() == *key, right.updated_at);
            match left_rank.cmp(&right_rank) {
                Ordering::Equal => right_index.cmp(left_index),
                ordering => ordering,
            }
        })
        .map(|(index, _)| index)
}
