use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::catalog::{DocumentLabel, LabelId};
use super::period::{previous_period, reporting_years};

/// A document slot the console surfaces, required or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequiredDocumentSpec {
    pub label_id: LabelId,
    pub year: Option<i32>,
    pub quarter: Option<u8>,
    pub is_required: bool,
}

impl RequiredDocumentSpec {
    fn required(label: DocumentLabel, year: Option<i32>, quarter: Option<u8>) -> Self {
        Self {
            label_id: label.id(),
            year,
            quarter,
            is_required: true,
        }
    }

    fn surfaced(label: DocumentLabel) -> Self {
        Self {
            label_id: label.id(),
            year: None,
            quarter: None,
            is_required: false,
        }
    }
}

/// Annual-return years a company founded on `founding_date` must have filed.
///
/// Unknown founding dates are treated as long-established.
pub fn annual_return_years(founding_date: Option<NaiveDate>, today: NaiveDate) -> Vec<i32> {
    let years = reporting_years(today);

    let Some(founding_year) = founding_date.map(|date| date.year()) else {
        return vec![years.last_year, years.last_two_years];
    };

    if founding_year <= years.last_two_years {
        vec![years.last_year, years.last_two_years]
    } else if founding_year <= years.last_year {
        vec![years.last_year]
    } else {
        Vec::new()
    }
}

/// Mandatory document slots for a company on `today`.
pub fn build_required_documents(
    founding_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<RequiredDocumentSpec> {
    let previous = previous_period(today);

    let mut specs: Vec<RequiredDocumentSpec> = annual_return_years(founding_date, today)
        .into_iter()
        .map(|year| RequiredDocumentSpec::required(DocumentLabel::AnnualTaxReturn, Some(year), None))
        .collect();

    specs.push(RequiredDocumentSpec::required(
        DocumentLabel::InterimTaxReturn,
        Some(previous.year),
        Some(previous.quarter),
    ));
    specs.push(RequiredDocumentSpec::required(
        DocumentLabel::TrialBalance,
        Some(previous.year),
        Some(previous.quarter),
    ));
    specs.push(RequiredDocumentSpec::surfaced(
        DocumentLabel::CreditBureauReport,
    ));

    tracing::debug!(
        %today,
        founding = ?founding_date,
        required = specs.iter().filter(|spec| spec.is_required).count(),
        "document requirements built"
    );

    specs
}
