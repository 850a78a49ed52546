//! Step completion and financial document requirement engine.
//!
//! Classifies each onboarding section as not started, started, completed or
//! optional, derives which financial documents are mandatory for the current
//! filing window, and reconciles them against the uploaded documents. Every
//! entry point is pure: the evaluation date is passed in, never read from the
//! clock.

pub mod completion;
pub mod documents;
pub mod domain;
pub mod payload;
pub mod profile;
pub mod report;
pub mod status;
mod wire;

#[cfg(test)]
mod tests;

pub use completion::{assess_section, FieldCheck, FieldRequirement, SectionAssessment};
pub use documents::{
    FinancialDocument, LabelId, Period, ProcessedDocument, RequiredDocumentSpec, StatusBucket,
};
pub use domain::{OnboardingSection, SectionStatuses, StepStatus};
pub use payload::{OnboardingPayload, OnboardingPayloadError, OnboardingPayloadLoader};
pub use profile::CompanyProfile;
pub use report::{OnboardingReport, ReferencePeriods, SectionStatusEntry};
pub use status::{aggregate_all, summarize};

use chrono::NaiveDate;

use documents::period::{current_period, previous_period};
use documents::{annual_return_years, build_required_documents, financial_status, reconcile};

/// Stateless evaluator pinned to a single evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEngine {
    today: NaiveDate,
}

impl CompletionEngine {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn statuses(
        &self,
        profile: Option<&CompanyProfile>,
        documents: &[FinancialDocument],
    ) -> SectionStatuses {
        aggregate_all(profile, documents, self.today)
    }

    /// Financial documents table. Without a profile the founding date is
    /// unknown and both annual returns are expected.
    pub fn documents(
        &self,
        profile: Option<&CompanyProfile>,
        documents: &[FinancialDocument],
    ) -> Vec<ProcessedDocument> {
        let founding_date = profile.and_then(CompanyProfile::founding_date);
        let specs = build_required_documents(founding_date, self.today);
        reconcile(&specs, documents)
    }

    pub fn report(
        &self,
        profile: Option<&CompanyProfile>,
        documents: &[FinancialDocument],
    ) -> OnboardingReport {
        let founding_date = profile.and_then(CompanyProfile::founding_date);
        let rows = self.documents(profile, documents);

        let empty = CompanyProfile::default();
        let assessments = status::assess_sections(profile.unwrap_or(&empty));

        let statuses = match profile {
            Some(_) => status::statuses_from(&assessments, financial_status(&rows, documents)),
            None => SectionStatuses::empty_profile(),
        };
        let summary = summarize(&statuses);

        tracing::debug!(
            today = %self.today,
            summary = ?summary,
            documents = rows.len(),
            uploaded = documents.len(),
            "onboarding report evaluated"
        );

        OnboardingReport {
            today: self.today,
            statuses,
            summary,
            sections: report::section_entries(&statuses, &assessments, &rows),
            documents: rows,
            periods: ReferencePeriods {
                current: current_period(self.today),
                previous: previous_period(self.today),
                annual_return_years: annual_return_years(founding_date, self.today),
            },
        }
    }
}
