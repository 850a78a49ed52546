use chrono::NaiveDate;
use serde::Serialize;

use super::completion::SectionAssessment;
use super::documents::{Period, ProcessedDocument};
use super::domain::{OnboardingSection, SectionStatuses, StepStatus};

/// Everything the console needs to render the onboarding steps.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingReport {
    pub today: NaiveDate,
    pub statuses: SectionStatuses,
    pub summary: StepStatus,
    pub sections: Vec<SectionStatusEntry>,
    pub documents: Vec<ProcessedDocument>,
    pub periods: ReferencePeriods,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionStatusEntry {
    pub section: OnboardingSection,
    pub label: &'static str,
    pub status: Option<StepStatus>,
    pub status_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
}

/// Periods the document requirements were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferencePeriods {
    pub current: Period,
    pub previous: Period,
    pub annual_return_years: Vec<i32>,
}

impl OnboardingReport {
    pub fn section(&self, section: OnboardingSection) -> Option<&SectionStatusEntry> {
        self.sections.iter().find(|entry| entry.section == section)
    }

    pub fn required_documents(&self) -> impl Iterator<Item = &ProcessedDocument> {
        self.documents.iter().filter(|document| document.is_required)
    }

    pub fn optional_documents(&self) -> impl Iterator<Item = &ProcessedDocument> {
        self.documents.iter().filter(|document| !document.is_required)
    }
}

pub(crate) fn section_entries(
    statuses: &SectionStatuses,
    assessments: &[SectionAssessment],
    documents: &[ProcessedDocument],
) -> Vec<SectionStatusEntry> {
    statuses
        .iter()
        .map(|(section, status)| {
            let missing_fields = match section {
                OnboardingSection::Financial => missing_documents(documents),
                OnboardingSection::Summary => Vec::new(),
                _ => assessments
                    .iter()
                    .find(|assessment| assessment.section == section)
                    .map(|assessment| assessment.missing_fields.clone())
                    .unwrap_or_default(),
            };

            SectionStatusEntry {
                section,
                label: section.label(),
                status,
                status_label: status.map(StepStatus::label),
                missing_fields,
            }
        })
        .collect()
}

fn missing_documents(documents: &[ProcessedDocument]) -> Vec<String> {
    documents
        .iter()
        .filter(|document| document.is_required && !document.is_uploaded)
        .map(|document| match (document.year, document.quarter) {
            (Some(year), Some(quarter)) => format!("{} {year}/{quarter}", document.label_name),
            (Some(year), None) => format!("{} {year}", document.label_name),
            _ => document.label_name.clone(),
        })
        .collect()
}
