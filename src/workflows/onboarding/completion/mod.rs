//! Field-driven completion rules for the onboarding sections.
//!
//! Each section lists its semantically relevant fields together with how each
//! one participates in completion. Classification is then a pure function of
//! that list:
//!
//! * no field carries a value -> `NotStarted`
//! * every required field (and every required list) is filled -> `Completed`
//! * anything in between -> `Started`

mod management;
mod rules;

use serde::Serialize;

use super::domain::{OnboardingSection, StepStatus};

/// How a field participates in completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRequirement {
    Required,
    /// Must hold at least one element.
    RequiredList,
    Optional,
}

/// Presence rules per field type.
pub trait HasValue {
    fn has_value(&self) -> bool;
}

impl HasValue for Option<String> {
    fn has_value(&self) -> bool {
        self.as_deref().is_some_and(|text| !text.trim().is_empty())
    }
}

impl HasValue for Option<f64> {
    /// Zero is a value; NaN is not.
    fn has_value(&self) -> bool {
        self.is_some_and(|number| !number.is_nan())
    }
}

impl<T> HasValue for Vec<T> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

/// One evaluated field of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub name: &'static str,
    pub requirement: FieldRequirement,
    pub present: bool,
}

impl FieldCheck {
    pub fn required(name: &'static str, value: &impl HasValue) -> Self {
        Self {
            name,
            requirement: FieldRequirement::Required,
            present: value.has_value(),
        }
    }

    pub fn required_list<T>(name: &'static str, values: &[T]) -> Self {
        Self {
            name,
            requirement: FieldRequirement::RequiredList,
            present: !values.is_empty(),
        }
    }

    pub fn optional(name: &'static str, value: &impl HasValue) -> Self {
        Self {
            name,
            requirement: FieldRequirement::Optional,
            present: value.has_value(),
        }
    }

    pub fn is_mandatory(&self) -> bool {
        !matches!(self.requirement, FieldRequirement::Optional)
    }
}

/// Status of one section plus the mandatory fields still missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAssessment {
    pub section: OnboardingSection,
    pub status: StepStatus,
    pub missing_fields: Vec<String>,
}

/// Implemented by every field-driven onboarding section.
pub trait SectionRules: Default {
    const SECTION: OnboardingSection;

    /// Every semantically relevant field, required and optional alike.
    fn field_checks(&self) -> Vec<FieldCheck>;

    fn assess(&self) -> SectionAssessment {
        let checks = self.field_checks();
        SectionAssessment {
            section: Self::SECTION,
            status: classify(&checks),
            missing_fields: missing_fields(&checks),
        }
    }
}

/// Absent sections are evaluated as their empty default, which keeps
/// section-specific overrides (such as the always-optional group structure)
/// in one place.
pub fn assess_section<S: SectionRules>(section: Option<&S>) -> SectionAssessment {
    let assessment = match section {
        Some(section) => section.assess(),
        None => S::default().assess(),
    };

    tracing::debug!(
        section = ?assessment.section,
        status = ?assessment.status,
        missing = assessment.missing_fields.len(),
        "section assessed"
    );

    assessment
}

pub fn classify(checks: &[FieldCheck]) -> StepStatus {
    let has_any_data = checks.iter().any(|check| check.present);
    if !has_any_data {
        return StepStatus::NotStarted;
    }

    let all_required_filled = checks
        .iter()
        .filter(|check| check.is_mandatory())
        .all(|check| check.present);

    if all_required_filled {
        StepStatus::Completed
    } else {
        StepStatus::Started
    }
}

fn missing_fields(checks: &[FieldCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|check| check.is_mandatory() && !check.present)
        .map(|check| check.name.to_string())
        .collect()
}
