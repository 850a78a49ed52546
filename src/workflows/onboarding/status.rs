use chrono::NaiveDate;

use super::completion::{assess_section, SectionAssessment};
use super::documents::{build_required_documents, financial_status, reconcile, FinancialDocument};
use super::domain::{OnboardingSection, SectionStatuses, StepStatus, SECTION_COUNT};
use super::profile::CompanyProfile;

/// Status vector for the whole onboarding flow.
///
/// A missing profile yields the fixed "nothing entered yet" vector; the
/// financial slot is then `NotStarted` even if documents were uploaded.
pub fn aggregate_all(
    profile: Option<&CompanyProfile>,
    documents: &[FinancialDocument],
    today: NaiveDate,
) -> SectionStatuses {
    let Some(profile) = profile else {
        return SectionStatuses::empty_profile();
    };

    let specs = build_required_documents(profile.founding_date(), today);
    let rows = reconcile(&specs, documents);
    let financial = financial_status(&rows, documents);

    statuses_from(&assess_sections(profile), financial)
}

/// Assessments of the seven field-driven sections, in display order.
pub fn assess_sections(profile: &CompanyProfile) -> Vec<SectionAssessment> {
    vec![
        assess_section(profile.company_information.as_ref()),
        assess_section(profile.commercial_and_operational_information.as_ref()),
        assess_section(profile.registry_information.as_ref()),
        assess_section(profile.company_history.as_ref()),
        assess_section(profile.current_management_staff.as_ref()),
        assess_section(profile.structural_information.as_ref()),
        assess_section(profile.group_company_structure.as_ref()),
    ]
}

pub(crate) fn statuses_from(
    assessments: &[SectionAssessment],
    financial: StepStatus,
) -> SectionStatuses {
    let mut statuses = [Some(StepStatus::NotStarted); SECTION_COUNT];
    for assessment in assessments {
        statuses[assessment.section.index()] = Some(assessment.status);
    }
    statuses[OnboardingSection::Financial.index()] = Some(financial);
    statuses[OnboardingSection::GroupCompanyStructure.index()] = Some(StepStatus::Optional);
    statuses[OnboardingSection::Summary.index()] = None;

    SectionStatuses::from_array(statuses)
}

/// Overall verdict over the seven substantive sections. Group structure and
/// the summary slot itself are ignored, which keeps the fold idempotent.
pub fn summarize(statuses: &SectionStatuses) -> StepStatus {
    let substantive = OnboardingSection::substantive();
    let completed = substantive
        .iter()
        .filter(|section| statuses.get(**section) == Some(StepStatus::Completed))
        .count();
    let started = substantive
        .iter()
        .filter(|section| statuses.get(**section) == Some(StepStatus::Started))
        .count();

    if completed == substantive.len() {
        StepStatus::Completed
    } else if completed + started > 0 {
        StepStatus::Started
    } else {
        StepStatus::NotStarted
    }
}
