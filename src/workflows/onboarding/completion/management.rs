use super::super::domain::{OnboardingSection, StepStatus};
use super::super::profile::{CurrentManagementStaff, ManagementMember};
use super::{classify, FieldCheck, SectionAssessment, SectionRules};

impl ManagementMember {
    pub fn field_checks(&self) -> Vec<FieldCheck> {
        vec![
            FieldCheck::required("FirstName", &self.first_name),
            FieldCheck::required("LastName", &self.last_name),
            FieldCheck::required("Role", &self.role),
            FieldCheck::optional("NationalId", &self.national_id),
            FieldCheck::optional("BirthDate", &self.birth_date),
            FieldCheck::optional("EducationLevel", &self.education_level),
            FieldCheck::optional("ExperienceYears", &self.experience_years),
            FieldCheck::optional("Phone", &self.phone),
            FieldCheck::optional("Email", &self.email),
        ]
    }

    pub fn status(&self) -> StepStatus {
        classify(&self.field_checks())
    }
}

/// The roster is judged member by member, then folded:
/// empty -> `NotStarted`, every member complete -> `Completed`, else `Started`.
impl SectionRules for CurrentManagementStaff {
    const SECTION: OnboardingSection = OnboardingSection::CurrentManagement;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![FieldCheck::required_list("Members", &self.members)]
    }

    fn assess(&self) -> SectionAssessment {
        if self.members.is_empty() {
            return SectionAssessment {
                section: Self::SECTION,
                status: StepStatus::NotStarted,
                missing_fields: vec!["Members".to_string()],
            };
        }

        let member_checks: Vec<Vec<FieldCheck>> =
            self.members.iter().map(ManagementMember::field_checks).collect();

        let all_members_complete = member_checks
            .iter()
            .all(|checks| classify(checks) == StepStatus::Completed);

        let missing_fields = member_checks
            .iter()
            .enumerate()
            .flat_map(|(index, checks)| {
                checks
                    .iter()
                    .filter(|check| check.is_mandatory() && !check.present)
                    .map(move |check| format!("Members[{index}].{}", check.name))
            })
            .collect();

        let status = if all_members_complete {
            StepStatus::Completed
        } else {
            StepStatus::Started
        };

        SectionAssessment {
            section: Self::SECTION,
            status,
            missing_fields,
        }
    }
}
