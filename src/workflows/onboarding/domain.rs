use serde::{Deserialize, Serialize};

/// Completion verdict for a single onboarding section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    NotStarted,
    Started,
    Completed,
    Optional,
}

impl StepStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Started => "Started",
            Self::Completed => "Completed",
            Self::Optional => "Optional",
        }
    }

    /// Position on the NotStarted -> Started -> Completed progression.
    /// `Optional` sits outside of it.
    pub const fn progress_rank(self) -> Option<u8> {
        match self {
            Self::NotStarted => Some(0),
            Self::Started => Some(1),
            Self::Completed => Some(2),
            Self::Optional => None,
        }
    }
}

/// The nine onboarding topics, in the order the console renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingSection {
    CompanyInformation,
    CommercialAndOperational,
    Registry,
    CompanyHistory,
    CurrentManagement,
    Structural,
    Financial,
    GroupCompanyStructure,
    Summary,
}

pub const SECTION_COUNT: usize = 9;

impl OnboardingSection {
    pub const fn ordered() -> [Self; SECTION_COUNT] {
        [
            Self::CompanyInformation,
            Self::CommercialAndOperational,
            Self::Registry,
            Self::CompanyHistory,
            Self::CurrentManagement,
            Self::Structural,
            Self::Financial,
            Self::GroupCompanyStructure,
            Self::Summary,
        ]
    }

    /// Sections that feed the summary reducer.
    pub const fn substantive() -> [Self; 7] {
        [
            Self::CompanyInformation,
            Self::CommercialAndOperational,
            Self::Registry,
            Self::CompanyHistory,
            Self::CurrentManagement,
            Self::Structural,
            Self::Financial,
        ]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyInformation => "Company Information",
            Self::CommercialAndOperational => "Commercial & Operational Information",
            Self::Registry => "Registry Information",
            Self::CompanyHistory => "Company History",
            Self::CurrentManagement => "Current Management Staff",
            Self::Structural => "Structural Information",
            Self::Financial => "Financial Information",
            Self::GroupCompanyStructure => "Group Company Structure",
            Self::Summary => "Summary",
        }
    }
}

/// Fixed nine-slot status vector consumed by the console.
///
/// Serialized as a plain JSON array; the summary slot stays `null` because the
/// summary page derives its own status with [`SectionStatuses::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionStatuses([Option<StepStatus>; SECTION_COUNT]);

impl SectionStatuses {
    /// Vector reported when no onboarding profile exists yet.
    pub fn empty_profile() -> Self {
        let mut statuses = [Some(StepStatus::NotStarted); SECTION_COUNT];
        statuses[OnboardingSection::GroupCompanyStructure.index()] = Some(StepStatus::Optional);
        statuses[OnboardingSection::Summary.index()] = None;
        Self(statuses)
    }

    pub(crate) fn from_array(statuses: [Option<StepStatus>; SECTION_COUNT]) -> Self {
        Self(statuses)
    }

    pub fn get(&self, section: OnboardingSection) -> Option<StepStatus> {
        self.0[section.index()]
    }

    pub fn as_slice(&self) -> &[Option<StepStatus>] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (OnboardingSection, Option<StepStatus>)> + '_ {
        OnboardingSection::ordered()
            .into_iter()
            .map(move |section| (section, self.get(section)))
    }

    /// Overall onboarding verdict folded from the seven substantive sections.
    pub fn summary(&self) -> StepStatus {
        super::status::summarize(self)
    }

    /// Copy with the summary slot filled in, for consumers that want a dense vector.
    pub fn with_summary(&self) -> Self {
        let mut statuses = self.0;
        statuses[OnboardingSection::Summary.index()] = Some(self.summary());
        Self(statuses)
    }
}
