use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::documents::FinancialDocument;
use super::profile::CompanyProfile;

/// Onboarding data and document listing as fetched from the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingPayload {
    #[serde(default)]
    pub profile: Option<CompanyProfile>,
    #[serde(default)]
    pub documents: Vec<FinancialDocument>,
}

#[derive(Debug, thiserror::Error)]
pub enum OnboardingPayloadError {
    #[error("failed to read onboarding payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid onboarding payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct OnboardingPayloadLoader;

impl OnboardingPayloadLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnboardingPayload, OnboardingPayloadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<OnboardingPayload, OnboardingPayloadError> {
        let payload: OnboardingPayload = serde_json::from_reader(reader)?;
        tracing::debug!(
            has_profile = payload.profile.is_some(),
            documents = payload.documents.len(),
            "onboarding payload loaded"
        );
        Ok(payload)
    }

    pub fn from_json_str(raw: &str) -> Result<OnboardingPayload, OnboardingPayloadError> {
        Self::from_reader(raw.as_bytes())
    }
}
