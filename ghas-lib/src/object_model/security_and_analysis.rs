use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureStatus {
    Enabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureSetting {
    #[serde(rename = "status")]
    pub status: FeatureStatus,
}

impl FeatureSetting {
    const ENABLED: Self = Self {
        status: FeatureStatus::Enabled,
    };
}

/// Body of a `PATCH /repos/{owner}/{repo}` request touching the
/// `security_and_analysis` settings. Unset features are left out of the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SecurityAndAnalysis {
    #[serde(rename = "advanced_security", skip_serializing_if = "Option::is_none")]
    pub advanced_security: Option<FeatureSetting>,

    #[serde(rename = "secret_scanning", skip_serializing_if = "Option::is_none")]
    pub secret_scanning: Option<FeatureSetting>,

    #[serde(
        rename = "secret_scanning_push_protection",
        skip_serializing_if = "Option::is_none"
    )]
    pub secret_scanning_push_protection: Option<FeatureSetting>,
}

impl SecurityAndAnalysis {
    pub fn secret_scanning() -> Self {
        Self {
            advanced_security: Some(FeatureSetting::ENABLED),
            secret_scanning: Some(FeatureSetting::ENABLED),
            secret_scanning_push_protection: None,
        }
    }

    pub fn secret_scanning_push_protection() -> Self {
        Self {
            secret_scanning_push_protection: Some(FeatureSetting::ENABLED),
            ..Self::secret_scanning()
        }
    }
}

#[derive(Serialize)]
pub(crate) struct RepositoryPatch<'a> {
    #[serde(rename = "security_and_analysis")]
    pub(crate) security_and_analysis: &'a SecurityAndAnalysis,
}
