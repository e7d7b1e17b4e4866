use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HskLevel;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Monthly,
    Annual,
    Lifetime,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Monthly => "monthly",
            PlanTier::Annual => "annual",
            PlanTier::Lifetime => "lifetime",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: PlanTier,
    pub status: SubscriptionStatus,
    /// Ignored for lifetime plans.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub provisional_level: HskLevel,
    pub subscription: Subscription,
    pub study_streak: u32,
    pub total_tests_taken: u32,
    /// Rounded percentage across all finished practice tests.
    pub average_score: u32,
}
