use serde::{Deserialize, Serialize};

use super::PlanTier;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Monthly,
    Annual,
    Lifetime,
}

impl BillingPeriod {
    /// Days of access bought by one payment; `None` for lifetime.
    pub fn duration_days(self) -> Option<i64> {
        match self {
            BillingPeriod::Monthly => Some(30),
            BillingPeriod::Annual => Some(365),
            BillingPeriod::Lifetime => None,
        }
    }

    pub fn tier(self) -> PlanTier {
        match self {
            BillingPeriod::Monthly => PlanTier::Monthly,
            BillingPeriod::Annual => PlanTier::Annual,
            BillingPeriod::Lifetime => PlanTier::Lifetime,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    /// USD.
    pub price: f64,
    pub period: BillingPeriod,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}
