//! Static reference content: plans, placement questions, practice tests.
//!
//! The store never owns or mutates any of this; callers join store state (for
//! example `current_test.test_id`) against the catalog to resolve full records.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{HskLevel, MockTest, Question, SubscriptionPlan, User};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyInsight {
    pub weakness: String,
    pub description: String,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Profile new accounts start from.
    pub template_user: User,
    pub subscription_plans: Vec<SubscriptionPlan>,
    pub placement_questions: Vec<Question>,
    pub mock_tests: Vec<MockTest>,
    #[serde(default)]
    pub study_insights: Vec<StudyInsight>,
}

impl Catalog {
    /// Content bundled with the app.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("failed to load built-in catalog")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid catalog JSON")
    }

    pub fn plan(&self, plan_id: &str) -> Option<&SubscriptionPlan> {
        self.subscription_plans.iter().find(|plan| plan.id == plan_id)
    }

    pub fn mock_test(&self, test_id: &str) -> Option<&MockTest> {
        self.mock_tests.iter().find(|test| test.id == test_id)
    }

    /// All tests when `level` is `None`, otherwise only that level's.
    pub fn tests_for_level(&self, level: Option<HskLevel>) -> Vec<&MockTest> {
        self.mock_tests
            .iter()
            .filter(|test| level.map_or(true, |level| test.level == level))
            .collect()
    }
}
