use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Answers, HskLevel, Section};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlacementQuizResult {
    pub estimated_level: HskLevel,
    /// 0-100, rounded fraction of correct answers.
    pub confidence: u32,
    pub strong_areas: Vec<String>,
    pub weak_areas: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Number of correct answers.
    pub total: u32,
    pub by_section: BTreeMap<Section, u32>,
    pub percentage: u32,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    pub mock_test_id: String,
    pub score: Score,
    pub answers: Answers,
    /// Seconds.
    pub time_spent: u64,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_at_is_rehydrated_from_stored_string() {
        let raw = r#"[{
            "id": "result1",
            "mockTestId": "hsk3-1",
            "score": {"total": 25, "bySection": {"Reading": 20, "Writing": 15}, "percentage": 83, "passed": true},
            "answers": {"q1": 0, "q2": 1},
            "timeSpent": 45,
            "completedAt": "2024-01-15T10:30:00.000Z"
        }]"#;

        let results: Vec<TestResult> = serde_json::from_str(raw).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score.by_section[&Section::Reading], 20);
        assert_eq!(
            results[0].completed_at.to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn malformed_completion_date_fails_decoding() {
        let raw = r#"{
            "id": "r", "mockTestId": "hsk3-1",
            "score": {"total": 0, "bySection": {}, "percentage": 0, "passed": false},
            "answers": {}, "timeSpent": 0, "completedAt": "yesterday"
        }"#;
        assert!(serde_json::from_str::<TestResult>(raw).is_err());
    }
}
