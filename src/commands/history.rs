use serde::Serialize;

use crate::{models::TestResult, store::AppState};

/// Aggregates shown on the history and home screens.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub tests_taken: usize,
    pub tests_passed: usize,
    /// Rounded mean percentage; 0 with no results.
    pub average_percentage: u32,
    /// Seconds.
    pub total_time_spent: u64,
    /// Latest results, oldest first.
    pub recent: Vec<TestResult>,
}

pub fn history_summary(state: &AppState, recent: usize) -> HistorySummary {
    let results = &state.test_results;
    let tests_taken = results.len();

    let average_percentage = if tests_taken == 0 {
        0
    } else {
        let sum: u64 = results.iter().map(|r| u64::from(r.score.percentage)).sum();
        (sum as f64 / tests_taken as f64).round() as u32
    };

    HistorySummary {
        tests_taken,
        tests_passed: results.iter().filter(|r| r.score.passed).count(),
        average_percentage,
        total_time_spent: results.iter().map(|r| r.time_spent).sum(),
        recent: results[tests_taken.saturating_sub(recent)..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answers, Score};
    use crate::store::AppAction;
    use chrono::Utc;

    fn result(id: &str, percentage: u32, time_spent: u64) -> TestResult {
        TestResult {
            id: id.into(),
            mock_test_id: "hsk4-1".into(),
            score: Score {
                total: 0,
                by_section: Default::default(),
                percentage,
                passed: percentage >= 60,
            },
            answers: Answers::new(),
            time_spent,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn empty_history() {
        let summary = history_summary(&AppState::new(), 3);
        assert_eq!(summary.tests_taken, 0);
        assert_eq!(summary.average_percentage, 0);
        assert!(summary.recent.is_empty());
    }

    #[test]
    fn aggregates_and_keeps_latest() {
        let mut state = AppState::new();
        for (id, pct, secs) in [("a", 85, 2700), ("b", 78, 3120), ("c", 92, 2280), ("d", 40, 600)] {
            state.apply(AppAction::AddTestResult(result(id, pct, secs)));
        }

        let summary = history_summary(&state, 3);
        assert_eq!(summary.tests_taken, 4);
        assert_eq!(summary.tests_passed, 3);
        // 295 / 4 = 73.75
        assert_eq!(summary.average_percentage, 74);
        assert_eq!(summary.total_time_spent, 8700);
        let ids: Vec<_> = summary.recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
    }
}
