use serde::{Deserialize, Serialize};

use crate::models::{Answers, PlacementQuizResult, TestResult, User};

/// Progress written into the active test session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestProgress {
    pub answers: Answers,
    pub time_spent: u64,
    pub current_question_index: usize,
}

/// Fields restored from storage at startup. `None` means "not restored" and
/// leaves the current value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedData {
    pub user: Option<User>,
    pub is_authenticated: Option<bool>,
    pub test_results: Option<Vec<TestResult>>,
    pub placement_result: Option<PlacementQuizResult>,
}

impl PersistedData {
    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.is_authenticated.is_none()
            && self.test_results.is_none()
            && self.placement_result.is_none()
    }
}

/// Every state transition the store accepts. Encoded as `{"type", "payload"}`
/// for callers on the other side of a serialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum AppAction {
    SetUser(User),
    SetAuthenticated(bool),
    SetPlacementResult(PlacementQuizResult),
    AddTestResult(TestResult),
    StartTest {
        #[serde(rename = "testId")]
        test_id: String,
    },
    UpdateTestProgress(TestProgress),
    CompleteTest,
    SetLoading(bool),
    LoadPersistedData(PersistedData),
    SignOut,
}

impl AppAction {
    /// Whether the action can change one of the slices mirrored to storage.
    pub fn touches_persisted_slices(&self) -> bool {
        matches!(
            self,
            AppAction::SetUser(_)
                | AppAction::SetPlacementResult(_)
                | AppAction::AddTestResult(_)
                | AppAction::LoadPersistedData(_)
                | AppAction::SignOut
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppAction::SetUser(_) => "SET_USER",
            AppAction::SetAuthenticated(_) => "SET_AUTHENTICATED",
            AppAction::SetPlacementResult(_) => "SET_PLACEMENT_RESULT",
            AppAction::AddTestResult(_) => "ADD_TEST_RESULT",
            AppAction::StartTest { .. } => "START_TEST",
            AppAction::UpdateTestProgress(_) => "UPDATE_TEST_PROGRESS",
            AppAction::CompleteTest => "COMPLETE_TEST",
            AppAction::SetLoading(_) => "SET_LOADING",
            AppAction::LoadPersistedData(_) => "LOAD_PERSISTED_DATA",
            AppAction::SignOut => "SIGN_OUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_payloads() {
        let action: AppAction =
            serde_json::from_str(r#"{"type": "START_TEST", "payload": {"testId": "hsk4-1"}}"#)
                .unwrap();
        assert_eq!(
            action,
            AppAction::StartTest {
                test_id: "hsk4-1".into()
            }
        );

        let action: AppAction = serde_json::from_str(r#"{"type": "COMPLETE_TEST"}"#).unwrap();
        assert_eq!(action, AppAction::CompleteTest);

        let action: AppAction = serde_json::from_str(
            r#"{"type": "UPDATE_TEST_PROGRESS", "payload": {"answers": {"q1": 2}, "timeSpent": 90, "currentQuestionIndex": 1}}"#,
        )
        .unwrap();
        match action {
            AppAction::UpdateTestProgress(progress) => {
                assert_eq!(progress.time_spent, 90);
                assert_eq!(progress.current_question_index, 1);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn only_persisted_slices_count_as_touched() {
        assert!(AppAction::SignOut.touches_persisted_slices());
        assert!(!AppAction::SetAuthenticated(true).touches_persisted_slices());
        assert!(!AppAction::CompleteTest.touches_persisted_slices());
        assert!(!AppAction::SetLoading(false).touches_persisted_slices());
    }
}
