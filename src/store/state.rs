use serde::{Deserialize, Serialize};

use crate::models::{Answers, PlacementQuizResult, TestResult, User};

use super::{AppAction, TestProgress};

/// A practice test between StartTest and CompleteTest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTestSession {
    pub test_id: String,
    pub answers: Answers,
    /// Seconds.
    pub time_spent: u64,
    pub current_question_index: usize,
}

impl CurrentTestSession {
    pub fn new(test_id: String) -> Self {
        Self {
            test_id,
            answers: Answers::new(),
            time_spent: 0,
            current_question_index: 0,
        }
    }

    fn merge(&mut self, progress: TestProgress) {
        self.answers = progress.answers;
        self.time_spent = progress.time_spent;
        self.current_question_index = progress.current_question_index;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub placement_result: Option<PlacementQuizResult>,
    pub test_results: Vec<TestResult>,
    pub current_test: Option<CurrentTestSession>,
    /// True until persisted data has been restored once.
    pub is_loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            placement_result: None,
            test_results: Vec::new(),
            current_test: None,
            is_loading: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SetUser(user) => self.user = Some(user),
            AppAction::SetAuthenticated(value) => self.is_authenticated = value,
            AppAction::SetPlacementResult(result) => self.placement_result = Some(result),
            AppAction::AddTestResult(result) => self.test_results.push(result),
            AppAction::StartTest { test_id } => {
                self.current_test = Some(CurrentTestSession::new(test_id));
            }
            AppAction::UpdateTestProgress(progress) => {
                if let Some(session) = self.current_test.as_mut() {
                    session.merge(progress);
                }
            }
            AppAction::CompleteTest => self.current_test = None,
            AppAction::SetLoading(value) => self.is_loading = value,
            AppAction::LoadPersistedData(data) => {
                if let Some(user) = data.user {
                    self.user = Some(user);
                }
                if let Some(value) = data.is_authenticated {
                    self.is_authenticated = value;
                }
                if let Some(results) = data.test_results {
                    self.test_results = results;
                }
                if let Some(result) = data.placement_result {
                    self.placement_result = Some(result);
                }
                self.is_loading = false;
            }
            AppAction::SignOut => {
                self.user = None;
                self.is_authenticated = false;
            }
        }
    }
}

/// Pure form of [`AppState::apply`].
pub fn reduce(state: &AppState, action: AppAction) -> AppState {
    let mut next = state.clone();
    next.apply(action);
    next
}
