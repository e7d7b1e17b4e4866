use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use log::info;

use crate::{
    catalog::Catalog,
    models::{AnswerValue, MockTest, TestResult, User},
    scoring::{score_test, ScoringConfig},
    store::{AppAction, AppStore, CurrentTestSession, TestProgress},
};

/// Open a session for `test_id`, discarding any session already in progress.
pub fn start_practice_test(store: &AppStore, catalog: &Catalog, test_id: &str) -> Result<MockTest> {
    let test = catalog
        .mock_test(test_id)
        .ok_or_else(|| anyhow!("unknown practice test '{test_id}'"))?;

    store.dispatch(AppAction::StartTest {
        test_id: test.id.clone(),
    });
    Ok(test.clone())
}

/// Record one answer plus the clock and cursor position of the active session.
pub fn record_answer(
    store: &AppStore,
    question_id: &str,
    answer: AnswerValue,
    time_spent: u64,
    next_index: usize,
) -> Result<CurrentTestSession> {
    let session = store
        .state()
        .current_test
        .ok_or_else(|| anyhow!("no practice test in progress"))?;

    let mut answers = session.answers;
    answers.insert(question_id.to_string(), answer);

    store.dispatch(AppAction::UpdateTestProgress(TestProgress {
        answers: answers.clone(),
        time_spent,
        current_question_index: next_index,
    }));

    Ok(CurrentTestSession {
        test_id: session.test_id,
        answers,
        time_spent,
        current_question_index: next_index,
    })
}

/// Running average after one more test, rounded to a whole percentage.
fn updated_average(user: &User, percentage: u32) -> u32 {
    let taken = u64::from(user.total_tests_taken);
    let sum = u64::from(user.average_score) * taken + u64::from(percentage);
    (sum as f64 / (taken + 1) as f64).round() as u32
}

/// Score the active session, append the result, fold it into the user's
/// statistics and close the session.
pub async fn finish_practice_test(
    store: &AppStore,
    catalog: &Catalog,
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> Result<TestResult> {
    let state = store.state();
    let session = state
        .current_test
        .ok_or_else(|| anyhow!("no practice test in progress"))?;
    let test = catalog
        .mock_test(&session.test_id)
        .ok_or_else(|| anyhow!("practice test '{}' is not in the catalog", session.test_id))?;

    let result = score_test(test, &session.answers, session.time_spent, now, config);

    let mut pending = vec![store.dispatch(AppAction::AddTestResult(result.clone()))];
    if let Some(user) = state.user {
        let average_score = updated_average(&user, result.score.percentage);
        pending.push(store.dispatch(AppAction::SetUser(User {
            total_tests_taken: user.total_tests_taken + 1,
            average_score,
            ..user
        })));
    }
    store.dispatch(AppAction::CompleteTest);

    for task in pending {
        task.wait().await;
    }

    info!(
        "Finished {} with {}% ({})",
        result.mock_test_id,
        result.score.percentage,
        if result.score.passed { "passed" } else { "failed" }
    );
    Ok(result)
}
