use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Answers, MockTest, Score, TestResult};

use super::{percentage, ScoringConfig};

/// Grade the answers given for `test` and wrap them in a new [`TestResult`].
///
/// Every section the test declares appears in `by_section`, even with zero
/// correct answers. Answers to question ids outside the test are kept in the
/// record but never counted.
pub fn score_test(
    test: &MockTest,
    answers: &Answers,
    time_spent: u64,
    completed_at: DateTime<Utc>,
    config: &ScoringConfig,
) -> TestResult {
    let mut by_section: BTreeMap<_, u32> =
        test.sections.iter().map(|section| (*section, 0)).collect();
    let mut correct = 0u32;

    for question in &test.questions {
        let is_correct = answers
            .get(&question.id)
            .map_or(false, |answer| question.is_correct(answer));
        if is_correct {
            correct += 1;
            *by_section.entry(question.section).or_insert(0) += 1;
        }
    }

    let percentage = percentage(correct, test.questions.len());

    TestResult {
        id: Uuid::new_v4().to_string(),
        mock_test_id: test.id.clone(),
        score: Score {
            total: correct,
            by_section,
            percentage,
            passed: percentage >= config.pass_threshold_percent,
        },
        answers: answers.clone(),
        time_spent,
        completed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{AnswerValue, Section};
    use chrono::TimeZone;

    fn completed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn all_correct_passes() {
        let catalog = Catalog::builtin().unwrap();
        let test = catalog.mock_test("hsk3-1").unwrap();
        let answers: Answers = [
            ("q1".to_string(), AnswerValue::Choice(0)),
            ("q2".to_string(), AnswerValue::Choice(1)),
        ]
        .into_iter()
        .collect();

        let result = score_test(test, &answers, 600, completed_at(), &ScoringConfig::default());
        assert_eq!(result.mock_test_id, "hsk3-1");
        assert_eq!(result.score.total, 2);
        assert_eq!(result.score.percentage, 100);
        assert!(result.score.passed);
        assert_eq!(result.score.by_section[&Section::Reading], 2);
        assert_eq!(result.score.by_section[&Section::Writing], 0);
        assert_eq!(result.time_spent, 600);
        assert_eq!(result.answers, answers);
        assert!(Uuid::parse_str(&result.id).is_ok());
    }

    #[test]
    fn half_right_fails_the_default_threshold() {
        let catalog = Catalog::builtin().unwrap();
        let test = catalog.mock_test("hsk3-1").unwrap();
        let answers: Answers = [
            ("q1".to_string(), AnswerValue::Choice(0)),
            ("q2".to_string(), AnswerValue::Choice(3)),
        ]
        .into_iter()
        .collect();

        let result = score_test(test, &answers, 60, completed_at(), &ScoringConfig::default());
        assert_eq!(result.score.percentage, 50);
        assert!(!result.score.passed);

        let lenient = ScoringConfig {
            pass_threshold_percent: 50,
            ..ScoringConfig::default()
        };
        let result = score_test(test, &answers, 60, completed_at(), &lenient);
        assert!(result.score.passed);
    }

    #[test]
    fn foreign_answers_are_recorded_but_not_counted() {
        let catalog = Catalog::builtin().unwrap();
        let test = catalog.mock_test("hsk4-1").unwrap();
        let answers: Answers = [("p1".to_string(), AnswerValue::Choice(0))].into_iter().collect();

        let result = score_test(test, &answers, 0, completed_at(), &ScoringConfig::default());
        assert_eq!(result.score.total, 0);
        assert_eq!(result.score.by_section.len(), 3);
        assert!(result.answers.contains_key("p1"));
    }
}
