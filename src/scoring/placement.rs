use std::collections::BTreeMap;

use crate::models::{Answers, HskLevel, PlacementQuizResult, Question};

use super::{percentage, ScoringConfig};

/// Score a placement quiz.
///
/// The estimated level is the one with the most correct answers; on a tie the
/// lower level wins, and a quiz with nothing right estimates HSK 3.
pub fn score_placement(
    questions: &[Question],
    answers: &Answers,
    config: &ScoringConfig,
) -> PlacementQuizResult {
    let mut correct = 0u32;
    let mut by_level: BTreeMap<HskLevel, u32> =
        HskLevel::ALL.iter().map(|level| (*level, 0)).collect();

    for question in questions {
        let is_correct = answers
            .get(&question.id)
            .map_or(false, |answer| question.is_correct(answer));
        if is_correct {
            correct += 1;
            *by_level.entry(question.level).or_insert(0) += 1;
        }
    }

    // BTreeMap iterates in ascending level order.
    let mut estimated_level = HskLevel::Hsk3;
    let mut best = 0u32;
    for (level, count) in &by_level {
        if *count > best {
            best = *count;
            estimated_level = *level;
        }
    }

    let accuracy = if questions.is_empty() {
        0.0
    } else {
        correct as f64 / questions.len() as f64
    };

    let weak_areas = if accuracy < config.weak_accuracy_threshold {
        config.placement_weak_areas.clone()
    } else {
        Vec::new()
    };

    PlacementQuizResult {
        estimated_level,
        confidence: percentage(correct, questions.len()),
        strong_areas: config.placement_strong_areas.clone(),
        weak_areas,
        recommendation: format!(
            "Based on your performance, we recommend starting with HSK {} preparation.",
            estimated_level.number()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerValue, Difficulty, QuestionType, Section};

    fn question(id: &str, level: u8, correct: u32) -> Question {
        Question {
            id: id.into(),
            level: HskLevel::try_from(level).unwrap(),
            section: Section::Reading,
            question_type: QuestionType::MultipleChoice,
            question: format!("question {id}"),
            question_chinese: None,
            options: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            correct_answer: AnswerValue::Choice(correct),
            explanation: None,
            difficulty: Difficulty::Medium,
        }
    }

    fn answers(pairs: &[(&str, u32)]) -> Answers {
        pairs
            .iter()
            .map(|(id, choice)| (id.to_string(), AnswerValue::Choice(*choice)))
            .collect()
    }

    #[test]
    fn four_of_five_with_three_at_level_four() {
        let questions = vec![
            question("p1", 3, 0),
            question("p2", 4, 1),
            question("p3", 4, 2),
            question("p4", 4, 3),
            question("p5", 5, 0),
        ];
        // p5 is answered wrong.
        let given = answers(&[("p1", 0), ("p2", 1), ("p3", 2), ("p4", 3), ("p5", 2)]);

        let result = score_placement(&questions, &given, &ScoringConfig::default());
        assert_eq!(result.confidence, 80);
        assert_eq!(result.estimated_level, HskLevel::Hsk4);
        assert!(result.weak_areas.is_empty());
        assert_eq!(result.strong_areas, vec!["Reading Comprehension".to_string()]);
        assert_eq!(
            result.recommendation,
            "Based on your performance, we recommend starting with HSK 4 preparation."
        );
    }

    #[test]
    fn ties_keep_the_lower_level() {
        let questions = vec![question("a", 3, 0), question("b", 5, 0)];
        let given = answers(&[("a", 0), ("b", 0)]);

        let result = score_placement(&questions, &given, &ScoringConfig::default());
        assert_eq!(result.estimated_level, HskLevel::Hsk3);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn unanswered_quiz_defaults_to_hsk3_with_weak_areas() {
        let questions = vec![question("a", 5, 0), question("b", 6, 1)];

        let result = score_placement(&questions, &Answers::new(), &ScoringConfig::default());
        assert_eq!(result.estimated_level, HskLevel::Hsk3);
        assert_eq!(result.confidence, 0);
        assert_eq!(
            result.weak_areas,
            vec!["Vocabulary".to_string(), "Grammar".to_string()]
        );
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let result = score_placement(&[], &Answers::new(), &ScoringConfig::default());
        assert_eq!(result.confidence, 0);
        assert_eq!(result.estimated_level, HskLevel::Hsk3);
    }
}
