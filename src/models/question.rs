use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HskLevel;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Listening,
    Reading,
    Writing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    FillBlank,
    TrueFalse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A recorded or expected answer: an option index for choice questions, free
/// text otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnswerValue {
    Choice(u32),
    Text(String),
}

impl From<u32> for AnswerValue {
    fn from(index: u32) -> Self {
        AnswerValue::Choice(index)
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        AnswerValue::Text(text.to_string())
    }
}

/// Question id to answer.
pub type Answers = BTreeMap<String, AnswerValue>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub level: HskLevel,
    pub section: Section,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_chinese: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: AnswerValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_correct(&self, answer: &AnswerValue) -> bool {
        &self.correct_answer == answer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MockTest {
    pub id: String,
    pub title: String,
    pub level: HskLevel,
    pub questions: Vec<Question>,
    /// Minutes.
    pub time_limit: u32,
    pub sections: Vec<Section>,
    pub difficulty: Difficulty,
    /// Length of the full exam this test models; `questions` may be a sample.
    pub total_questions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_decode_as_index_or_text() {
        let answers: Answers = serde_json::from_str(r#"{"q1": 0, "q2": "学校"}"#).unwrap();
        assert_eq!(answers["q1"], AnswerValue::Choice(0));
        assert_eq!(answers["q2"], AnswerValue::Text("学校".into()));
    }

    #[test]
    fn index_and_text_answers_never_match_each_other() {
        let question: Question = serde_json::from_str(
            r#"{
                "id": "p1", "level": 3, "section": "Reading", "type": "multiple_choice",
                "question": "What does \"你好\" mean?", "options": ["Hello", "Goodbye"],
                "correctAnswer": 0, "difficulty": "easy"
            }"#,
        )
        .unwrap();

        assert!(question.is_correct(&AnswerValue::Choice(0)));
        assert!(!question.is_correct(&AnswerValue::Text("0".into())));
        assert!(!question.is_correct(&AnswerValue::Choice(1)));
    }
}
