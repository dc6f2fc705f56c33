use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete fill-in-the-blank question over one block of code.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    /// The original, unmodified code.
    pub code: String,
    /// The code with each target's first occurrence replaced by a numbered
    /// `_____(n)_____` placeholder.
    pub question_code: String,
    pub sub_questions: Vec<SubQuestion>,
    pub num_blanks: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn new(code: &str, question_code: &str, sub_questions: Vec<SubQuestion>) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            question_code: question_code.to_string(),
            num_blanks: sub_questions.len() as i16,
            sub_questions,
            created_at: Some(Utc::now()),
        }
    }
}

/// One blank and its multiple-choice options. Invariant: `options` has exactly
/// four distinct entries and `options[answer - 1] == target`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubQuestion {
    /// 1-based blank number, matching the `_____(n)_____` placeholder.
    pub number: i16,
    pub target: String,
    pub options: Vec<String>,
    /// 1-based index of the target within `options`.
    pub answer: i16,
}

impl SubQuestion {
    pub fn placeholder(&self) -> String {
        format!("_____({})_____", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sub_question() -> SubQuestion {
        SubQuestion {
            number: 1,
            target: "for".to_string(),
            options: vec![
                "while".to_string(),
                "for".to_string(),
                "do".to_string(),
                "if".to_string(),
            ],
            answer: 2,
        }
    }

    #[test]
    fn question_new_sets_blank_count_and_id() {
        let question = Question::new("int x;", "_____(1)_____ x;", vec![sample_sub_question()]);

        assert_eq!(question.num_blanks, 1);
        assert!(!question.id.is_empty());
        assert!(question.created_at.is_some());
    }

    #[test]
    fn sub_question_answer_points_at_target() {
        let sq = sample_sub_question();
        assert_eq!(sq.options[(sq.answer - 1) as usize], sq.target);
        assert_ne!(sq.options[0], sq.target);
    }

    #[test]
    fn sub_question_placeholder_format() {
        let sq = sample_sub_question();
        assert_eq!(sq.placeholder(), "_____(1)_____");
    }

    #[test]
    fn question_round_trip_serialization() {
        let question = Question::new("int x;", "_____(1)_____ x;", vec![sample_sub_question()]);

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: Question = serde_json::from_str(&json).expect("question should deserialize");
        assert_eq!(question, parsed);
    }
}
