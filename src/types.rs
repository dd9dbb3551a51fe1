//! Domain types for quiz-tui.
//!
//! Questions are immutable content. Feedback and summaries are derived
//! values produced by the session; nothing here carries mutable state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Number of options every question must offer.
pub const OPTIONS_PER_QUESTION: usize = 4;

// ============================================================================
// QUESTIONS
// ============================================================================

/// A single multiple-choice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the player.
    pub text: String,
    /// Exactly four unique options, in display order.
    pub options: Vec<String>,
    /// The option that scores. Always a member of `options`.
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: &str, options: [&str; OPTIONS_PER_QUESTION], correct_answer: &str) -> Self {
        Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }

    /// Check the structural invariants: four options, no duplicates,
    /// correct answer among them.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuestionError::WrongOptionCount {
                question: self.text.clone(),
                found: self.options.len(),
            });
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(QuestionError::DuplicateOption {
                    question: self.text.clone(),
                    option: option.clone(),
                });
            }
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing {
                question: self.text.clone(),
                answer: self.correct_answer.clone(),
            });
        }
        Ok(())
    }

    /// Whether `option` is the scoring answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

/// The compiled-in question set, in authoring order.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the output of `typeof null` in JavaScript?",
            ["object", "null", "undefined", "string"],
            "object",
        ),
        Question::new(
            "Which company developed React?",
            ["Google", "Microsoft", "Facebook", "Twitter"],
            "Facebook",
        ),
        Question::new(
            "What does CSS stand for?",
            [
                "Creative Style Sheets",
                "Cascading Style Sheets",
                "Computer Style Sheets",
                "Colorful Style Sheets",
            ],
            "Cascading Style Sheets",
        ),
        Question::new(
            "Which HTML tag is used to define an unordered list?",
            ["<ol>", "<li>", "<ul>", "<list>"],
            "<ul>",
        ),
    ]
}

/// A question that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    WrongOptionCount { question: String, found: usize },
    DuplicateOption { question: String, option: String },
    CorrectAnswerMissing { question: String, answer: String },
}

impl std::fmt::Display for QuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionError::WrongOptionCount { question, found } => write!(
                f,
                "{:?}: expected {} options, found {}",
                question, OPTIONS_PER_QUESTION, found
            ),
            QuestionError::DuplicateOption { question, option } => {
                write!(f, "{:?}: option {:?} appears more than once", question, option)
            }
            QuestionError::CorrectAnswerMissing { question, answer } => {
                write!(f, "{:?}: correct answer {:?} is not an option", question, answer)
            }
        }
    }
}

impl std::error::Error for QuestionError {}

// ============================================================================
// FEEDBACK & SUMMARY
// ============================================================================

/// Message revealed once an answer has been selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: String },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Correct => write!(f, "Correct!"),
            Feedback::Incorrect { correct_answer } => {
                write!(f, "Incorrect. The correct answer is: {}", correct_answer)
            }
        }
    }
}

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Your final score is: {} out of {}", self.score, self.total)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Settings shared by the commands that run a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayConfig {
    /// Fixed RNG seed for reproducible shuffles. None = OS entropy.
    pub seed: Option<u64>,
}

impl PlayConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_has_four_valid_questions() {
        let questions = builtin_questions();
        assert_eq!(questions.len(), 4);
        for q in &questions {
            assert_eq!(q.validate(), Ok(()), "invalid question: {}", q.text);
        }
    }

    #[test]
    fn validate_rejects_wrong_option_count() {
        let mut q = builtin_questions().remove(0);
        q.options.pop();
        assert!(matches!(
            q.validate(),
            Err(QuestionError::WrongOptionCount { found: 3, .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_option() {
        let q = Question::new("Pick one", ["a", "b", "a", "c"], "a");
        assert_eq!(
            q.validate(),
            Err(QuestionError::DuplicateOption {
                question: "Pick one".into(),
                option: "a".into(),
            })
        );
    }

    #[test]
    fn validate_rejects_missing_correct_answer() {
        let q = Question::new("Pick one", ["a", "b", "c", "d"], "e");
        assert!(matches!(
            q.validate(),
            Err(QuestionError::CorrectAnswerMissing { .. })
        ));
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(Feedback::Correct.to_string(), "Correct!");
        let wrong = Feedback::Incorrect {
            correct_answer: "<ul>".into(),
        };
        assert_eq!(wrong.to_string(), "Incorrect. The correct answer is: <ul>");
        assert!(!wrong.is_correct());
    }

    #[test]
    fn summary_display() {
        let summary = SessionSummary { score: 2, total: 4 };
        assert_eq!(summary.to_string(), "Your final score is: 2 out of 4");
    }

    #[test]
    fn seeded_config_is_reproducible() {
        use rand::Rng;
        let config = PlayConfig { seed: Some(7) };
        let mut first = config.rng();
        let mut second = config.rng();
        let a: Vec<u32> = (0..8).map(|_| first.gen_range(0..1000)).collect();
        let b: Vec<u32> = (0..8).map(|_| second.gen_range(0..1000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn feedback_serializes_with_result_tag() {
        let json = serde_json::to_value(Feedback::Incorrect {
            correct_answer: "object".into(),
        })
        .unwrap();
        assert_eq!(json["result"], "incorrect");
        assert_eq!(json["correct_answer"], "object");
    }
}
