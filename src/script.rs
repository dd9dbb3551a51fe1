//! Scripted play-through.
//!
//! Drives a session with a fixed list of choices instead of key presses.
//! Used by the `script` command and handy for reproducing a run from a seed.

use log::warn;
use serde::Serialize;

use crate::session::QuizSession;
use crate::types::{Feedback, SessionSummary};

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question: String,
    pub chosen: String,
    pub correct_answer: String,
    pub correct: bool,
    pub feedback: Feedback,
}

/// Everything a scripted run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptOutcome {
    pub answers: Vec<AnswerRecord>,
    pub summary: SessionSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Fewer choices than questions.
    NotEnoughAnswers { needed: usize, given: usize },
    /// A choice that does not name an option (choices are 1-based).
    OptionOutOfRange {
        question: usize,
        choice: usize,
        available: usize,
    },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::NotEnoughAnswers { needed, given } => write!(
                f,
                "{} questions need answers but only {} were given",
                needed, given
            ),
            ScriptError::OptionOutOfRange {
                question,
                choice,
                available,
            } => write!(
                f,
                "question {}: choice {} is out of range (1-{})",
                question, choice, available
            ),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Play `session` to completion using 1-based option numbers from `answers`.
///
/// The session is consumed from its current question onward and ends
/// completed on success. Choices past the last question are ignored.
pub fn run_script(session: &mut QuizSession, answers: &[usize]) -> Result<ScriptOutcome, ScriptError> {
    let remaining = session.total() - session.current_index();
    if session.is_completed() || answers.len() < remaining {
        return Err(ScriptError::NotEnoughAnswers {
            needed: remaining,
            given: answers.len(),
        });
    }
    if answers.len() > remaining {
        warn!(
            "ignoring {} extra answer(s) past the last question",
            answers.len() - remaining
        );
    }

    let mut records = Vec::with_capacity(remaining);
    for &choice in &answers[..remaining] {
        let number = session.current_index() + 1;
        let Some(question) = session.current_question().cloned() else {
            break;
        };
        let Some(chosen) = choice
            .checked_sub(1)
            .and_then(|i| question.options.get(i))
            .cloned()
        else {
            return Err(ScriptError::OptionOutOfRange {
                question: number,
                choice,
                available: question.options.len(),
            });
        };

        let Some(feedback) = session.select_answer(&chosen).cloned() else {
            break;
        };
        records.push(AnswerRecord {
            question: question.text,
            correct: feedback.is_correct(),
            chosen,
            correct_answer: question.correct_answer,
            feedback,
        });

        if session.advance().is_err() {
            break;
        }
    }

    Ok(ScriptOutcome {
        answers: records,
        summary: session.summary(),
    })
}
