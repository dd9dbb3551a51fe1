//! The quiz state machine.
//!
//! A [`QuizSession`] owns one run-through of the quiz. Its only mutators
//! are `select_answer` / `select_option`, `advance` and `restart`; a
//! restart replaces the whole value rather than resetting fields.
//!
//! States per question:
//! - awaiting answer: `selected_answer` is `None`
//! - answer shown: `selected_answer` and `feedback` are `Some`
//!
//! After the last question is advanced past, `completed` is set and
//! stays set until the session is replaced.

use log::{debug, warn};
use rand::Rng;

use crate::shuffle::shuffle;
use crate::types::{Feedback, Question, SessionSummary, builtin_questions};

// ============================================================================
// DERIVED VIEWS
// ============================================================================

/// Where the session stands, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    AnswerShown,
    Completed,
}

/// How an option of the current question should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// No answer yet; the option is selectable.
    Unrevealed,
    /// The scoring option, once an answer has been given.
    Correct,
    /// The player's wrong choice.
    Incorrect,
    /// Any other option after an answer has been given.
    Neutral,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at `index`.
    Next { index: usize },
    /// The last question was left; the session is complete.
    Completed,
}

/// An operation that the current phase does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `advance` was called before an answer was selected.
    NoAnswerSelected,
    /// `advance` was called on a completed session.
    AlreadyCompleted,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NoAnswerSelected => {
                write!(f, "cannot advance: no answer selected for the current question")
            }
            SessionError::AlreadyCompleted => write!(f, "cannot advance: quiz already completed"),
        }
    }
}

impl std::error::Error for SessionError {}

// ============================================================================
// SESSION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    source: Vec<Question>,
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<String>,
    feedback: Option<Feedback>,
    score: usize,
    completed: bool,
}

impl QuizSession {
    /// Start a session over the built-in question set.
    pub fn load<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::load_from(builtin_questions(), rng)
    }

    /// Start a session over `source`: shuffle the questions, then shuffle
    /// each question's options independently.
    pub fn load_from<R: Rng + ?Sized>(source: Vec<Question>, rng: &mut R) -> Self {
        let questions: Vec<Question> = shuffle(&source, rng)
            .into_iter()
            .map(|q| Question {
                options: shuffle(&q.options, rng),
                ..q
            })
            .collect();

        debug!("loaded session with {} questions", questions.len());

        QuizSession {
            source,
            questions,
            current_index: 0,
            selected_answer: None,
            feedback: None,
            score: 0,
            completed: false,
        }
    }

    /// Replace this session with a freshly shuffled one over the same source.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!("restarting session (previous score {})", self.score);
        *self = Self::load_from(std::mem::take(&mut self.source), rng);
    }

    /// Record `option` as the answer to the current question.
    ///
    /// Returns the feedback for a first selection. Returns `None` and
    /// changes nothing if an answer is already shown or the quiz is over.
    /// `option` is not checked against the question's options; anything
    /// other than the correct answer simply scores nothing.
    pub fn select_answer(&mut self, option: &str) -> Option<&Feedback> {
        if self.completed || self.selected_answer.is_some() {
            debug!("ignoring selection {:?}: answer already recorded", option);
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        let feedback = if question.is_correct(option) {
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                correct_answer: question.correct_answer.clone(),
            }
        };
        if feedback.is_correct() {
            self.score += 1;
        }
        debug!(
            "question {}: selected {:?} ({}), score {}",
            self.current_index + 1,
            option,
            if feedback.is_correct() { "correct" } else { "incorrect" },
            self.score
        );

        self.selected_answer = Some(option.to_string());
        self.feedback = Some(feedback);
        self.feedback.as_ref()
    }

    /// Select the option at `index` of the current question.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_option(&mut self, index: usize) -> Option<&Feedback> {
        let option = self.current_question()?.options.get(index)?.clone();
        self.select_answer(&option)
    }

    /// Leave the current question.
    ///
    /// Requires an answer to have been selected. On the last question the
    /// session completes and the index stays where it is.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.completed {
            warn!("advance rejected: session already completed");
            return Err(SessionError::AlreadyCompleted);
        }
        if self.selected_answer.is_none() {
            warn!(
                "advance rejected: question {} not answered",
                self.current_index + 1
            );
            return Err(SessionError::NoAnswerSelected);
        }

        self.selected_answer = None;
        self.feedback = None;

        if self.is_last_question() {
            self.completed = true;
            debug!("session completed with score {}/{}", self.score, self.total());
            Ok(Advance::Completed)
        } else {
            self.current_index += 1;
            debug!("advanced to question {}", self.current_index + 1);
            Ok(Advance::Next {
                index: self.current_index,
            })
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True when the current question is the final one.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else if self.selected_answer.is_some() {
            Phase::AnswerShown
        } else {
            Phase::AwaitingAnswer
        }
    }

    /// Presentation mark for `option` of the current question.
    pub fn option_mark(&self, option: &str) -> OptionMark {
        let (Some(selected), Some(question)) = (self.selected_answer(), self.current_question())
        else {
            return OptionMark::Unrevealed;
        };
        if question.is_correct(option) {
            OptionMark::Correct
        } else if selected == option {
            OptionMark::Incorrect
        } else {
            OptionMark::Neutral
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            total: self.total(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
