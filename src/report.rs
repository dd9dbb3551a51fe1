//! Report formatting for scripted runs and the question set.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use crate::script::ScriptOutcome;
use crate::types::{OutputFormat, Question, SessionSummary};

/// Format the outcome of a scripted run.
pub fn format_outcome(outcome: &ScriptOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_outcome_human(outcome),
        OutputFormat::Json => to_json(outcome),
    }
}

/// Format a list of questions with their options and answers.
pub fn format_questions(questions: &[Question], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_questions_human(questions),
        OutputFormat::Json => to_json(&questions),
    }
}

/// The closing line of a session.
pub fn format_summary(summary: &SessionSummary) -> String {
    summary.to_string()
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_outcome_human(outcome: &ScriptOutcome) -> String {
    let mut out = String::new();
    let total = outcome.answers.len();

    for (i, record) in outcome.answers.iter().enumerate() {
        out.push_str(&format!("Question {}/{}: {}\n", i + 1, total, record.question));
        out.push_str(&format!("  Answer: {}\n", record.chosen));
        out.push_str(&format!("  {}\n", record.feedback));
        out.push('\n');
    }

    out.push_str("=== Quiz Completed! ===\n");
    out.push_str(&format_summary(&outcome.summary));
    out.push('\n');
    out
}

fn format_questions_human(questions: &[Question]) -> String {
    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, question.text));
        for (n, option) in question.options.iter().enumerate() {
            let marker = if question.is_correct(option) { "*" } else { " " };
            out.push_str(&format!("   {} {}) {}\n", marker, n + 1, option));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "{} question{} (* marks the correct answer)\n",
        questions.len(),
        if questions.len() == 1 { "" } else { "s" }
    ));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // Serialization of these plain structs cannot fail; fall back to an
    // error object rather than panicking.
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
