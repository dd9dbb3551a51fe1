//! quiz-tui: a terminal multiple-choice quiz.
//!
//! The quiz state machine and shuffle are pure and usable on their own;
//! the `tui` module puts them behind a ratatui interface.

pub mod logging;
pub mod report;
pub mod script;
pub mod session;
pub mod shuffle;
pub mod tui;
pub mod types;
