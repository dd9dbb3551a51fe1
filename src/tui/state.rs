//! TUI state algebra: pure types, zero effects.
//!
//! Screen variants carry only per-screen transient state (the option
//! cursor). The quiz itself lives in [`App::session`] and is only
//! changed through the session's own operations.

use crossterm::event::KeyEvent;

use crate::session::QuizSession;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen.
    pub screen: Screen,

    /// The running quiz. None until the first load.
    pub session: Option<QuizSession>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// No session yet.
    Loading,

    /// A question on screen, awaiting or showing an answer.
    Question {
        /// Highlighted option index.
        cursor: usize,
    },

    /// Final score and restart prompt.
    Completed,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Loading
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Pick an option by its 1-based number.
    Choose(u8),
    /// Select the highlighted option, or move on once answered.
    Enter,
    /// Move on to the next question or the score screen.
    Next,
    Restart,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Run a session operation, then pick the next screen.
    Effect(Effect),
}

/// Session operation requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Build the first session.
    Load,
    /// Answer with the option at `index` of the current question.
    SelectAnswer { index: usize },
    /// Leave the current (answered) question.
    Advance,
    /// Replace the session with a freshly shuffled one.
    Restart,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// App before any session exists.
    pub fn loading() -> Self {
        App {
            screen: Screen::Loading,
            session: None,
            should_quit: false,
        }
    }

    /// App showing the first question of `session`.
    pub fn with_session(session: QuizSession) -> Self {
        App {
            screen: Screen::question(),
            session: Some(session),
            should_quit: false,
        }
    }
}

impl Screen {
    /// Question screen with the cursor on the first option.
    pub fn question() -> Self {
        Screen::Question { cursor: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn app_loading_has_no_session() {
        let app = App::loading();
        assert_eq!(app.screen, Screen::Loading);
        assert!(app.session.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn app_with_session_lands_on_first_question() {
        let session = QuizSession::load(&mut StdRng::seed_from_u64(1));
        let app = App::with_session(session);
        assert_eq!(app.screen, Screen::Question { cursor: 0 });
        assert!(app.session.is_some());
    }

    #[test]
    fn screen_default_is_loading() {
        assert_eq!(Screen::default(), Screen::Loading);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Screen(Screen::Completed);
        let t2 = Transition::Quit;
        let t3 = Transition::Effect(Effect::Restart);
        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }
}
