//! Pure state transitions: (Screen, Action) → Transition.
//!
//! `update` decides what an action means on the current screen and never
//! touches the session. `apply_effect` is the single place where session
//! operations run; it takes the RNG as a parameter so it stays testable.

use log::{debug, warn};
use rand::Rng;

use crate::session::{Advance, Phase, QuizSession};

use super::state::{Action, App, Effect, Screen, Transition};

/// Pure state transition function.
///
/// `session` is a read-only view of the quiz; it is `None` only while
/// loading.
pub fn update(screen: Screen, action: &Action, session: Option<&QuizSession>) -> Transition {
    match (screen, session) {
        (Screen::Question { cursor }, Some(session)) => update_question(cursor, action, session),
        (Screen::Completed, Some(_)) => update_completed(action),
        (screen, _) => noop(screen, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Question: move the cursor, answer, then move on.
fn update_question(cursor: usize, action: &Action, session: &QuizSession) -> Transition {
    let len = session
        .current_question()
        .map(|q| q.options.len())
        .unwrap_or(0);
    let awaiting = session.phase() == Phase::AwaitingAnswer;
    let stay = Transition::Screen(Screen::Question { cursor });

    match action {
        Action::MoveUp => Transition::Screen(Screen::Question {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::Question { cursor: new_cursor })
        }
        Action::Choose(n) => {
            let index = usize::from(*n).wrapping_sub(1);
            if awaiting && index < len {
                Transition::Effect(Effect::SelectAnswer { index })
            } else {
                stay
            }
        }
        Action::Enter => {
            if awaiting {
                if cursor < len {
                    Transition::Effect(Effect::SelectAnswer { index: cursor })
                } else {
                    stay
                }
            } else {
                Transition::Effect(Effect::Advance)
            }
        }
        // Advancing is only offered once an answer is shown.
        Action::Next => {
            if awaiting {
                stay
            } else {
                Transition::Effect(Effect::Advance)
            }
        }
        Action::Quit => Transition::Quit,
        Action::Restart => stay,
    }
}

/// Completed: restart or quit.
fn update_completed(action: &Action) -> Transition {
    match action {
        Action::Restart | Action::Enter => Transition::Effect(Effect::Restart),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Completed),
    }
}

/// No-op handler: only Quit is accepted.
fn noop(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(screen),
    }
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Run a session operation and pick the screen that follows it.
pub fn apply_effect<R: Rng + ?Sized>(app: &mut App, effect: Effect, rng: &mut R) {
    debug!("applying {:?}", effect);
    match effect {
        Effect::Load => {
            app.session = Some(QuizSession::load(rng));
            app.screen = Screen::question();
        }
        Effect::Restart => {
            match app.session.as_mut() {
                Some(session) => session.restart(rng),
                None => app.session = Some(QuizSession::load(rng)),
            }
            app.screen = Screen::question();
        }
        Effect::SelectAnswer { index } => {
            if let Some(session) = app.session.as_mut() {
                if session.select_option(index).is_none() {
                    warn!("selection of option {} ignored", index + 1);
                }
            }
        }
        Effect::Advance => {
            let Some(session) = app.session.as_mut() else {
                return;
            };
            match session.advance() {
                Ok(Advance::Next { .. }) => app.screen = Screen::question(),
                Ok(Advance::Completed) => app.screen = Screen::Completed,
                Err(e) => warn!("{}", e),
            }
        }
    }
}

/// Apply a transition to the app.
pub fn apply_transition<R: Rng + ?Sized>(app: &mut App, transition: Transition, rng: &mut R) {
    match transition {
        Transition::Screen(screen) => app.screen = screen,
        Transition::Quit => app.should_quit = true,
        Transition::Effect(effect) => apply_effect(app, effect, rng),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    fn session() -> QuizSession {
        QuizSession::load(&mut rng())
    }

    fn answered_session() -> QuizSession {
        let mut s = session();
        s.select_option(0);
        s
    }

    /// Drive a key-level action through update + apply, like the event loop does.
    fn step(app: &mut App, action: Action, rng: &mut StdRng) {
        let transition = update(app.screen.clone(), &action, app.session.as_ref());
        apply_transition(app, transition, rng);
    }

    // -- Loading --

    #[test]
    fn loading_quit() {
        assert_eq!(update(Screen::Loading, &Action::Quit, None), Transition::Quit);
    }

    #[test]
    fn loading_ignores_other_actions() {
        assert_eq!(
            update(Screen::Loading, &Action::Enter, None),
            Transition::Screen(Screen::Loading)
        );
    }

    // -- Question --

    #[test]
    fn cursor_down_and_clamp() {
        let s = session();
        let result = update(Screen::Question { cursor: 0 }, &Action::MoveDown, Some(&s));
        assert_eq!(result, Transition::Screen(Screen::Question { cursor: 1 }));

        let result = update(Screen::Question { cursor: 3 }, &Action::MoveDown, Some(&s));
        assert_eq!(result, Transition::Screen(Screen::Question { cursor: 3 }));
    }

    #[test]
    fn cursor_up_at_top_stays() {
        let s = session();
        let result = update(Screen::Question { cursor: 0 }, &Action::MoveUp, Some(&s));
        assert_eq!(result, Transition::Screen(Screen::Question { cursor: 0 }));
    }

    #[test]
    fn enter_selects_option_under_cursor() {
        let s = session();
        let result = update(Screen::Question { cursor: 2 }, &Action::Enter, Some(&s));
        assert_eq!(result, Transition::Effect(Effect::SelectAnswer { index: 2 }));
    }

    #[test]
    fn number_key_selects_option() {
        let s = session();
        let result = update(Screen::question(), &Action::Choose(4), Some(&s));
        assert_eq!(result, Transition::Effect(Effect::SelectAnswer { index: 3 }));
    }

    #[test]
    fn number_key_out_of_range_is_noop() {
        let s = session();
        for n in [0u8, 5] {
            let result = update(Screen::question(), &Action::Choose(n), Some(&s));
            assert_eq!(result, Transition::Screen(Screen::question()));
        }
    }

    #[test]
    fn next_before_answer_is_noop() {
        let s = session();
        let result = update(Screen::Question { cursor: 1 }, &Action::Next, Some(&s));
        assert_eq!(result, Transition::Screen(Screen::Question { cursor: 1 }));
    }

    #[test]
    fn answered_question_ignores_further_choices() {
        let s = answered_session();
        let result = update(Screen::question(), &Action::Choose(2), Some(&s));
        assert_eq!(result, Transition::Screen(Screen::question()));
    }

    #[test]
    fn enter_or_next_after_answer_advances() {
        let s = answered_session();
        assert_eq!(
            update(Screen::question(), &Action::Enter, Some(&s)),
            Transition::Effect(Effect::Advance)
        );
        assert_eq!(
            update(Screen::question(), &Action::Next, Some(&s)),
            Transition::Effect(Effect::Advance)
        );
    }

    #[test]
    fn restart_mid_quiz_is_noop() {
        let s = answered_session();
        assert_eq!(
            update(Screen::question(), &Action::Restart, Some(&s)),
            Transition::Screen(Screen::question())
        );
    }

    // -- Completed --

    #[test]
    fn completed_restart_and_enter_restart() {
        let s = session();
        assert_eq!(
            update(Screen::Completed, &Action::Restart, Some(&s)),
            Transition::Effect(Effect::Restart)
        );
        assert_eq!(
            update(Screen::Completed, &Action::Enter, Some(&s)),
            Transition::Effect(Effect::Restart)
        );
    }

    #[test]
    fn completed_quit() {
        let s = session();
        assert_eq!(update(Screen::Completed, &Action::Quit, Some(&s)), Transition::Quit);
    }

    // -- Effects --

    #[test]
    fn load_effect_creates_session() {
        let mut app = App::loading();
        apply_effect(&mut app, Effect::Load, &mut rng());
        assert_eq!(app.screen, Screen::question());
        assert_eq!(app.session.as_ref().map(|s| s.total()), Some(4));
    }

    #[test]
    fn advance_effect_without_answer_keeps_state() {
        let mut app = App::with_session(session());
        app.screen = Screen::Question { cursor: 2 };
        apply_effect(&mut app, Effect::Advance, &mut rng());
        assert_eq!(app.screen, Screen::Question { cursor: 2 });
        assert_eq!(app.session.as_ref().unwrap().current_index(), 0);
    }

    #[test]
    fn full_play_through_reaches_completed_and_restarts() {
        let mut r = rng();
        let mut app = App::loading();
        apply_effect(&mut app, Effect::Load, &mut r);

        for _ in 0..4 {
            step(&mut app, Action::Choose(1), &mut r);
            assert_eq!(
                app.session.as_ref().unwrap().phase(),
                Phase::AnswerShown
            );
            step(&mut app, Action::Next, &mut r);
        }
        assert_eq!(app.screen, Screen::Completed);
        assert!(app.session.as_ref().unwrap().is_completed());

        step(&mut app, Action::Restart, &mut r);
        let s = app.session.as_ref().unwrap();
        assert_eq!(app.screen, Screen::question());
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_completed());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::with_session(session());
        step(&mut app, Action::Quit, &mut rng());
        assert!(app.should_quit);
    }
}
