//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: correct answer, "Correct!" feedback
//! - Red: the player's wrong choice, "Incorrect" feedback
//! - Cyan: interactive elements (cursor, keybinding hints)
//! - Dim: de-emphasized (counters, inactive options)
//! - Bold: important (question text, final score)

use ratatui::style::{Color, Modifier, Style};

use crate::session::OptionMark;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct answer / success — green.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Wrong choice — red.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row while choosing.
pub const STYLE_CURSOR: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Style for an option given its reveal state.
pub fn option_style(mark: OptionMark) -> Style {
    match mark {
        OptionMark::Unrevealed => Style::new(),
        OptionMark::Correct => STYLE_CORRECT,
        OptionMark::Incorrect => STYLE_INCORRECT,
        OptionMark::Neutral => STYLE_DIM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_CORRECT.fg, Some(Color::Green));
        assert_eq!(STYLE_INCORRECT.fg, Some(Color::Red));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn option_style_follows_mark() {
        assert_eq!(option_style(OptionMark::Correct), STYLE_CORRECT);
        assert_eq!(option_style(OptionMark::Incorrect), STYLE_INCORRECT);
        assert_eq!(option_style(OptionMark::Neutral), STYLE_DIM);
        assert_eq!(option_style(OptionMark::Unrevealed), Style::new());
    }

    #[test]
    fn important_style_is_bold() {
        assert!(STYLE_IMPORTANT.add_modifier.contains(Modifier::BOLD));
    }
}
