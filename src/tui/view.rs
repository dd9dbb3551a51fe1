//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Feedback is revealed
//! as soon as an answer is recorded.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::session::{OptionMark, Phase, QuizSession};

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    let content_area = chunks[1];

    match (&app.screen, &app.session) {
        (Screen::Question { cursor }, Some(session)) => {
            render_question(session, *cursor, frame, content_area);
        }
        (Screen::Completed, Some(session)) => {
            render_completed(session, frame, content_area);
        }
        _ => render_loading(frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Loading | Screen::Question { .. } => "Quiz Time!",
        Screen::Completed => "Quiz Completed!",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

/// Help line showing available keybindings for the current state.
fn render_help(app: &App) -> Paragraph<'static> {
    let phase = app.session.as_ref().map(QuizSession::phase);
    let help_text = match (&app.screen, phase) {
        (Screen::Question { .. }, Some(Phase::AwaitingAnswer)) => {
            "[j/k] move  [Enter] answer  [1-4] pick  [q] quit"
        }
        (Screen::Question { .. }, Some(_)) => "[Enter/n] continue  [q] quit",
        (Screen::Completed, _) => "[r] restart  [q] quit",
        _ => "[q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: LOADING
// ============================================================================

fn render_loading(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("  Loading quiz...", theme::STYLE_INTERACTIVE)),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

// ============================================================================
// SCREEN: QUESTION
// ============================================================================

fn render_question(session: &QuizSession, cursor: usize, frame: &mut Frame, area: Rect) {
    let Some(question) = session.current_question() else {
        render_loading(frame, area);
        return;
    };
    let awaiting = session.phase() == Phase::AwaitingAnswer;

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  Question {}", session.current_index() + 1),
                theme::STYLE_IMPORTANT,
            ),
            Span::styled(format!("/{}", session.total()), theme::STYLE_DIM),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", question.text), theme::STYLE_IMPORTANT)),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        lines.push(option_line(i, option, session.option_mark(option), awaiting && i == cursor));
    }

    if let Some(feedback) = session.feedback() {
        let style = if feedback.is_correct() {
            theme::STYLE_CORRECT
        } else {
            theme::STYLE_INCORRECT
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", feedback), style)));
        lines.push(Line::from(""));

        let next_label = if session.is_last_question() {
            "Show Score"
        } else {
            "Next Question"
        };
        lines.push(Line::from(vec![
            Span::styled("  [Enter] ", theme::STYLE_INTERACTIVE),
            Span::raw(next_label),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One option row: cursor marker, number, text, and a reveal mark.
fn option_line(index: usize, option: &str, mark: OptionMark, focused: bool) -> Line<'static> {
    let pointer = if focused { "›" } else { " " };
    let suffix = match mark {
        OptionMark::Correct => "  ✓",
        OptionMark::Incorrect => "  ✗",
        OptionMark::Unrevealed | OptionMark::Neutral => "",
    };
    let style = if focused {
        theme::STYLE_CURSOR
    } else {
        theme::option_style(mark)
    };

    Line::from(vec![
        Span::styled(format!("  {} ", pointer), theme::STYLE_INTERACTIVE),
        Span::styled(format!("{}) {}", index + 1, option), style),
        Span::styled(suffix, theme::option_style(mark)),
    ])
}

// ============================================================================
// SCREEN: COMPLETED
// ============================================================================

fn render_completed(session: &QuizSession, frame: &mut Frame, area: Rect) {
    let summary = session.summary();
    let style = if summary.score == summary.total {
        theme::STYLE_CORRECT
    } else {
        theme::STYLE_IMPORTANT
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Quiz Completed!", theme::STYLE_TITLE)),
        Line::from(Span::styled("  ═══════════════", theme::STYLE_DIM)),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", summary), style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [r] ", theme::STYLE_INTERACTIVE),
            Span::raw("Restart Quiz"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
