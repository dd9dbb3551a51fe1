//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module that touches the terminal. It wires the pure
//! layers (state, update, view) to crossterm and ratatui.
//!
//! A key reader thread forwards crossterm key events over an mpsc channel;
//! the event loop owns the App (and with it the session) and is the only
//! code that mutates it.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, info};
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, AppEvent, Effect};
use super::update::{apply_effect, apply_transition, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Char(c @ '1'..='4') => Some(Action::Choose(c as u8 - b'0')),
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                // Windows reports releases too; act on presses only
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, releases
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive quiz until the player quits.
///
/// `rng` drives every shuffle for the lifetime of the TUI, so a seeded
/// generator reproduces the same sequence of sessions.
pub fn run<R: Rng + ?Sized>(rng: &mut R) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::loading();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    terminal.draw(|frame| render(&app, frame))?;
    apply_effect(&mut app, Effect::Load, rng);
    info!("quiz started");

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on the next key; all senders gone means the reader died.
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break,
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    debug!("{:?} on {:?}", action, app.screen);
                    let transition = update(app.screen.clone(), &action, app.session.as_ref());
                    apply_transition(&mut app, transition, rng);
                }
            }
        }
    }

    if let Some(session) = &app.session {
        info!("quiz closed: {}", session.summary());
    }
    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
