//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Screen, Action, Transition)
//! - `update`: pure transitions plus effect application on the session
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: terminal effects and the event loop

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
