//! Core module - application state machine
//!
//! Provides the top-level state flow for the application using Bevy's state
//! system. The match itself never runs outside [`AppState::InGame`] and
//! [`AppState::GameOver`]; the menu screens collect the match configuration
//! before play begins.

pub mod state;

pub use state::{AppState, InMatch, InMenus};
