//! Xadrez: a graphical chess game with a UCI engine opponent.
//!
//! Module layout:
//! - [`core`] - top-level application state machine (menus, match, end)
//! - [`engine`] - fail-soft adapter around an external UCI engine binary
//! - [`game`] - match rules, resources, systems, and the analysis bridge
//! - [`rendering`] - 2D board view
//! - [`ui`] - egui menu screens and in-game HUD

pub mod core;
pub mod engine;
pub mod game;
pub mod rendering;
pub mod ui;
