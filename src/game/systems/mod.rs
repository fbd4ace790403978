//! Match systems
//!
//! - [`input`] - mouse clicks to selections and moves
//! - [`promotion`] - completing a parked promotion half-move
//! - [`game_logic`] - rules outcomes, clock, resignation, end transition
//! - [`shared`] - the one move-application path everything funnels through

pub mod game_logic;
pub mod input;
pub mod promotion;
pub mod shared;

pub use game_logic::{
    detect_rules_outcome, handle_resignation, tick_clock, transition_on_outcome,
};
pub use input::handle_board_click;
pub use promotion::resolve_promotion;
