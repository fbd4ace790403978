//! Match state resources
//!
//! Resources are ECS singletons shared across systems. All of them are
//! mutated exclusively from the main schedule; the analysis worker only
//! ever receives a FEN snapshot and returns a plain value.
//!
//! - [`BoardState`] - the position, sole owner/mutator
//! - [`MatchClock`] - per-side countdown (optional)
//! - [`Selection`] - picked-up piece and its legal targets
//! - [`MoveHistory`] - SAN record for the HUD panel
//! - [`PendingPromotion`] - incomplete half-move awaiting a piece kind
//! - [`MatchOutcome`] - terminal result, set exactly once

pub mod board;
pub mod clock;
pub mod history;
pub mod outcome;
pub mod promotion;
pub mod selection;

pub use board::{display_destination, BoardState};
pub use clock::MatchClock;
pub use history::{MoveHistory, MoveRecord};
pub use outcome::MatchOutcome;
pub use promotion::PendingPromotion;
pub use selection::Selection;
