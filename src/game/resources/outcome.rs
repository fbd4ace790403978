//! Match outcome tracking
//!
//! Starts as `Playing` and transitions to a terminal state exactly once.
//! Every attempted second transition is ignored, which is what lets
//! resignation, timeout, and checkmate race without corrupting the result.

use bevy::prelude::*;
use shakmaty::Color;

/// Terminal result of a match
#[derive(Resource, Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchOutcome {
    /// Match still in progress
    #[default]
    Playing,

    /// Checkmate; the winner is the side that delivered it
    Checkmate { winner: Color },

    /// The loser's flag fell
    Timeout { winner: Color },

    /// The loser resigned; always wins the race against any other ending
    Resignation { winner: Color },

    /// Draw: side to move has no legal moves and is not in check
    Stalemate,

    /// Draw: neither side can ever deliver mate
    InsufficientMaterial,
}

impl MatchOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchOutcome::Playing)
    }

    /// Record the result. First writer wins; later attempts are dropped.
    pub fn declare(&mut self, outcome: MatchOutcome) {
        if self.is_over() {
            debug!(
                "[GAME] outcome already {:?}, ignoring {:?}",
                self, outcome
            );
            return;
        }
        if outcome.is_over() {
            *self = outcome;
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            MatchOutcome::Checkmate { winner }
            | MatchOutcome::Timeout { winner }
            | MatchOutcome::Resignation { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Result line for the end screen
    pub fn message(&self) -> String {
        let side = |c: Color| if c == Color::White { "White" } else { "Black" };
        match self {
            MatchOutcome::Playing => "Game in progress".to_string(),
            MatchOutcome::Checkmate { winner } => {
                format!("Checkmate! {} wins.", side(*winner))
            }
            MatchOutcome::Timeout { winner } => format!("{} wins on time!", side(*winner)),
            MatchOutcome::Resignation { winner } => {
                format!("{} wins by resignation.", side(*winner))
            }
            MatchOutcome::Stalemate => "Draw by stalemate.".to_string(),
            MatchOutcome::InsufficientMaterial => "Draw by insufficient material.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_set_exactly_once() {
        let mut outcome = MatchOutcome::default();
        assert!(!outcome.is_over());

        outcome.declare(MatchOutcome::Resignation {
            winner: Color::Black,
        });
        assert!(outcome.is_over());

        // A later checkmate detection must not overwrite the resignation.
        outcome.declare(MatchOutcome::Checkmate {
            winner: Color::White,
        });
        assert_eq!(
            outcome,
            MatchOutcome::Resignation {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn test_declaring_playing_is_a_noop() {
        let mut outcome = MatchOutcome::default();
        outcome.declare(MatchOutcome::Playing);
        assert!(!outcome.is_over());
    }

    #[test]
    fn test_winner_mapping() {
        assert_eq!(
            MatchOutcome::Timeout {
                winner: Color::Black
            }
            .winner(),
            Some(Color::Black)
        );
        assert_eq!(MatchOutcome::Stalemate.winner(), None);
        assert_eq!(MatchOutcome::Playing.winner(), None);
    }
}
