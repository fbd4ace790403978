//! Helpers shared between the input, promotion, and analysis systems

use bevy::prelude::*;
use shakmaty::Move;

use crate::game::resources::{display_destination, BoardState, MoveHistory, MoveRecord};

/// Apply `m` to the board and append it to the history.
///
/// Returns `false` without side effects when the move fails re-validation
/// against the current position, which is how stale engine replies and
/// raced inputs get dropped.
pub fn apply_move(board: &mut BoardState, history: &mut MoveHistory, m: &Move) -> bool {
    let by = board.turn();
    let from = m.from().unwrap_or_else(|| m.to());
    let to = display_destination(m);

    let Some(san) = board.apply(m) else {
        return false;
    };

    info!("[GAME] {} plays {}", by, san);
    history.push(MoveRecord { san, from, to, by });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;

    #[test]
    fn test_apply_move_records_history() {
        let mut board = BoardState::default();
        let mut history = MoveHistory::default();

        let m = board.parse_uci("e2e4").unwrap();
        assert!(apply_move(&mut board, &mut history, &m));

        let record = history.last().unwrap();
        assert_eq!(record.san, "e4");
        assert_eq!(record.by, Color::White);
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_rejected_move_leaves_history_untouched() {
        let mut board = BoardState::default();
        let mut history = MoveHistory::default();

        let m = board.parse_uci("e2e4").unwrap();
        apply_move(&mut board, &mut history, &m);

        // Same Move value again: illegal now, nothing recorded.
        assert!(!apply_move(&mut board, &mut history, &m));
        assert_eq!(history.len(), 1);
    }
}
