//! Board position resource
//!
//! Owns the `shakmaty::Chess` position and is its sole mutator. All rule
//! questions (legality, check, game over, SAN) are delegated to shakmaty;
//! this resource only adds the conversions the UI and the engine bridge
//! need: click targets, UCI parsing, and wholesale position replacement.
//!
//! The analysis worker never sees this resource. It gets a FEN snapshot
//! string and returns a UCI token, which is re-parsed and re-validated here
//! against the position current at apply time. That re-validation is what
//! makes discarding a stale engine reply safe.

use bevy::prelude::*;
use rand::prelude::*;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{Chess, Color, EnPassantMode, File, Move, MoveList, Position, Role, Square};

/// Current match position, replaced wholesale on every applied move
#[derive(Resource, Debug, Clone, Default)]
pub struct BoardState {
    position: Chess,
}

impl BoardState {
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Side to move (the turn owner)
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Immutable snapshot for the analysis worker
    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// Display destinations of every legal move from `from`.
    ///
    /// Castling is shown as the king's destination square (g1/c1 style), not
    /// shakmaty's internal king-takes-rook encoding.
    pub fn targets_from(&self, from: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(from))
            .map(display_destination)
            .collect();
        targets.dedup();
        targets
    }

    /// Legal move matching a click pair, ignoring promotions (those go
    /// through the pending-promotion flow instead).
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .iter()
            .find(|m| m.from() == Some(from) && display_destination(m) == to && m.promotion().is_none())
            .cloned()
    }

    /// Legal promotion move for a click pair plus the chosen piece kind
    pub fn find_promotion(&self, from: Square, to: Square, role: Role) -> Option<Move> {
        self.legal_moves()
            .iter()
            .find(|m| m.from() == Some(from) && m.to() == to && m.promotion() == Some(role))
            .cloned()
    }

    /// Whether the click pair is a pawn reaching the farthest rank.
    ///
    /// True only when at least one legal promotion matches, so clicking an
    /// illegal pawn push never opens the chooser.
    pub fn is_promotion_candidate(&self, from: Square, to: Square) -> bool {
        self.legal_moves()
            .iter()
            .any(|m| m.from() == Some(from) && m.to() == to && m.promotion().is_some())
    }

    /// Apply a move after re-validating it against the current position.
    ///
    /// Returns the move's SAN on success; `None` leaves the position
    /// untouched. This is the single mutation point for the position.
    pub fn apply(&mut self, m: &Move) -> Option<String> {
        if !self.position.is_legal(m) {
            return None;
        }
        let san = SanPlus::from_move(self.position.clone(), m).to_string();
        match self.position.clone().play(m) {
            Ok(next) => {
                self.position = next;
                Some(san)
            }
            Err(_) => None,
        }
    }

    /// Parse a UCI token against the current position.
    ///
    /// `None` both for unreadable tokens and for moves that are not legal
    /// here, e.g. an engine reply computed against an outdated snapshot.
    pub fn parse_uci(&self, token: &str) -> Option<Move> {
        let uci = UciMove::from_ascii(token.as_bytes()).ok()?;
        let m = uci.to_move(&self.position).ok()?;
        self.position.is_legal(&m).then_some(m)
    }

    /// Uniformly random legal move, the last rung of the engine fallback
    /// chain. `None` only when the game is over.
    pub fn random_legal_move(&self) -> Option<Move> {
        let moves = self.legal_moves();
        moves.choose(&mut rand::rng()).cloned()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Piece occupying a square, if any
    pub fn piece_at(&self, sq: Square) -> Option<shakmaty::Piece> {
        self.position.board().piece_at(sq)
    }
}

/// Destination square as shown on the board.
///
/// For castling that is the king's landing square; for everything else it
/// is the move's `to()`.
pub fn display_destination(m: &Move) -> Square {
    match m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

/// Build a position from a FEN string
pub fn board_from_fen(fen: &str) -> Option<BoardState> {
    let parsed: Fen = fen.parse().ok()?;
    let position = parsed
        .into_position(shakmaty::CastlingMode::Standard)
        .ok()?;
    Some(BoardState { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_uci(board: &mut BoardState, token: &str) -> Option<String> {
        let m = board.parse_uci(token)?;
        board.apply(&m)
    }

    #[test]
    fn test_opening_move_flips_turn_and_yields_san() {
        let mut board = BoardState::default();
        assert_eq!(board.turn(), Color::White);

        let san = apply_uci(&mut board, "e2e4").expect("e2e4 is legal from the start");
        assert_eq!(san, "e4");
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_illegal_move_leaves_position_untouched() {
        let mut board = BoardState::default();
        let before = board.fen();

        // e2e5 is not a legal pawn move
        assert!(board.parse_uci("e2e5").is_none());
        assert_eq!(board.fen(), before);
    }

    #[test]
    fn test_stale_engine_reply_is_rejected_after_position_advanced() {
        let mut board = BoardState::default();

        // Engine reply computed against the start position...
        let stale_token = "e2e4";
        assert!(board.parse_uci(stale_token).is_some());

        // ...but the human already played the same pawn forward.
        apply_uci(&mut board, "e2e4").unwrap();

        // Re-validation against the current position must reject it.
        assert!(board.parse_uci(stale_token).is_none());
    }

    #[test]
    fn test_apply_revalidates_even_with_prebuilt_move() {
        let mut board = BoardState::default();
        let m = board.parse_uci("e2e4").unwrap();
        board.apply(&m).unwrap();

        // The same Move value is no longer legal in the new position.
        assert!(board.apply(&m).is_none());
    }

    #[test]
    fn test_promotion_candidate_detection() {
        let board = board_from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let a7 = Square::A7;
        let a8 = Square::A8;

        assert!(board.is_promotion_candidate(a7, a8));
        // find_move skips promotions on purpose
        assert!(board.find_move(a7, a8).is_none());
        assert!(board.find_promotion(a7, a8, Role::Queen).is_some());
        assert!(board.find_promotion(a7, a8, Role::King).is_none());
    }

    #[test]
    fn test_castling_shown_as_king_destination() {
        let board =
            board_from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let targets = board.targets_from(Square::E1);

        assert!(targets.contains(&Square::G1), "kingside castle shown on g1");
        assert!(targets.contains(&Square::C1), "queenside castle shown on c1");

        let castle = board.find_move(Square::E1, Square::G1).unwrap();
        assert!(matches!(castle, Move::Castle { .. }));
    }

    #[test]
    fn test_fools_mate_is_checkmate() {
        let mut board = BoardState::default();
        for token in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            apply_uci(&mut board, token).unwrap();
        }
        assert!(board.is_checkmate());
        assert!(board.is_game_over());
        assert!(board.random_legal_move().is_none());
    }

    #[test]
    fn test_random_fallback_is_legal() {
        let board = BoardState::default();
        for _ in 0..16 {
            let m = board.random_legal_move().expect("start position has moves");
            assert!(board.position().is_legal(&m));
        }
    }

    #[test]
    fn test_fen_snapshot_round_trips() {
        let mut board = BoardState::default();
        apply_uci(&mut board, "g1f3").unwrap();

        let snapshot = board.fen();
        let restored = board_from_fen(&snapshot).unwrap();
        assert_eq!(restored.fen(), snapshot);
        assert_eq!(restored.turn(), Color::Black);
    }
}
