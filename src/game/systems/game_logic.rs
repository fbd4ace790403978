//! Rules outcomes, clock, resignation, and the end-of-match transition

use bevy::prelude::*;

use crate::core::AppState;
use crate::game::ai::AnalysisCoordinator;
use crate::game::config::{GameMode, MatchSetup};
use crate::game::events::ResignRequested;
use crate::game::resources::{BoardState, MatchClock, MatchOutcome, Selection};

/// Declare outcomes the rules decide: checkmate, stalemate, dead position.
///
/// Runs after every system that can change the position; `declare` keeps
/// whatever terminal state got there first.
pub fn detect_rules_outcome(board: Res<BoardState>, mut outcome: ResMut<MatchOutcome>) {
    if outcome.is_over() || !board.is_game_over() {
        return;
    }

    if board.is_checkmate() {
        // The side to move is mated; the mover of the last half-move wins.
        outcome.declare(MatchOutcome::Checkmate {
            winner: board.turn().other(),
        });
    } else if board.is_stalemate() {
        outcome.declare(MatchOutcome::Stalemate);
    } else if board.is_insufficient_material() {
        outcome.declare(MatchOutcome::InsufficientMaterial);
    }
}

/// Whether clock time should not pass this frame.
///
/// While the engine thinks, both clocks hold: the engine's think time is
/// budgeted by `movetime`, not by the match clock, and the human should
/// not gain time from staring at the engine's turn either.
pub fn clock_paused_for_thinking(mode: GameMode, engine_thinking: bool) -> bool {
    mode == GameMode::HumanVsEngine && engine_thinking
}

/// Charge frame time to the turn owner and catch flag falls
pub fn tick_clock(
    time: Res<Time>,
    board: Res<BoardState>,
    setup: Res<MatchSetup>,
    coordinator: Res<AnalysisCoordinator>,
    mut clock: ResMut<MatchClock>,
    mut outcome: ResMut<MatchOutcome>,
) {
    if outcome.is_over() {
        return;
    }
    if clock_paused_for_thinking(setup.mode, coordinator.is_running()) {
        return;
    }

    if let Some(winner) = clock.tick(board.turn(), time.delta_secs()) {
        info!("[GAME] flag fell, {} wins on time", winner);
        outcome.declare(MatchOutcome::Timeout { winner });
    }
}

/// Resign button: the other side wins immediately
pub fn handle_resignation(
    mut requests: MessageReader<ResignRequested>,
    mut outcome: ResMut<MatchOutcome>,
) {
    for request in requests.read() {
        info!("[GAME] {} resigns", request.by);
        outcome.declare(MatchOutcome::Resignation {
            winner: request.by.other(),
        });
    }
}

/// Leave `InGame` once the outcome is terminal.
///
/// Also freezes the clock and drops any live selection so the end screen
/// shows a quiet board.
pub fn transition_on_outcome(
    outcome: Res<MatchOutcome>,
    mut clock: ResMut<MatchClock>,
    mut selection: ResMut<Selection>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !outcome.is_over() {
        return;
    }

    clock.running = false;
    selection.clear();
    info!("[GAME] match over: {}", outcome.message());
    next_state.set(AppState::GameOver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::board::board_from_fen;
    use shakmaty::Color;

    #[test]
    fn test_checkmate_winner_is_the_mating_side() {
        // Fool's mate final position, White to move and mated.
        let board = board_from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        assert!(board.is_checkmate());

        let mut outcome = MatchOutcome::default();
        if board.is_checkmate() {
            outcome.declare(MatchOutcome::Checkmate {
                winner: board.turn().other(),
            });
        }
        assert_eq!(
            outcome,
            MatchOutcome::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn test_clock_pause_is_symmetric_and_engine_only() {
        assert!(clock_paused_for_thinking(GameMode::HumanVsEngine, true));
        assert!(!clock_paused_for_thinking(GameMode::HumanVsEngine, false));
        // PvP has no engine, nothing to pause for.
        assert!(!clock_paused_for_thinking(GameMode::HumanVsHuman, true));
        assert!(!clock_paused_for_thinking(GameMode::HumanVsHuman, false));
    }
}
