//! Analysis spawn and poll systems
//!
//! Both run every frame while a match is live; between them they keep the
//! engine opponent moving without ever stalling the frame. The gates in
//! [`spawn_analysis`] are what decide "it is the engine's turn to think",
//! and [`poll_analysis`] is the only consumer of finished analyses.

use bevy::prelude::*;

use crate::game::ai::coordinator::{AnalysisCoordinator, AnalysisPoll, AnalysisRequest};
use crate::game::config::MatchSetup;
use crate::game::resources::{BoardState, MatchOutcome, MoveHistory, PendingPromotion};
use crate::game::systems::shared::apply_move;

/// Start an analysis when the engine owns the turn.
///
/// Gated on: vs-engine mode, engine's turn, match still undecided, no
/// promotion chooser open. Re-entry while an analysis runs is absorbed by
/// the coordinator's no-op, so this can fire every frame safely.
pub fn spawn_analysis(
    board: Res<BoardState>,
    setup: Res<MatchSetup>,
    outcome: Res<MatchOutcome>,
    pending: Res<PendingPromotion>,
    mut coordinator: ResMut<AnalysisCoordinator>,
) {
    if outcome.is_over() || pending.is_active() {
        return;
    }
    let Some(engine_color) = setup.engine_color() else {
        return;
    };
    if board.turn() != engine_color || coordinator.is_running() {
        return;
    }

    let request = AnalysisRequest {
        fen: board.fen(),
        movetime_ms: setup.difficulty.movetime_ms(),
        skill: setup.difficulty.skill(),
    };
    debug!(
        "[AI] requesting analysis, skill {} movetime {}ms",
        request.skill, request.movetime_ms
    );
    coordinator.start(request);
}

/// Collect a finished analysis and play the engine's move.
///
/// The reply is re-parsed against the position current *now*, not the one
/// the snapshot was taken from; anything that fails that check (or an
/// absent reply) falls back to a uniformly random legal move so the match
/// always continues.
pub fn poll_analysis(
    mut board: ResMut<BoardState>,
    mut history: ResMut<MoveHistory>,
    setup: Res<MatchSetup>,
    outcome: Res<MatchOutcome>,
    mut coordinator: ResMut<AnalysisCoordinator>,
) {
    let reply = match coordinator.poll() {
        AnalysisPoll::Idle | AnalysisPoll::Running => return,
        AnalysisPoll::Ready(reply) => reply,
    };

    if outcome.is_over() {
        debug!("[AI] match already decided, dropping engine reply");
        return;
    }
    let Some(engine_color) = setup.engine_color() else {
        return;
    };
    if board.turn() != engine_color {
        // The position moved on underneath the analysis; its answer no
        // longer applies.
        debug!("[AI] stale reply for a turn the engine no longer owns");
        return;
    }

    let chosen = reply
        .as_deref()
        .and_then(|token| board.parse_uci(token))
        .or_else(|| {
            warn!("[AI] no usable engine reply, picking a random legal move");
            board.random_legal_move()
        });

    match chosen {
        Some(m) => {
            if !apply_move(&mut board, &mut history, &m) {
                warn!("[AI] engine move failed final validation, skipped");
            }
        }
        None => debug!("[AI] no legal moves remain, nothing to play"),
    }
}
