//! Promotion resolution
//!
//! The chooser UI only emits a [`PromotionChosen`] message; this system
//! completes the parked half-move with the chosen piece kind. A message
//! arriving with no promotion pending is dropped.

use bevy::prelude::*;

use crate::game::events::PromotionChosen;
use crate::game::resources::{BoardState, MoveHistory, PendingPromotion};
use crate::game::systems::shared::apply_move;

pub fn resolve_promotion(
    mut chosen: MessageReader<PromotionChosen>,
    mut pending: ResMut<PendingPromotion>,
    mut board: ResMut<BoardState>,
    mut history: ResMut<MoveHistory>,
) {
    for message in chosen.read() {
        let Some((from, to)) = pending.get() else {
            debug!("[GAME] promotion choice with nothing pending, ignored");
            continue;
        };

        match board.find_promotion(from, to, message.role) {
            Some(m) => {
                apply_move(&mut board, &mut history, &m);
            }
            None => warn!(
                "[GAME] pending promotion {}{} no longer legal, dropped",
                from, to
            ),
        }
        pending.clear();
    }
}
