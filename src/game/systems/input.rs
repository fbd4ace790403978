//! Mouse move input
//!
//! Click handling is split into a pure decision function,
//! [`classify_click`], and a thin system that does the cursor-to-square
//! projection and carries out the decision. The split keeps the entire
//! selection state machine testable without windows or cameras.

use bevy::prelude::*;
use shakmaty::{Move, Square};

use crate::game::config::MatchSetup;
use crate::game::resources::{BoardState, MatchOutcome, MoveHistory, PendingPromotion, Selection};
use crate::game::systems::shared::apply_move;
use crate::rendering::board::BoardOrientation;
use crate::rendering::coordinates::world_to_square;

/// What a click on a square means given the current selection
#[derive(Debug)]
pub enum ClickAction {
    /// Pick up the piece on this square and show its targets
    Select { square: Square, targets: Vec<Square> },
    /// Complete the selected move
    Play(Move),
    /// Pawn reaching the last rank: park the half-move and ask for a piece
    AwaitPromotion { from: Square, to: Square },
    /// Drop the selection
    Clear,
    /// Nothing to do (empty square, opponent piece with nothing selected)
    Ignore,
}

/// Decide what a click on `square` does. Selection rules:
///
/// - no selection: clicking a piece of the side to move selects it
/// - selection active: a target square plays the move (or opens the
///   promotion chooser), another own piece re-selects, anything else
///   clears
pub fn classify_click(board: &BoardState, selection: &Selection, square: Square) -> ClickAction {
    if let Some(selected) = selection.selected {
        if square == selected {
            return ClickAction::Clear;
        }
        if selection.is_target(square) {
            if board.is_promotion_candidate(selected, square) {
                return ClickAction::AwaitPromotion {
                    from: selected,
                    to: square,
                };
            }
            if let Some(m) = board.find_move(selected, square) {
                return ClickAction::Play(m);
            }
            return ClickAction::Clear;
        }
    }

    let owns_piece = board
        .piece_at(square)
        .is_some_and(|piece| piece.color == board.turn());
    if owns_piece {
        let targets = board.targets_from(square);
        return ClickAction::Select { square, targets };
    }

    if selection.selected.is_some() {
        ClickAction::Clear
    } else {
        ClickAction::Ignore
    }
}

/// Translate left clicks into selection changes and moves.
///
/// Ignores input while the promotion chooser is open, after the match has
/// been decided, and whenever the side to move is not a human.
pub fn handle_board_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    orientation: Res<BoardOrientation>,
    setup: Res<MatchSetup>,
    outcome: Res<MatchOutcome>,
    mut pending: ResMut<PendingPromotion>,
    mut selection: ResMut<Selection>,
    mut board: ResMut<BoardState>,
    mut history: ResMut<MoveHistory>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if pending.is_active() || outcome.is_over() || !setup.is_human(board.turn()) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    let Some(square) = world_to_square(world, orientation.flipped) else {
        selection.clear();
        return;
    };

    match classify_click(&board, &selection, square) {
        ClickAction::Select { square, targets } => selection.select(square, targets),
        ClickAction::Play(m) => {
            apply_move(&mut board, &mut history, &m);
            selection.clear();
        }
        ClickAction::AwaitPromotion { from, to } => {
            pending.start(from, to);
            selection.clear();
        }
        ClickAction::Clear => selection.clear(),
        ClickAction::Ignore => {}
    }
}
