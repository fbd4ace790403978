//! Piece glyphs
//!
//! Pieces are drawn as Unicode chess glyphs in `Text2d` entities, rebuilt
//! from scratch whenever the position or orientation changes. At 32 pieces
//! maximum the rebuild is cheap and saves any diffing bookkeeping.

use bevy::prelude::*;
use shakmaty::{Color as SideColor, Piece, Role, Square};

use crate::game::resources::BoardState;
use crate::rendering::board::{BoardEntity, BoardOrientation};
use crate::rendering::coordinates::{square_to_world, SQUARE_SIZE};

/// Marker for a piece glyph entity
#[derive(Component)]
pub struct PieceGlyph;

pub fn sync_pieces(
    mut commands: Commands,
    board: Res<BoardState>,
    orientation: Res<BoardOrientation>,
    glyphs: Query<Entity, With<PieceGlyph>>,
) {
    if !board.is_changed() && !orientation.is_changed() {
        return;
    }

    for entity in &glyphs {
        commands.entity(entity).despawn();
    }

    for square in Square::ALL {
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        let center = square_to_world(square, orientation.flipped);
        commands.spawn((
            Text2d::new(glyph(piece)),
            TextFont {
                font_size: SQUARE_SIZE * 0.8,
                ..default()
            },
            TextColor(Color::BLACK),
            Transform::from_translation(center.extend(1.0)),
            PieceGlyph,
            BoardEntity,
        ));
    }
}

/// Unicode chess glyph for a piece. Both sides use the filled glyph shapes
/// with their side's fill color baked into the character.
fn glyph(piece: Piece) -> &'static str {
    match (piece.color, piece.role) {
        (SideColor::White, Role::King) => "\u{2654}",
        (SideColor::White, Role::Queen) => "\u{2655}",
        (SideColor::White, Role::Rook) => "\u{2656}",
        (SideColor::White, Role::Bishop) => "\u{2657}",
        (SideColor::White, Role::Knight) => "\u{2658}",
        (SideColor::White, Role::Pawn) => "\u{2659}",
        (SideColor::Black, Role::King) => "\u{265A}",
        (SideColor::Black, Role::Queen) => "\u{265B}",
        (SideColor::Black, Role::Rook) => "\u{265C}",
        (SideColor::Black, Role::Bishop) => "\u{265D}",
        (SideColor::Black, Role::Knight) => "\u{265E}",
        (SideColor::Black, Role::Pawn) => "\u{265F}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_distinguish_sides() {
        let white_king = Piece {
            color: SideColor::White,
            role: Role::King,
        };
        let black_king = Piece {
            color: SideColor::Black,
            role: Role::King,
        };
        assert_ne!(glyph(white_king), glyph(black_king));
        assert_eq!(glyph(white_king), "♔");
        assert_eq!(glyph(black_king), "♚");
    }
}
