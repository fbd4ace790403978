//! Board sprites
//!
//! The checkerboard is 64 colored sprites spawned when a match becomes
//! visible and torn down when it leaves. Highlights (selection, legal
//! targets, last move) are repaints of the square sprites rather than
//! extra entities.

use bevy::prelude::*;
use shakmaty::{Color as SideColor, Square};

use crate::core::InMatch;
use crate::game::config::MatchSetup;
use crate::game::resources::{MoveHistory, Selection};
use crate::game::system_sets::GameSystems;
use crate::rendering::coordinates::{square_to_world, SQUARE_SIZE};
use crate::rendering::pieces::sync_pieces;

const LIGHT_SQUARE: Color = Color::srgb(0.94, 0.85, 0.71);
const DARK_SQUARE: Color = Color::srgb(0.71, 0.53, 0.39);
const SELECTED_TINT: Color = Color::srgb(0.96, 0.79, 0.25);
const TARGET_TINT: Color = Color::srgb(0.45, 0.78, 0.45);
const LAST_MOVE_TINT: Color = Color::srgb(0.85, 0.82, 0.40);

/// Which side sits at the bottom of the screen
#[derive(Resource, Debug, Default)]
pub struct BoardOrientation {
    pub flipped: bool,
}

/// Marker for a checkerboard square sprite
#[derive(Component)]
pub struct BoardSquare(pub Square);

/// Everything spawned for the board view
#[derive(Component)]
pub struct BoardEntity;

pub struct BoardRenderPlugin;

impl Plugin for BoardRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardOrientation>()
            .add_systems(OnEnter(InMatch), spawn_board)
            .add_systems(OnExit(InMatch), despawn_board)
            .add_systems(
                Update,
                (paint_squares, sync_pieces).in_set(GameSystems::Visual),
            );
    }
}

fn spawn_board(
    mut commands: Commands,
    setup: Res<MatchSetup>,
    mut orientation: ResMut<BoardOrientation>,
) {
    // White at the bottom unless the human chose Black.
    orientation.flipped = setup.human_color == SideColor::Black;

    for square in Square::ALL {
        let center = square_to_world(square, orientation.flipped);
        commands.spawn((
            Sprite {
                color: base_color(square),
                custom_size: Some(Vec2::splat(SQUARE_SIZE)),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            BoardSquare(square),
            BoardEntity,
        ));
    }
}

fn despawn_board(mut commands: Commands, entities: Query<Entity, With<BoardEntity>>) {
    for entity in &entities {
        commands.entity(entity).despawn();
    }
}

/// Repaint every square from the current selection and last move
fn paint_squares(
    selection: Res<Selection>,
    history: Res<MoveHistory>,
    mut squares: Query<(&BoardSquare, &mut Sprite)>,
) {
    let last_move = history.last().map(|r| (r.from, r.to));

    for (BoardSquare(square), mut sprite) in &mut squares {
        let square = *square;
        sprite.color = if selection.selected == Some(square) {
            SELECTED_TINT
        } else if selection.is_target(square) {
            TARGET_TINT
        } else if last_move.is_some_and(|(from, to)| square == from || square == to) {
            LAST_MOVE_TINT
        } else {
            base_color(square)
        };
    }
}

fn base_color(square: Square) -> Color {
    if (square.file() as u32 + square.rank() as u32) % 2 == 0 {
        DARK_SQUARE
    } else {
        LIGHT_SQUARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coloring_alternates() {
        // a1 is a dark square, h1 light, a8 light, h8 dark.
        assert_eq!(base_color(Square::A1), DARK_SQUARE);
        assert_eq!(base_color(Square::H1), LIGHT_SQUARE);
        assert_eq!(base_color(Square::A8), LIGHT_SQUARE);
        assert_eq!(base_color(Square::H8), DARK_SQUARE);
        assert_eq!(base_color(Square::E4), LIGHT_SQUARE);
    }
}
