//! Board/world coordinate mapping
//!
//! The board is centered on the origin, 8x8 squares of [`SQUARE_SIZE`]
//! world units. `flipped` turns the board so Black sits at the bottom;
//! both directions of the mapping honor it, so picking and drawing can
//! never disagree about where a square is.

use bevy::prelude::*;
use shakmaty::Square;

pub const SQUARE_SIZE: f32 = 80.0;
pub const BOARD_SPAN: f32 = SQUARE_SIZE * 8.0;

/// World-space center of a square
pub fn square_to_world(square: Square, flipped: bool) -> Vec2 {
    let (mut file, mut rank) = (square.file() as i32, square.rank() as i32);
    if flipped {
        file = 7 - file;
        rank = 7 - rank;
    }
    Vec2::new(
        (file as f32 - 3.5) * SQUARE_SIZE,
        (rank as f32 - 3.5) * SQUARE_SIZE,
    )
}

/// Square under a world-space point, `None` outside the board
pub fn world_to_square(point: Vec2, flipped: bool) -> Option<Square> {
    let file = (point.x / SQUARE_SIZE + 4.0).floor() as i32;
    let rank = (point.y / SQUARE_SIZE + 4.0).floor() as i32;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    let (file, rank) = if flipped {
        (7 - file, 7 - rank)
    } else {
        (file, rank)
    };
    Some(Square::from_coords(
        shakmaty::File::new(file as u32),
        shakmaty::Rank::new(rank as u32),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_board_corners() {
        let a1 = square_to_world(Square::A1, false);
        let h8 = square_to_world(Square::H8, false);
        assert_eq!(a1, Vec2::new(-3.5 * SQUARE_SIZE, -3.5 * SQUARE_SIZE));
        assert_eq!(h8, Vec2::new(3.5 * SQUARE_SIZE, 3.5 * SQUARE_SIZE));
    }

    #[test]
    fn test_flip_mirrors_both_axes() {
        assert_eq!(
            square_to_world(Square::A1, true),
            square_to_world(Square::H8, false)
        );
        assert_eq!(
            square_to_world(Square::E2, true),
            square_to_world(Square::D7, false)
        );
    }

    #[test]
    fn test_world_to_square_round_trips() {
        for flipped in [false, true] {
            for square in Square::ALL {
                let center = square_to_world(square, flipped);
                assert_eq!(world_to_square(center, flipped), Some(square));
            }
        }
    }

    #[test]
    fn test_points_off_board_are_none() {
        let outside = Vec2::new(BOARD_SPAN / 2.0 + 1.0, 0.0);
        assert_eq!(world_to_square(outside, false), None);
        assert_eq!(world_to_square(Vec2::new(0.0, -BOARD_SPAN), false), None);
    }
}
