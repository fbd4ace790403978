//! Pending promotion slot
//!
//! A pawn move to the farthest rank parks here instead of mutating the
//! position; the half-move stays incomplete until the player picks a piece
//! kind. While the slot is occupied all other board input is ignored.

use bevy::prelude::*;
use shakmaty::Square;

#[derive(Resource, Debug, Default)]
pub struct PendingPromotion {
    slot: Option<(Square, Square)>,
}

impl PendingPromotion {
    pub fn start(&mut self, from: Square, to: Square) {
        self.slot = Some((from, to));
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn get(&self) -> Option<(Square, Square)> {
        self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lifecycle() {
        let mut pending = PendingPromotion::default();
        assert!(!pending.is_active());

        pending.start(Square::A7, Square::A8);
        assert!(pending.is_active());
        assert_eq!(pending.get(), Some((Square::A7, Square::A8)));

        pending.clear();
        assert!(!pending.is_active());
        assert_eq!(pending.get(), None);
    }
}
