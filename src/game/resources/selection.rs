//! Selection resource for the currently picked-up piece

use bevy::prelude::*;
use shakmaty::Square;

/// Currently selected square and the legal destinations from it
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<Square>,
    pub targets: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, targets: Vec<Square>) {
        self.selected = Some(square);
        self.targets = targets;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.targets.contains(&square)
    }
}
