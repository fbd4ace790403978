use bevy::prelude::*;
use shakmaty::{Color, Role};

/// Player picked a piece in the promotion chooser
#[derive(Debug, Clone, Copy, Message)]
pub struct PromotionChosen {
    pub role: Role,
}

/// Player hit the resign button
#[derive(Debug, Clone, Copy, Message)]
pub struct ResignRequested {
    pub by: Color,
}
