//! Board view: coordinate mapping, checkerboard sprites, piece glyphs

pub mod board;
pub mod coordinates;
pub mod pieces;

pub use board::BoardRenderPlugin;
