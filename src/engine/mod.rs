//! Engine module - UCI subprocess adapter
//!
//! Wraps an external UCI engine binary (Stockfish-compatible) behind a small
//! best-move API. The adapter fails soft: a missing or broken binary makes
//! the instance permanently unavailable and every call degrades to `None`
//! instead of crashing the match.

pub mod uci;

pub use uci::{EngineConfig, UciEngine};
