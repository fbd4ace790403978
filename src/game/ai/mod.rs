//! Engine opponent
//!
//! [`coordinator`] owns the lifecycle of a background analysis;
//! [`systems`] connects it to the match loop: one system decides when the
//! engine should think, one collects the answer and plays it.

pub mod coordinator;
pub mod systems;

pub use coordinator::{AnalysisCoordinator, AnalysisPoll, AnalysisRequest};
pub use systems::{poll_analysis, spawn_analysis};
