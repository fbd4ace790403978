//! Per-frame ordering of the match systems
//!
//! The sets run strictly in declaration order within `Update`:
//!
//! 1. `Input` - human clicks and promotion choices mutate the position
//! 2. `Analysis` - engine spawn/poll, seeing this frame's human move
//! 3. `Clock` - time charged after moves so a mating move cannot flag
//! 4. `Outcome` - terminal detection over the final position of the frame
//! 5. `Visual` - sprites and highlights drawn from settled state
//!
//! `Input` through `Outcome` only run during an active match; `Visual`
//! also runs on the end screen so the final position stays on screen.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSystems {
    Input,
    Analysis,
    Clock,
    Outcome,
    Visual,
}
