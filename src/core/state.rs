//! Application state flow
//!
//! ```text
//! [MainMenu] → [DifficultySelect] → [ColorSelect] → [TimeSelect] → [InGame] → [GameOver]
//!      │                                                  ▲                       │
//!      └─────────────── (PvP skips opponent setup) ───────┘          (play again) ┘
//! ```
//!
//! PvP games go straight from the main menu to time selection; games against
//! the engine pick a difficulty and a color first. `GameOver` keeps the final
//! board on screen under the result overlay.

use bevy::prelude::*;

/// Primary state controlling the menu flow and match lifecycle
#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States)]
pub enum AppState {
    /// Opening screen: choose player-vs-player or player-vs-engine
    #[default]
    MainMenu,

    /// Pick the engine opponent (vs-engine games only)
    DifficultySelect,

    /// Pick which color the human plays (vs-engine games only)
    ColorSelect,

    /// Pick the time control (both modes)
    TimeSelect,

    /// Active match
    InGame,

    /// Match finished; result overlay shown over the final position
    GameOver,
}

/// Computed state active on every menu screen
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct InMenus;

impl ComputedStates for InMenus {
    type SourceStates = AppState;

    fn compute(sources: AppState) -> Option<Self> {
        match sources {
            AppState::MainMenu
            | AppState::DifficultySelect
            | AppState::ColorSelect
            | AppState::TimeSelect => Some(Self),
            _ => None,
        }
    }
}

/// Computed state active while a match is on screen (playing or finished)
///
/// Board entities are spawned on entering this state and despawned on
/// leaving it, so the final position stays visible on the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct InMatch;

impl ComputedStates for InMatch {
    type SourceStates = AppState;

    fn compute(sources: AppState) -> Option<Self> {
        match sources {
            AppState::InGame | AppState::GameOver => Some(Self),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_states_compute_in_menus() {
        assert_eq!(InMenus::compute(AppState::MainMenu), Some(InMenus));
        assert_eq!(InMenus::compute(AppState::DifficultySelect), Some(InMenus));
        assert_eq!(InMenus::compute(AppState::ColorSelect), Some(InMenus));
        assert_eq!(InMenus::compute(AppState::TimeSelect), Some(InMenus));
        assert_eq!(InMenus::compute(AppState::InGame), None);
        assert_eq!(InMenus::compute(AppState::GameOver), None);
    }

    #[test]
    fn test_match_states_compute_in_match() {
        assert_eq!(InMatch::compute(AppState::InGame), Some(InMatch));
        assert_eq!(InMatch::compute(AppState::GameOver), Some(InMatch));
        assert_eq!(InMatch::compute(AppState::MainMenu), None);
        assert_eq!(InMatch::compute(AppState::TimeSelect), None);
    }
}
