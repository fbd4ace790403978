//! Match configuration resources
//!
//! Filled in by the menu screens and read when a match starts. Explicitly
//! owned resources, no process-wide singletons.

use bevy::prelude::*;
use shakmaty::Color;

/// Who plays each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the mouse (hot-seat)
    HumanVsHuman,

    /// One human against the UCI engine
    HumanVsEngine,
}

/// Engine opponent strength, presented in the menu as three personas.
///
/// Skill maps onto the engine's `Skill Level` / `UCI_Elo` options; think
/// time is the `go movetime` budget per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Engine skill level in `0..=20`
    pub fn skill(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 3,
            Difficulty::Hard => 7,
        }
    }

    /// Time budget per analysis, in milliseconds
    pub fn movetime_ms(self) -> u64 {
        match self {
            Difficulty::Easy => 800,
            Difficulty::Medium => 2000,
            Difficulty::Hard => 3000,
        }
    }

    /// Opponent name shown in the HUD
    pub fn persona(self) -> &'static str {
        match self {
            Difficulty::Easy => "Bagre",
            Difficulty::Medium => "Joi",
            Difficulty::Hard => "Mr Chess",
        }
    }
}

/// Everything the menu flow collects before a match begins
#[derive(Resource, Debug, Clone)]
pub struct MatchSetup {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Which color the human plays in vs-engine games. In PvP both sides
    /// are human and this only controls board orientation (White at bottom).
    pub human_color: Color,
    /// Initial time per side in seconds; `None` is an untimed game
    pub time_control: Option<f32>,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Medium,
            human_color: Color::White,
            time_control: None,
        }
    }
}

impl MatchSetup {
    /// The engine's color, when there is an engine in the game
    pub fn engine_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsEngine => Some(self.human_color.other()),
        }
    }

    /// Whether `color` is moved by mouse input
    pub fn is_human(&self, color: Color) -> bool {
        self.engine_color() != Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_color_opposes_human() {
        let setup = MatchSetup {
            mode: GameMode::HumanVsEngine,
            human_color: Color::Black,
            ..default()
        };
        assert_eq!(setup.engine_color(), Some(Color::White));
        assert!(setup.is_human(Color::Black));
        assert!(!setup.is_human(Color::White));
    }

    #[test]
    fn test_pvp_has_no_engine_side() {
        let setup = MatchSetup::default();
        assert_eq!(setup.engine_color(), None);
        assert!(setup.is_human(Color::White));
        assert!(setup.is_human(Color::Black));
    }

    #[test]
    fn test_difficulty_skill_in_engine_range() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(d.skill() <= 20);
            assert!(d.movetime_ms() >= 50);
        }
    }
}
