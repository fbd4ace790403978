//! Application state and configuration tests

use bevy::prelude::ComputedStates;
use shakmaty::Color;
use xadrez::core::{AppState, InMatch, InMenus};
use xadrez::game::config::{Difficulty, GameMode, MatchSetup};

// ============================================================================
// State machine shape
// ============================================================================

#[test]
fn test_menu_flow_states_are_menus() {
    for state in [
        AppState::MainMenu,
        AppState::DifficultySelect,
        AppState::ColorSelect,
        AppState::TimeSelect,
    ] {
        assert_eq!(InMenus::compute(state), Some(InMenus));
        assert_eq!(InMatch::compute(state), None);
    }
}

#[test]
fn test_board_is_visible_through_the_end_screen() {
    // The board stays up under the result overlay.
    assert_eq!(InMatch::compute(AppState::InGame), Some(InMatch));
    assert_eq!(InMatch::compute(AppState::GameOver), Some(InMatch));
    assert_eq!(InMenus::compute(AppState::GameOver), None);
}

#[test]
fn test_default_state_is_main_menu() {
    assert_eq!(AppState::default(), AppState::MainMenu);
}

// ============================================================================
// Match setup
// ============================================================================

#[test]
fn test_setup_collected_by_menus_is_consistent() {
    let setup = MatchSetup {
        mode: GameMode::HumanVsEngine,
        difficulty: Difficulty::Hard,
        human_color: Color::White,
        time_control: Some(300.0),
    };

    assert_eq!(setup.engine_color(), Some(Color::Black));
    assert_eq!(setup.difficulty.persona(), "Mr Chess");
    assert_eq!(setup.difficulty.skill(), 7);
}

#[test]
fn test_personas_increase_in_strength() {
    assert!(Difficulty::Easy.skill() < Difficulty::Medium.skill());
    assert!(Difficulty::Medium.skill() < Difficulty::Hard.skill());
    assert!(Difficulty::Easy.movetime_ms() < Difficulty::Hard.movetime_ms());
}
