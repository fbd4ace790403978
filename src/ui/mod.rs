//! egui screens: menus, in-game HUD, promotion chooser, end overlay

pub mod game_ui;
pub mod menus;
pub mod promotion_ui;
pub mod styles;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::core::{AppState, InMenus};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (
                menus::menu_ui.run_if(in_state(InMenus)),
                (game_ui::hud_ui, promotion_ui::promotion_ui)
                    .run_if(in_state(AppState::InGame)),
                game_ui::game_over_ui.run_if(in_state(AppState::GameOver)),
            ),
        );
    }
}
