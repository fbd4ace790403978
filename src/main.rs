use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use xadrez::core::{AppState, InMatch, InMenus};
use xadrez::game::GamePlugin;
use xadrez::rendering::BoardRenderPlugin;
use xadrez::ui::UiPlugin;

const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 768;

fn main() {
    let window = Window {
        title: "Xadrez".into(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..Default::default()
        })
        // Application state
        .init_state::<AppState>()
        .add_computed_state::<InMenus>()
        .add_computed_state::<InMatch>()
        // Game systems
        .add_plugins(GamePlugin)
        .add_plugins(BoardRenderPlugin)
        .add_plugins(UiPlugin)
        // Startup systems
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
