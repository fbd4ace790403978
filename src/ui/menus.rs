//! Menu screens
//!
//! One egui system renders whichever menu screen the application state
//! says is current. The screens collect the [`MatchSetup`] step by step:
//! mode, then (vs engine) difficulty and color, then time control, and
//! finally hand off to `InGame`.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use shakmaty::Color as SideColor;

use crate::core::AppState;
use crate::game::config::{Difficulty, GameMode, MatchSetup};
use crate::ui::styles::*;

/// Render the menu screen for the current state
pub fn menu_ui(
    mut contexts: EguiContexts,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut setup: ResMut<MatchSetup>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame {
            fill: UiColors::BG_DARK,
            ..Default::default()
        })
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                Layout::section_space(ui);
                match state.get() {
                    AppState::MainMenu => ui_main(ui, &mut next_state, &mut setup),
                    AppState::DifficultySelect => {
                        ui_difficulty(ui, &mut next_state, &mut setup)
                    }
                    AppState::ColorSelect => ui_color(ui, &mut next_state, &mut setup),
                    AppState::TimeSelect => ui_time(ui, &mut next_state, &mut setup),
                    // InGame and GameOver are drawn by the HUD systems.
                    _ => {}
                }
            });
        });
}

fn ui_main(ui: &mut egui::Ui, next_state: &mut NextState<AppState>, setup: &mut MatchSetup) {
    heading(ui, "XADREZ");
    Layout::section_space(ui);

    if menu_button(ui, "Player vs Player").clicked() {
        setup.mode = GameMode::HumanVsHuman;
        setup.human_color = SideColor::White;
        // PvP skips the engine screens.
        next_state.set(AppState::TimeSelect);
    }
    Layout::small_space(ui);

    if menu_button(ui, "Player vs Computer").clicked() {
        setup.mode = GameMode::HumanVsEngine;
        next_state.set(AppState::DifficultySelect);
    }
    Layout::item_space(ui);

    if menu_button(ui, "Quit").clicked() {
        std::process::exit(0);
    }
}

fn ui_difficulty(ui: &mut egui::Ui, next_state: &mut NextState<AppState>, setup: &mut MatchSetup) {
    heading(ui, "Choose your opponent");
    Layout::section_space(ui);

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        if menu_button(ui, difficulty.persona()).clicked() {
            setup.difficulty = difficulty;
            next_state.set(AppState::ColorSelect);
        }
        Layout::small_space(ui);
    }

    Layout::item_space(ui);
    back_button(ui, next_state, AppState::MainMenu);
}

fn ui_color(ui: &mut egui::Ui, next_state: &mut NextState<AppState>, setup: &mut MatchSetup) {
    heading(ui, "Play as");
    Layout::section_space(ui);

    if menu_button(ui, "White").clicked() {
        setup.human_color = SideColor::White;
        next_state.set(AppState::TimeSelect);
    }
    Layout::small_space(ui);

    if menu_button(ui, "Black").clicked() {
        setup.human_color = SideColor::Black;
        next_state.set(AppState::TimeSelect);
    }

    Layout::item_space(ui);
    back_button(ui, next_state, AppState::DifficultySelect);
}

fn ui_time(ui: &mut egui::Ui, next_state: &mut NextState<AppState>, setup: &mut MatchSetup) {
    heading(ui, "Time control");
    Layout::section_space(ui);

    let choices: [(&str, Option<f32>); 4] = [
        ("1 minute", Some(60.0)),
        ("5 minutes", Some(300.0)),
        ("10 minutes", Some(600.0)),
        ("No clock", None),
    ];
    for (label, control) in choices {
        if menu_button(ui, label).clicked() {
            setup.time_control = control;
            next_state.set(AppState::InGame);
        }
        Layout::small_space(ui);
    }

    Layout::item_space(ui);
    let back_target = match setup.mode {
        GameMode::HumanVsHuman => AppState::MainMenu,
        GameMode::HumanVsEngine => AppState::ColorSelect,
    };
    back_button(ui, next_state, back_target);
}

fn back_button(ui: &mut egui::Ui, next_state: &mut NextState<AppState>, target: AppState) {
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new("< Back")
                .size(16.0)
                .color(UiColors::TEXT_TERTIARY),
        )
        .sense(egui::Sense::click()),
    );
    if response.clicked() {
        next_state.set(target);
    }
}
