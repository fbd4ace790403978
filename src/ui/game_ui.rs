//! In-game HUD and end-of-game overlay
//!
//! A side panel next to the board with the clocks, the opponent label,
//! a thinking indicator, the move list, and the resign button. When the
//! match is decided a modal overlay announces the result.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use shakmaty::Color as SideColor;

use crate::core::AppState;
use crate::game::ai::AnalysisCoordinator;
use crate::game::config::{GameMode, MatchSetup};
use crate::game::events::ResignRequested;
use crate::game::resources::{BoardState, MatchClock, MatchOutcome, MoveHistory};
use crate::ui::styles::*;

pub fn hud_ui(
    mut contexts: EguiContexts,
    setup: Res<MatchSetup>,
    board: Res<BoardState>,
    clock: Res<MatchClock>,
    history: Res<MoveHistory>,
    outcome: Res<MatchOutcome>,
    coordinator: Res<AnalysisCoordinator>,
    mut resign: MessageWriter<ResignRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("hud_panel")
        .resizable(false)
        .exact_width(240.0)
        .frame(egui::Frame {
            fill: UiColors::BG_DARK,
            inner_margin: egui::Margin::same(16),
            ..Default::default()
        })
        .show(ctx, |ui| {
            // Opponent side on top, human side below, mirroring the board.
            let (top, bottom) = match setup.human_color {
                SideColor::White => (SideColor::Black, SideColor::White),
                SideColor::Black => (SideColor::White, SideColor::Black),
            };

            side_row(ui, &setup, &board, &clock, &coordinator, top);
            ui.separator();
            Layout::small_space(ui);

            ui.label(
                egui::RichText::new("Moves")
                    .size(16.0)
                    .color(UiColors::TEXT_SECONDARY)
                    .strong(),
            );
            egui::ScrollArea::vertical()
                .max_height(360.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for row in history.numbered_rows() {
                        ui.label(
                            egui::RichText::new(row)
                                .size(14.0)
                                .color(UiColors::TEXT_SECONDARY),
                        );
                    }
                });

            Layout::small_space(ui);
            ui.separator();
            side_row(ui, &setup, &board, &clock, &coordinator, bottom);

            Layout::item_space(ui);
            if !outcome.is_over() {
                let resigning = match setup.mode {
                    GameMode::HumanVsEngine => setup.human_color,
                    // In hot-seat the side to move throws in the towel.
                    GameMode::HumanVsHuman => board.turn(),
                };
                let button = egui::Button::new(
                    egui::RichText::new("Resign")
                        .size(16.0)
                        .color(UiColors::DANGER),
                )
                .min_size(egui::vec2(120.0, 32.0))
                .fill(UiColors::BG_MID);
                if ui.add(button).clicked() {
                    resign.write(ResignRequested { by: resigning });
                }
            }
        });
}

/// One clock row: side label, who drives it, remaining time
fn side_row(
    ui: &mut egui::Ui,
    setup: &MatchSetup,
    board: &BoardState,
    clock: &MatchClock,
    coordinator: &AnalysisCoordinator,
    side: SideColor,
) {
    let name = if setup.is_human(side) {
        if side == SideColor::White { "White" } else { "Black" }.to_string()
    } else {
        setup.difficulty.persona().to_string()
    };

    let is_turn = board.turn() == side;
    let color = if is_turn {
        UiColors::TEXT_PRIMARY
    } else {
        UiColors::TEXT_TERTIARY
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(name).size(18.0).color(color).strong());
        if !setup.is_human(side) {
            if coordinator.is_running() {
                ui.label(
                    egui::RichText::new("thinking...")
                        .size(13.0)
                        .color(UiColors::ACCENT_GOLD),
                );
            } else if !coordinator.engine_available() {
                // Subprocess gone; this side is playing random moves.
                ui.label(
                    egui::RichText::new("offline")
                        .size(13.0)
                        .color(UiColors::TEXT_TERTIARY),
                );
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(MatchClock::format(clock.remaining(side)))
                    .size(18.0)
                    .color(color)
                    .monospace(),
            );
        });
    });
}

/// Result overlay shown on top of the final position
pub fn game_over_ui(
    mut contexts: EguiContexts,
    outcome: Res<MatchOutcome>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("game_over_dim"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter()
                .rect_filled(screen_rect, 0.0, UiColors::BG_OVERLAY);
        });

    egui::Window::new("game_over")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(24.0)
                .stroke(egui::Stroke::new(2.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(outcome.message())
                        .size(24.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                Layout::item_space(ui);

                if menu_button(ui, "Play again").clicked() {
                    next_state.set(AppState::InGame);
                }
                Layout::small_space(ui);
                if menu_button(ui, "Main menu").clicked() {
                    next_state.set(AppState::MainMenu);
                }
                Layout::small_space(ui);
                if menu_button(ui, "Quit").clicked() {
                    std::process::exit(0);
                }
            });
        });
}
