//! Pawn promotion chooser
//!
//! Modal dialog shown while a promotion half-move is parked. Only emits
//! the chosen piece kind; completing the move is the promotion system's
//! job.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use shakmaty::Role;

use crate::game::events::PromotionChosen;
use crate::game::resources::PendingPromotion;
use crate::ui::styles::*;

pub fn promotion_ui(
    mut contexts: EguiContexts,
    pending: Res<PendingPromotion>,
    mut chosen: MessageWriter<PromotionChosen>,
) {
    if !pending.is_active() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("promotion_dim"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter()
                .rect_filled(screen_rect, 0.0, UiColors::BG_OVERLAY);
        });

    egui::Window::new("promote_pawn")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(20.0)
                .stroke(egui::Stroke::new(2.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Promote to")
                        .size(20.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                Layout::item_space(ui);

                ui.horizontal(|ui| {
                    let options = [
                        (Role::Queen, "\u{2655}"),
                        (Role::Rook, "\u{2656}"),
                        (Role::Bishop, "\u{2657}"),
                        (Role::Knight, "\u{2658}"),
                    ];
                    for (role, symbol) in options {
                        let button = egui::Button::new(
                            egui::RichText::new(symbol)
                                .size(48.0)
                                .color(UiColors::TEXT_PRIMARY),
                        )
                        .min_size(egui::vec2(70.0, 70.0))
                        .fill(UiColors::BG_DARK);

                        if ui.add(button).clicked() {
                            chosen.write(PromotionChosen { role });
                        }
                        ui.add_space(5.0);
                    }
                });
            });
        });
}
