//! UI palette and spacing helpers
//!
//! One place for the colors and gaps the egui screens share, so the menus
//! and the in-game HUD stay visually consistent.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Secondary background (windows, cards)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    /// Overlay background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    /// Primary accent (gold)
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Error/danger color (resign button, flag fall)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (body text)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);

    /// Tertiary text (hints)
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);

    /// Panel border stroke
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(70, 70, 80);
}

/// Spacing helpers shared by every screen
pub struct Layout;

impl Layout {
    pub fn small_space(ui: &mut egui::Ui) {
        ui.add_space(8.0);
    }

    pub fn item_space(ui: &mut egui::Ui) {
        ui.add_space(16.0);
    }

    pub fn section_space(ui: &mut egui::Ui) {
        ui.add_space(32.0);
    }
}

/// A full-width menu button with the shared look
pub fn menu_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(label)
                .size(20.0)
                .color(UiColors::TEXT_PRIMARY),
        )
        .min_size(egui::vec2(260.0, 44.0))
        .fill(UiColors::BG_MID),
    )
}

/// A screen heading
pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(28.0)
            .color(UiColors::ACCENT_GOLD)
            .strong(),
    );
}
