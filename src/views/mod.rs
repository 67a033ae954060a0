//! Screens. Each `render` borrows what it draws and returns the messages it raised.

pub mod appointments;
pub mod detail;
pub mod donations;
pub mod home;
pub mod pages;

use eframe::egui::{self, Color32, RichText};
use rust_decimal::Decimal;

pub const BRAND: Color32 = Color32::from_rgb(0, 119, 182);
pub const BRAND_BEIGE: Color32 = Color32::from_rgb(245, 245, 220);
pub const BRAND_SKY: Color32 = Color32::from_rgb(227, 244, 255);
pub const SUCCESS: Color32 = Color32::from_rgb(76, 175, 80);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

/// `R$ 12.50`
pub fn money(amount: Decimal) -> String {
    format!("R$ {:.2}", amount)
}

pub fn badge(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |inner| {
            inner.label(RichText::new(text).small().color(Color32::WHITE));
        });
}

pub fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).heading().strong());
    ui.add_space(4.0);
}

/// Big number over a caption, as used by the statistics rows.
pub fn stat_tile(ui: &mut egui::Ui, value: &str, caption: &str, color: Color32) {
    ui.group(|group| {
        group.vertical_centered(|cell| {
            cell.label(RichText::new(value).size(22.0).strong().color(color));
            cell.small(caption);
        });
    });
}

/// Centered placeholder for empty lists.
pub fn empty_state(ui: &mut egui::Ui, icon: &str, title: &str, hint: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|center| {
        center.label(RichText::new(icon).size(40.0).color(Color32::GRAY));
        center.label(title);
        if !hint.is_empty() {
            center.weak(hint);
        }
    });
    ui.add_space(24.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(dec!(550)), "R$ 550.00");
        assert_eq!(money(dec!(33.333)), "R$ 33.33");
    }
}
