//! UI helper components

use eframe::egui;

use asset_verify_core::{AssetEntry, AssetStatus, Confirmation};

use crate::state::Notice;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
const THUMBNAIL_SIZE: f32 = 72.0;

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

pub fn status_color(status: AssetStatus) -> egui::Color32 {
    match status {
        AssetStatus::CorrectlyAssigned => egui::Color32::from_rgb(60, 180, 90),
        AssetStatus::PendingConfirmation => egui::Color32::from_rgb(220, 180, 50),
    }
}

/// Rounded pill showing the inventory status
pub fn status_badge(ui: &mut egui::Ui, status: AssetStatus) {
    let color = status_color(status);
    egui::Frame::none()
        .fill(color.gamma_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.label()).small().color(color));
        });
}

/// One asset row: thumbnail, details, status badge and the two answer
/// buttons. Returns the answer the user clicked, if any.
pub fn asset_card(ui: &mut egui::Ui, entry: &AssetEntry, editable: bool) -> Option<Confirmation> {
    let mut picked = None;
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                thumbnail(ui, &entry.image_url);
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&entry.display_name).strong().size(15.0));
                        status_badge(ui, entry.status);
                    });
                    ui.label(
                        egui::RichText::new(format!("Serial: {}", entry.serial_number))
                            .monospace()
                            .small(),
                    );
                    ui.label(
                        egui::RichText::new(format!("Assigned: {}", entry.assigned_date))
                            .weak()
                            .small(),
                    );
                    ui.add_space(4.0);
                    picked = confirmation_buttons(ui, entry.confirmation, editable);
                });
            });
        });
    picked
}

fn thumbnail(ui: &mut egui::Ui, url: &str) {
    let size = egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    if url.is_empty() {
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "💻",
            egui::FontId::proportional(28.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }
    ui.add(
        egui::Image::new(url)
            .fit_to_exact_size(size)
            .rounding(6.0)
            .show_loading_spinner(true),
    );
}

/// "This is mine" / "Not my asset" toggle pair
pub fn confirmation_buttons(
    ui: &mut egui::Ui,
    current: Confirmation,
    editable: bool,
) -> Option<Confirmation> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for option in [Confirmation::ConfirmedMine, Confirmation::DeniedMine] {
            let selected = current == option;
            let text = match option {
                Confirmation::ConfirmedMine => format!("✔ {}", option.label()),
                _ => format!("✖ {}", option.label()),
            };
            let response = ui.add_enabled(editable, egui::SelectableLabel::new(selected, text));
            if response.clicked() && !selected {
                picked = Some(option);
            }
        }
    });
    picked
}

/// Error or info banner
pub fn notice_banner(ui: &mut egui::Ui, notice: &Notice) -> bool {
    let (text, color) = match notice {
        Notice::Error(msg) => (format!("⚠️ {msg}"), egui::Color32::from_rgb(220, 50, 50)),
        Notice::Info(msg) => (format!("ℹ {msg}"), ACCENT),
    };
    let mut dismissed = false;
    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(6.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text).color(color));
                if ui.small_button("✕").on_hover_text("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}

/// Loading spinner with label
pub fn loading_indicator(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(text);
    });
}
