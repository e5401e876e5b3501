use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Label over a large value, with the help text on hover
pub fn render_metric(ui: &mut egui::Ui, label: &str, value: &str, help: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(14.0)
                .color(DesignSystem::TEXT_SECONDARY),
        )
        .on_hover_text(help);
        ui.label(
            egui::RichText::new(value)
                .size(36.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

impl BannerKind {
    fn colors(self) -> (egui::Color32, egui::Color32) {
        match self {
            BannerKind::Success => (DesignSystem::SUCCESS, DesignSystem::SUCCESS_BG),
            BannerKind::Error => (DesignSystem::DANGER, DesignSystem::DANGER_BG),
            BannerKind::Info => (DesignSystem::INFO, DesignSystem::INFO_BG),
        }
    }
}

pub fn render_banner(ui: &mut egui::Ui, kind: BannerKind, text: &str) {
    let (fg, bg) = kind.colors();
    DesignSystem::banner_frame(bg).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(text).color(fg));
    });
}
