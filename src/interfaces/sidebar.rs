use crate::interfaces::components::metrics::{BannerKind, render_banner};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub const ABOUT_HEADER: &str = "About This App";
pub const ABOUT_INFO: &str = "This application uses a Linear Regression model to predict sales \
    based on advertising spending. The model was trained on the 'advertising.csv' dataset.";
pub const FEATURE_NOTE: &str = "The model was trained with features named `youtube`, `tiktok`, \
    and `instagram`. The input fields correspond to these original features.";

/// Static, non-interactive info panel
pub fn render_sidebar(ui: &mut egui::Ui) {
    ui.heading(ABOUT_HEADER);
    ui.add_space(DesignSystem::SPACING_SMALL);

    render_banner(ui, BannerKind::Info, ABOUT_INFO);
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Note:").strong());
        ui.label(FEATURE_NOTE);
    });

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.label(
            egui::RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .small()
                .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}
