use eframe::egui;

/// Light form theme
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(250, 250, 252);
    pub const BG_SIDEBAR: egui::Color32 = egui::Color32::from_rgb(240, 242, 246); // #F0F2F6
    pub const BG_CARD: egui::Color32 = egui::Color32::WHITE;

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 75, 75); // #FF4B4B

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(33, 195, 84);
    pub const SUCCESS_BG: egui::Color32 = egui::Color32::from_rgb(223, 245, 230);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(200, 35, 51);
    pub const DANGER_BG: egui::Color32 = egui::Color32::from_rgb(255, 226, 226);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(0, 84, 163);
    pub const INFO_BG: egui::Color32 = egui::Color32::from_rgb(221, 235, 252);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(49, 51, 63);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(220, 222, 228);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Tinted full-width message box (success / error / info)
    pub fn banner_frame(bg: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(bg)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .inner_margin(egui::Margin::symmetric(12, 10))
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    pub fn sidebar_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_SIDEBAR)
            .inner_margin(egui::Margin::same(Self::SPACING_MEDIUM as i8))
    }
}
