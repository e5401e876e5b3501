use crate::application::bootstrap::ModelAvailability;
use crate::application::forecast::display::{METRIC_HELP, METRIC_LABEL, SUCCESS_BANNER};
use crate::application::forecast::{BudgetInput, FormState, PredictionForm, Resolution};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{BannerKind, render_banner, render_metric};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::sidebar::render_sidebar;
use eframe::egui;

pub const APP_TITLE: &str = "Sales Predictor";

/// Top-level window. The form only exists when a predictor was loaded.
pub struct SalesPredictorApp {
    form: Option<PredictionForm>,
    unavailable: Option<String>,
}

impl SalesPredictorApp {
    pub fn new(availability: ModelAvailability) -> Self {
        Self {
            form: availability.predictor().map(PredictionForm::new),
            unavailable: availability.unavailable_message(),
        }
    }
}

impl eframe::App for SalesPredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("about_panel")
            .frame(DesignSystem::sidebar_frame())
            .default_width(280.0)
            .resizable(false)
            .show(ctx, render_sidebar);

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("📈 Advertising Sales Predictor")
                            .size(30.0)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label("Enter the advertising budget for each channel to predict the total sales.");
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    match (&mut self.form, &self.unavailable) {
                        (Some(form), _) => render_form(ui, form),
                        (None, Some(message)) => render_banner(ui, BannerKind::Error, message),
                        (None, None) => {}
                    }
                });
            });
    }
}

fn render_form(ui: &mut egui::Ui, form: &mut PredictionForm) {
    let mut submitted = false;

    Card::new().title("Advertising Budgets ($)").show(ui, |ui| {
        ui.columns(3, |columns| {
            for (column, input) in columns.iter_mut().zip(form.inputs_mut().iter_mut()) {
                render_budget_input(column, input);
            }
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        submitted = ui.button("Predict Sales").clicked();
    });

    // Only an explicit click predicts; edits alone leave the last result in place
    if submitted {
        form.submit();
    }

    if let FormState::Resolved(resolution) = form.state() {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.separator();
        ui.heading("Prediction Result");
        ui.add_space(DesignSystem::SPACING_SMALL);
        render_resolution(ui, resolution);
    }
}

fn render_budget_input(ui: &mut egui::Ui, input: &mut BudgetInput) {
    let field = *input.field();
    ui.label(field.label).on_hover_text(field.help);

    ui.horizontal(|ui| {
        let mut value = input.value();
        let response = ui.add(
            egui::DragValue::new(&mut value)
                .speed(field.step)
                .range(field.min..=f64::MAX)
                .max_decimals(2),
        );
        if response.changed() {
            input.set(value);
        }
        if ui.small_button("−").clicked() {
            input.step_down();
        }
        if ui.small_button("+").clicked() {
            input.step_up();
        }
    });
}

fn render_resolution(ui: &mut egui::Ui, resolution: &Resolution) {
    if let Some(value) = resolution.metric_value() {
        render_metric(ui, METRIC_LABEL, &value, METRIC_HELP);
        ui.add_space(DesignSystem::SPACING_SMALL);
        render_banner(ui, BannerKind::Success, SUCCESS_BANNER);
    }
    if let Some(message) = resolution.error_message() {
        render_banner(ui, BannerKind::Error, &message);
    }
}
