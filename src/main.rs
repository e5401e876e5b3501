use sales_predictor::application::bootstrap;
use sales_predictor::config::Config;
use sales_predictor::infrastructure::init_tracing;
use sales_predictor::interfaces::design_system::DesignSystem;
use sales_predictor::interfaces::ui::{APP_TITLE, SalesPredictorApp};

use tracing::info;

fn main() -> anyhow::Result<()> {
    // Load Env (before starting anything)
    dotenvy::dotenv().ok();

    init_tracing();
    info!("Sales Predictor {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // The model is loaded exactly once here and handed to the window
    let availability = bootstrap::load_model(&config);
    let app = SalesPredictorApp::new(availability);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_title(format!("📈 {}", APP_TITLE)),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
