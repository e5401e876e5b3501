//! Headless sales prediction
//!
//! Runs one submission of the prediction form without a window and prints
//! the same metric and banner the desktop app would show.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- --youtube 150 --tiktok 40 --instagram 60
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact to load (default: model-reg-67130700364.json)
//! - `MODEL_FORMAT` - `linear` or `smartcore` (default: linear)

use anyhow::Result;
use clap::Parser;
use sales_predictor::application::bootstrap;
use sales_predictor::application::forecast::display::{METRIC_LABEL, SUCCESS_BANNER};
use sales_predictor::application::forecast::PredictionForm;
use sales_predictor::config::{Config, ModelFormat};
use sales_predictor::infrastructure::init_tracing;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// youtube budget ($), negative values clamp to 0
    #[arg(long, default_value_t = 150.0, allow_negative_numbers = true)]
    youtube: f64,

    /// tiktok budget ($)
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    tiktok: f64,

    /// instagram budget ($)
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    instagram: f64,

    /// Model artifact path, overrides MODEL_PATH
    #[arg(long)]
    model: Option<PathBuf>,

    /// Artifact format (linear | smartcore), overrides MODEL_FORMAT
    #[arg(long)]
    format: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = args.model {
        config.model_path = path;
    }
    if let Some(format) = args.format.as_deref() {
        config.model_format = ModelFormat::from_str(format)?;
    }

    let availability = bootstrap::load_model(&config);
    if let Some(message) = availability.unavailable_message() {
        anyhow::bail!(message);
    }
    let Some(predictor) = availability.predictor() else {
        anyhow::bail!("No predictor available");
    };

    let mut form = PredictionForm::new(predictor);
    form.set_budgets(args.youtube, args.tiktok, args.instagram);
    info!(model = %form.predictor_name(), record = ?form.snapshot(), "Submitting budgets");

    let resolution = form.submit();
    if let Some(message) = resolution.error_message() {
        anyhow::bail!(message);
    }
    if let Some(value) = resolution.metric_value() {
        println!("{}: {}", METRIC_LABEL, value);
        println!("{}", SUCCESS_BANNER);
    }

    Ok(())
}
