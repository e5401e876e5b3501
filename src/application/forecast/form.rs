//! Prediction form controller
//!
//! Holds the three budget inputs and the injected predictor. Editing inputs
//! never triggers a prediction; only [`PredictionForm::submit`] does, and it
//! resolves synchronously into either a formatted estimate or an error message.

use super::budget::{BUDGET_FIELDS, BudgetInput};
use super::display::{failure_message, format_sales};
use crate::application::ml::SalesPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::FeatureRecord;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Success { sales: f64 },
    Failure { error: PredictionError },
}

impl Resolution {
    /// Text for the metric widget, only on success.
    pub fn metric_value(&self) -> Option<String> {
        match self {
            Resolution::Success { sales } => Some(format_sales(*sales)),
            Resolution::Failure { .. } => None,
        }
    }

    /// Text for the error banner, only on failure.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Resolution::Success { .. } => None,
            Resolution::Failure { error } => Some(failure_message(&error.to_string())),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resolution::Success { .. })
    }
}

/// Idle until the first submit; afterwards keeps the latest resolution on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Resolved(Resolution),
}

pub struct PredictionForm {
    inputs: [BudgetInput; 3],
    predictor: Arc<dyn SalesPredictor>,
    state: FormState,
    submissions: u64,
}

impl PredictionForm {
    pub fn new(predictor: Arc<dyn SalesPredictor>) -> Self {
        Self {
            inputs: BUDGET_FIELDS.map(BudgetInput::new),
            predictor,
            state: FormState::Idle,
            submissions: 0,
        }
    }

    pub fn inputs(&self) -> &[BudgetInput; 3] {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut [BudgetInput; 3] {
        &mut self.inputs
    }

    pub fn set_budgets(&mut self, youtube: f64, tiktok: f64, instagram: f64) {
        self.inputs[0].set(youtube);
        self.inputs[1].set(tiktok);
        self.inputs[2].set(instagram);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    /// Current input values as the record the predictor will see.
    pub fn snapshot(&self) -> FeatureRecord {
        FeatureRecord::new(
            self.inputs[0].value(),
            self.inputs[1].value(),
            self.inputs[2].value(),
        )
    }

    pub fn submit(&mut self) -> Resolution {
        let record = self.snapshot();
        self.submissions += 1;
        debug!(submission = self.submissions, ?record, "Prediction requested");

        let resolution = match self.predictor.predict(&record) {
            Ok(sales) => Resolution::Success { sales },
            Err(error) => {
                error!(model = %self.predictor.name(), "Prediction failed: {}", error);
                Resolution::Failure { error }
            }
        };

        self.state = FormState::Resolved(resolution.clone());
        resolution
    }
}
