pub mod budget;
pub mod display;
pub mod form;

pub use budget::{BUDGET_FIELDS, BudgetField, BudgetInput};
pub use form::{FormState, PredictionForm, Resolution};
