pub mod components;
pub mod design_system;
pub mod sidebar;
pub mod ui;

pub use ui::SalesPredictorApp;
