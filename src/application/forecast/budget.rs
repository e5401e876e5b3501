use crate::domain::ml::FEATURE_NAMES;

/// Static description of one budget input widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetField {
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub default: f64,
    pub min: f64,
    pub step: f64,
}

pub const BUDGET_FIELDS: [BudgetField; 3] = [
    BudgetField {
        name: FEATURE_NAMES[0],
        label: "youtube",
        help: "Budget for youtube",
        default: 150.0,
        min: 0.0,
        step: 10.0,
    },
    BudgetField {
        name: FEATURE_NAMES[1],
        label: "📻 tiktok",
        help: "Budget for tiktok",
        default: 40.0,
        min: 0.0,
        step: 5.0,
    },
    BudgetField {
        name: FEATURE_NAMES[2],
        label: "📰 instagram",
        help: "Budget for instagram",
        default: 60.0,
        min: 0.0,
        step: 5.0,
    },
];

/// Current value of one budget input. Never below the field minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetInput {
    field: BudgetField,
    value: f64,
}

impl BudgetInput {
    pub fn new(field: BudgetField) -> Self {
        Self {
            field,
            value: field.default,
        }
    }

    pub fn field(&self) -> &BudgetField {
        &self.field
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        // f64::max ignores NaN, so NaN lands on the minimum
        self.value = value.max(self.field.min);
    }

    pub fn step_up(&mut self) {
        self.set(self.value + self.field.step);
    }

    pub fn step_down(&mut self) {
        self.set(self.value - self.field.step);
    }

    pub fn reset(&mut self) {
        self.value = self.field.default;
    }
}
