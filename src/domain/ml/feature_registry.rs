/// Ordered list of feature names.
/// This order MUST match exactly the column order the regression was fitted with.
/// Any change here is a breaking change for every shipped artifact.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["youtube", "tiktok", "instagram"];

pub const FEATURE_COUNT: usize = 3;

/// One snapshot of the three advertising budgets, in training column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub youtube: f64,
    pub tiktok: f64,
    pub instagram: f64,
}

impl FeatureRecord {
    pub fn new(youtube: f64, tiktok: f64, instagram: f64) -> Self {
        Self {
            youtube,
            tiktok,
            instagram,
        }
    }

    /// Named columns in `FEATURE_NAMES` order.
    pub fn columns(&self) -> [(&'static str, f64); FEATURE_COUNT] {
        [
            (FEATURE_NAMES[0], self.youtube),
            (FEATURE_NAMES[1], self.tiktok),
            (FEATURE_NAMES[2], self.instagram),
        ]
    }

    pub fn to_f64_vector(&self) -> Vec<f64> {
        vec![self.youtube, self.tiktok, self.instagram]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_registry_order() {
        let record = FeatureRecord::new(150.0, 40.0, 60.0);
        let names: Vec<&str> = record.columns().iter().map(|(n, _)| *n).collect();

        assert_eq!(names, FEATURE_NAMES);
        assert_eq!(record.to_f64_vector(), vec![150.0, 40.0, 60.0]);
    }
}
