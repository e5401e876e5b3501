pub const METRIC_LABEL: &str = "Predicted Sales";
pub const METRIC_HELP: &str =
    "This is the estimated total sales based on the provided ad budgets.";
pub const SUCCESS_BANNER: &str = "Prediction was successful!";

/// `$1,234.50 K` style rendering of a sales estimate (thousands).
pub fn format_sales(value: f64) -> String {
    format!("${} K", group_thousands(value))
}

/// Two decimals with comma-separated thousands. Non-finite values pass through as-is.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and should not render as "-0.00"
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

pub fn failure_message(reason: &str) -> String {
    format!("An error occurred during prediction: {}", reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals_with_suffix() {
        assert_eq!(format_sales(25.4), "$25.40 K");
        assert_eq!(format_sales(0.0), "$0.00 K");
        assert_eq!(format_sales(19.999), "$20.00 K");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_sales(1234.5), "$1,234.50 K");
        assert_eq!(format_sales(999.994), "$999.99 K");
        assert_eq!(format_sales(1_000_000.0), "$1,000,000.00 K");
    }

    #[test]
    fn test_negative_estimates_keep_sign_after_dollar() {
        assert_eq!(format_sales(-5.0), "$-5.00 K");
        assert_eq!(format_sales(-12345.678), "$-12,345.68 K");
        assert_eq!(format_sales(-0.001), "$0.00 K");
    }
}
