//! Formatting helpers for presenting metrics.

/// Percentages are shown with one decimal, e.g. `42.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Durations are rounded half away from zero to whole seconds, e.g. `42s`.
pub fn format_seconds(value: f64) -> String {
    format!("{}s", value.round() as i64)
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Compact congestion score: at most two decimals, trailing zeros dropped.
pub fn format_score(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn format_ratio(part: usize, total: usize) -> String {
    format!("{part}/{total}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(80.0), "80.0%");
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(-12.06), "-12.1%");
    }

    #[test]
    fn seconds_round_to_nearest() {
        assert_eq!(format_seconds(41.5), "42s");
        assert_eq!(format_seconds(41.49), "41s");
        assert_eq!(format_seconds(0.0), "0s");
    }

    #[test]
    fn scores_drop_trailing_zeros() {
        assert_eq!(format_score(6.0), "6");
        assert_eq!(format_score(6.2), "6.2");
        assert_eq!(format_score(3.1000000000000005), "3.1");
        assert_eq!(format_score(2.456), "2.46");
        assert_eq!(format_score(-0.001), "0");
    }
}
