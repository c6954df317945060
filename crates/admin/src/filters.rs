//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

use inventory_pro_core::group_thousands;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a decimal amount as dollars with separators, e.g. `$14,530.00`.
///
/// Usage in templates: `{{ stats.total_value|dollars }}`
#[askama::filter_fn]
pub fn dollars(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_dollars(&value.to_string()))
}

/// Inserts thousands separators into a number.
///
/// Usage in templates: `{{ stats.total_items|grouped }}`
#[askama::filter_fn]
pub fn grouped(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(group_thousands(&value.to_string()))
}

fn format_dollars(raw: &str) -> String {
    raw.parse::<Decimal>().map_or_else(
        |_| format!("${raw}"),
        |amount| format!("${}", group_thousands(&format!("{:.2}", amount.round_dp(2)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars("14530"), "$14,530.00");
        assert_eq!(format_dollars("6750.00"), "$6,750.00");
        assert_eq!(format_dollars("24.5"), "$24.50");
        assert_eq!(format_dollars("n/a"), "$n/a");
    }
}
