use chrono::{Datelike, NaiveDate};
use shared::aggregation::month_abbrev;

/// Get current date in YYYY-MM-DD format
pub fn current_date_iso() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Today as a calendar date for the aggregation helpers. Falls back to the
/// Unix epoch only if the browser hands back an impossible date.
pub fn current_date() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Format a YYYY-MM-DD date string for display (e.g., "Aug 29, 2025")
pub fn format_display_date(date_str: &str) -> String {
    match shared::parse_iso_date(date_str) {
        Ok(date) => format!(
            "{} {}, {}",
            month_abbrev(date.month()),
            date.day(),
            date.year()
        ),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2025-08-29"), "Aug 29, 2025");
        assert_eq!(format_display_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_format_display_date_passes_through_garbage() {
        assert_eq!(format_display_date("yesterday"), "yesterday");
        assert_eq!(format_display_date(""), "");
    }
}
