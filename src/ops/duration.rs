use chrono::NaiveDate;

/// Average Gregorian month length in days
const DAYS_PER_MONTH: f64 = 30.437;

/// Human-readable span between two optional dates.
///
/// Missing either date → "Duration unknown". End before start → "Invalid
/// dates". Otherwise whole elapsed days are split into months (floored
/// against the average month length) and leftover days, omitting zero terms;
/// a same-day span falls through to "0 day(s)".
pub fn format_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let (Some(start), Some(end)) = (start, end) else {
        return "Duration unknown".to_string();
    };
    let days = (end - start).num_days();
    if days < 0 {
        return "Invalid dates".to_string();
    }

    let months = (days as f64 / DAYS_PER_MONTH).floor() as i64;
    let remaining = (days as f64 - months as f64 * DAYS_PER_MONTH).floor() as i64;

    let mut out = String::new();
    if months > 0 {
        out.push_str(&format!("{} month(s)", months));
    }
    if remaining > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{} day(s)", remaining));
    }
    if out.is_empty() {
        out = format!("{} day(s)", days);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<NaiveDate> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn same_day_is_zero_days() {
        assert_eq!(
            format_duration(date("2024-03-10"), date("2024-03-10")),
            "0 day(s)"
        );
    }

    #[test]
    fn month_and_days() {
        // 45 elapsed days: one average month plus floor(14.563) leftover days
        assert_eq!(
            format_duration(date("2024-01-01"), date("2024-02-15")),
            "1 month(s) 14 day(s)"
        );
    }

    #[test]
    fn days_only_below_one_month() {
        assert_eq!(
            format_duration(date("2024-01-01"), date("2024-01-31")),
            "30 day(s)"
        );
    }

    #[test]
    fn exact_month_omits_days() {
        // 31 days: one month, leftover floor(0.563) = 0
        assert_eq!(
            format_duration(date("2024-01-01"), date("2024-02-01")),
            "1 month(s)"
        );
    }

    #[test]
    fn reversed_range_is_invalid() {
        assert_eq!(
            format_duration(date("2024-02-15"), date("2024-01-01")),
            "Invalid dates"
        );
    }

    #[test]
    fn missing_dates_are_unknown() {
        assert_eq!(format_duration(None, date("2024-01-01")), "Duration unknown");
        assert_eq!(format_duration(date("2024-01-01"), None), "Duration unknown");
        assert_eq!(format_duration(None, None), "Duration unknown");
    }

    #[test]
    fn long_span() {
        // 730 days: months = floor(730/30.437) = 23, leftover = floor(29.949) = 29
        assert_eq!(
            format_duration(date("2022-01-01"), date("2024-01-01")),
            "23 month(s) 29 day(s)"
        );
    }
}
