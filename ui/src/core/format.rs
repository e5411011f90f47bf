//! Formatting helpers for presenting amounts, shares and dates.

use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

/// 2^64: cent counts at or above this no longer fit a `u64`.
const MAX_EXACT_CENTS: f64 = 18_446_744_073_709_551_616.0;

/// US-dollar display with thousands separators: `$1,234.50`, `-$12.00`.
///
/// Rounds half away from zero to the cent. Values that round to zero drop
/// their sign (`-0.001` shows `$0.00`).
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let scaled = (amount.abs() * 100.0).round();
    let (whole, frac) = if scaled < MAX_EXACT_CENTS {
        let cents = scaled as u64;
        ((cents / 100).to_string(), format!("{:02}", cents % 100))
    } else {
        // Floats this large have no fractional dollars left.
        (format!("{:.0}", amount.abs().trunc()), "00".to_string())
    };
    let sign = if amount < 0.0 && scaled > 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac}", group_thousands(&whole))
}

/// Percentage with one decimal place. `value` is already scaled to 0–100.
/// Ties round up (`1.25` → `1.3%`).
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        let rounded = (value * 10.0).round() / 10.0;
        format!("{rounded:.1}%")
    } else {
        "—".to_string()
    }
}

/// `Jan 5, 2025` from either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp.
/// Unparseable input is echoed back unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = Date::parse(trimmed, &format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| OffsetDateTime::parse(trimmed, &Rfc3339).ok().map(|ts| ts.date()));

    match date {
        Some(date) => date
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| trimmed.to_string()),
        None => trimmed.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_rounds() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(-2.5e17), "-$250,000,000,000,000,000.00");
        assert_eq!(format_currency(1.5e17), "$150,000,000,000,000,000.00");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(25.0), "25.0%");
        assert_eq!(format_percent(100.0 / 3.0), "33.3%");
        assert_eq!(format_percent(f64::NAN), "—");
    }

    #[test]
    fn percent_ties_round_up() {
        assert_eq!(format_percent(1.25), "1.3%");
        assert_eq!(format_percent(0.25), "0.3%");
        assert_eq!(format_percent(2.25), "2.3%");
        assert_eq!(format_percent(12.34), "12.3%");
    }

    #[test]
    fn dates_render_short_month() {
        assert_eq!(format_date("2025-01-05"), "Jan 5, 2025");
        assert_eq!(format_date("2024-12-31T23:10:00Z"), "Dec 31, 2024");
        assert_eq!(format_date("someday"), "someday");
    }
}
