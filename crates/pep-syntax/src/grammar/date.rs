//! `DD-mmm-YYYY` dates (Created, Post-History).

use crate::diagnostic::{py_repr, Diagnostics};
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-([A-Za-z]{3})-(\d{4})$").unwrap());

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Dates may run this far past `today` before they count as future.
const FUTURE_GRACE_DAYS: i64 = 14;

/// Parse a strict `DD-mmm-YYYY` date. The month is matched case-insensitively.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let caps = RE_DATE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = caps[2].to_ascii_lowercase();
    let month = MONTHS.iter().position(|m| *m == month)? as u32 + 1;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn check_date(
    line: usize,
    text: &str,
    prefix: &str,
    today: NaiveDate,
    diags: &mut Diagnostics,
) {
    let Some(date) = parse_date(text) else {
        diags.push(
            line,
            format!("{} must be a 'DD-mmm-YYYY' date: {}", prefix, py_repr(text)),
        );
        return;
    };

    if date.year() < 1990 {
        diags.push(
            line,
            format!(
                "{} must not be before Python was invented: {}",
                prefix,
                py_repr(text)
            ),
        );
    }
    if date > today + Duration::days(FUTURE_GRACE_DAYS) {
        diags.push(
            line,
            format!("{} must not be in the future: {}", prefix, py_repr(text)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn check(text: &str) -> Vec<String> {
        let mut diags = Diagnostics::new();
        check_date(10, text, "Created", today(), &mut diags);
        diags.into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn accepts_valid_dates() {
        assert!(check("01-Jan-1990").is_empty());
        assert!(check("29-Feb-2024").is_empty());
        assert!(check("15-jun-2024").is_empty());
        assert_eq!(parse_date("05-Aug-2002"), NaiveDate::from_ymd_opt(2002, 8, 5));
    }

    #[test]
    fn rejects_single_digit_day() {
        assert_eq!(check("1-Jan-1989"), ["Created must be a 'DD-mmm-YYYY' date: '1-Jan-1989'"]);
    }

    #[test]
    fn rejects_impossible_or_malformed_dates() {
        for text in ["30-Feb-2020", "00-Jan-2020", "01-January-2020", "2020-01-01", "", "01-Foo-2020"] {
            assert_eq!(check(text).len(), 1, "{text}");
        }
    }

    #[test]
    fn rejects_dates_before_python() {
        assert_eq!(
            check("31-Dec-1989"),
            ["Created must not be before Python was invented: '31-Dec-1989'"]
        );
    }

    #[test]
    fn future_dates_have_a_grace_period() {
        assert!(check("15-Jun-2024").is_empty());
        assert_eq!(check("16-Jun-2024"), ["Created must not be in the future: '16-Jun-2024'"]);
    }
}
