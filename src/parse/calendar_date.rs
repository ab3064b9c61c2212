use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Swedish month abbreviations as they appear in panel headings, index 0 = January.
pub const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Long weekday names, index 0 = Monday (matches `chrono::Weekday::num_days_from_monday`).
const WEEKDAYS: [&str; 7] = [
    "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag",
];

/// A day-of-year without a year. Panel headings only carry "12 feb"; the year is
/// inferred at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    month: u32, // 1-12
    day: u32,   // 1-31, not validated against the month until `resolve`
}

impl CalendarDate {
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Parses a panel heading like "Ons 12 feb" or "12 feb". Headings that don't
    /// match the grammar yield `None` rather than an error.
    #[must_use]
    pub fn parse_heading(heading: &str) -> Option<Self> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"(\d+)\s+([a-zåäö]{3})").expect("heading regex should be valid")
        });
        let heading = heading.trim().to_lowercase();
        let captures = re.captures(&heading)?;
        let day: u32 = captures[1].parse().ok()?;
        let month_index = MONTH_ABBREVS.iter().position(|m| *m == &captures[2])?;
        u32::try_from(month_index)
            .ok()
            .map(|m| Self::new(m + 1, day))
    }

    /// Pins this month+day to a concrete year relative to `today`: the current
    /// year, except that a January date seen in December belongs to next year.
    /// Day/month combinations invalid in the inferred year yield `None`.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        let mut year = today.year();
        if self.month == 1 && today.month() == 12 {
            year += 1;
        }
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// Formats a resolved date the way the menu page's audience reads it: "onsdag, 12 feb".
#[must_use]
pub fn swedish_date_label(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTH_ABBREVS[date.month0() as usize];
    format!("{weekday}, {} {month}", date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heading_with_weekday() {
        let date = CalendarDate::parse_heading("Ons 12 Feb").unwrap();
        assert_eq!(date, CalendarDate::new(2, 12));
    }

    #[test]
    fn test_parse_heading_without_weekday() {
        let date = CalendarDate::parse_heading("  5 maj ").unwrap();
        assert_eq!(date, CalendarDate::new(5, 5));
    }

    #[test]
    fn test_parse_heading_rejects_unknown_month() {
        assert!(CalendarDate::parse_heading("12 foo").is_none());
        assert!(CalendarDate::parse_heading("Lovdag").is_none());
        assert!(CalendarDate::parse_heading("").is_none());
    }

    #[test]
    fn test_resolve_uses_current_year() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let resolved = CalendarDate::new(2, 12).resolve(today).unwrap();
        assert_eq!(resolved, NaiveDate::from_ymd_opt(2024, 2, 12).unwrap());
    }

    #[test]
    fn test_resolve_rolls_january_forward_in_december() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let resolved = CalendarDate::new(1, 7).resolve(today).unwrap();
        assert_eq!(resolved, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
    }

    #[test]
    fn test_resolve_keeps_december_in_january() {
        // Narrow heuristic on purpose: a December heading seen in January stays
        // in the current year.
        let today = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        let resolved = CalendarDate::new(12, 20).resolve(today).unwrap();
        assert_eq!(resolved, NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
    }

    #[test]
    fn test_resolve_invalid_day_is_absent() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert!(CalendarDate::new(2, 31).resolve(today).is_none());
    }

    #[test]
    fn test_swedish_date_label() {
        // 2025-02-12 is a Wednesday.
        let date = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
        assert_eq!(swedish_date_label(date), "onsdag, 12 feb");
        let date = NaiveDate::from_ymd_opt(2025, 2, 16).unwrap();
        assert_eq!(swedish_date_label(date), "söndag, 16 feb");
    }
}
