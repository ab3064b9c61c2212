use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::parse::{swedish_date_label, DayPanel};

/// From this hour on, the interesting menu is tomorrow's.
pub const NEXT_DAY_HOUR: u32 = 18;

/// Placeholder when a chosen panel carries no dish text.
pub const MISSING_DISH: &str = "Ingen matsedel";

const UPCOMING_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Today,
    NextDay,
}

impl Intent {
    const fn base_label(self) -> &'static str {
        match self {
            Self::Today => "Dagens Lunch",
            Self::NextDay => "I Morgon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingDay {
    pub date_label: String,
    pub dish: String,
}

/// What the presenter shows for one school. `upcoming` may hold fewer than three
/// entries; empty means no further menus were loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub dish: String,
    pub upcoming: Vec<UpcomingDay>,
}

/// Picks the panel to show for `now` out of `panels` (document order, assumed
/// chronological). Returns `None` only for an empty panel sequence; every other
/// input resolves to a `Selection`, falling back through later days and finally
/// the first panel. Ties always go to the first matching panel in sequence
/// order, which keeps the outcome deterministic when the source repeats or
/// reorders headings.
#[must_use]
pub fn resolve(panels: &[DayPanel], now: NaiveDateTime) -> Option<Selection> {
    if panels.is_empty() {
        return None;
    }

    let today = now.date();
    let intent = if now.hour() >= NEXT_DAY_HOUR {
        Intent::NextDay
    } else {
        Intent::Today
    };
    let target = match intent {
        Intent::Today => today,
        Intent::NextDay => today + Duration::days(1),
    };

    // Pin every panel's month+day to a year once, up front. A panel that has no
    // date (or a nonsense one like "31 feb") can never be chosen by a date rule.
    let dates: Vec<Option<NaiveDate>> = panels
        .iter()
        .map(|p| p.date.and_then(|d| d.resolve(today)))
        .collect();

    let exact = dates
        .iter()
        .position(|d| d.is_some_and(|d| d.day() == target.day() && d.month() == target.month()));

    let (index, base_label) = if let Some(i) = exact {
        (i, intent.base_label())
    } else {
        let fallback = match intent {
            // Tomorrow is missing (weekend, break): the next future day will do.
            Intent::NextDay => dates.iter().position(|d| d.is_some_and(|d| d > today)),
            Intent::Today => dates.iter().position(|d| d.is_some_and(|d| d >= today)),
        };
        match fallback {
            Some(i) => (i, "Nästa Lunch"),
            // End of term: nothing current or future, show whatever is first.
            None => (0, "Aktuell Meny"),
        }
    };

    let panel = &panels[index];
    let dish = panel.dish().unwrap_or(MISSING_DISH).to_string();
    let label = match dates[index] {
        Some(date) => format!("{base_label} - {}", swedish_date_label(date)),
        None => base_label.to_string(),
    };

    // The next few panels after the chosen one, keeping only those with both a
    // date and a dish. The window is fixed before filtering, so a skipped entry
    // shortens the list rather than pulling in a later panel.
    let upcoming = panels
        .iter()
        .zip(&dates)
        .skip(index + 1)
        .take(UPCOMING_LEN)
        .filter_map(|(panel, date)| {
            let date = (*date)?;
            let dish = panel.dish()?;
            Some(UpcomingDay {
                date_label: swedish_date_label(date),
                dish: dish.to_string(),
            })
        })
        .collect();

    Some(Selection {
        label,
        dish,
        upcoming,
    })
}
