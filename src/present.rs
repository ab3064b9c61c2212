use std::fmt::Write;

use crate::config::School;
use crate::resolve::Selection;

pub const NO_MENU_FOUND: &str = "Ingen meny hittades online.";
pub const FETCH_FAILED: &str = "Kunde inte ladda menyn.";
const NO_MORE_MENUS: &str = "Inga fler menyer laddade.";

/// Renders one school's resolved menu as terminal text. `None` is the
/// "no menu found" outcome from an empty panel list.
#[must_use]
pub fn render(school: School, selection: Option<&Selection>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", school.display_name());
    let Some(selection) = selection else {
        let _ = writeln!(out, "  {NO_MENU_FOUND}");
        return out;
    };
    let _ = writeln!(out, "  {}", selection.label);
    let _ = writeln!(out, "  {}", selection.dish);
    let _ = writeln!(out, "  Kommande:");
    if selection.upcoming.is_empty() {
        let _ = writeln!(out, "    {NO_MORE_MENUS}");
    }
    for day in &selection.upcoming {
        let _ = writeln!(out, "    {} - {}", day.date_label, day.dish);
    }
    out
}

#[must_use]
pub fn render_fetch_failure(school: School) -> String {
    format!("{}\n  {FETCH_FAILED}\n", school.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::UpcomingDay;

    #[test]
    fn test_render_with_upcoming() {
        let selection = Selection {
            label: "Dagens Lunch - onsdag, 12 feb".to_string(),
            dish: "Köttbullar med potatismos".to_string(),
            upcoming: vec![UpcomingDay {
                date_label: "torsdag, 13 feb".to_string(),
                dish: "Fisk Björkeby".to_string(),
            }],
        };
        let out = render(School::Karby, Some(&selection));
        assert_eq!(
            out,
            "Karby skola\n\
             \x20 Dagens Lunch - onsdag, 12 feb\n\
             \x20 Köttbullar med potatismos\n\
             \x20 Kommande:\n\
             \x20   torsdag, 13 feb - Fisk Björkeby\n"
        );
    }

    #[test]
    fn test_render_empty_upcoming_gets_placeholder() {
        let selection = Selection {
            label: "Aktuell Meny".to_string(),
            dish: "Pannkakor".to_string(),
            upcoming: vec![],
        };
        let out = render(School::Olympia, Some(&selection));
        assert!(out.contains(NO_MORE_MENUS));
    }

    #[test]
    fn test_render_not_found() {
        let out = render(School::Karby, None);
        assert!(out.contains(NO_MENU_FOUND));
    }

    #[test]
    fn test_render_fetch_failure() {
        assert!(render_fetch_failure(School::Olympia).contains(FETCH_FAILED));
    }
}
