use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use super::calendar_date::CalendarDate;
use crate::static_selector;

/// One day's panel from the menu page: the heading date (if the heading was
/// parseable) and the dish entries in document order. A panel is never rejected;
/// malformed pieces just come out absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPanel {
    pub date: Option<CalendarDate>,
    pub dishes: Vec<String>,
}

impl DayPanel {
    pub fn from_html_element(element: ElementRef) -> Self {
        static_selector!(HEADING_SELECTOR <- ".panel-heading");
        static_selector!(MENU_ITEM_SELECTOR <- ".list-group-item-menu .app-daymenu-name");
        static_selector!(DISH_NAME_SELECTOR <- ".app-daymenu-name");

        let date = element
            .select(&HEADING_SELECTOR)
            .next()
            .and_then(|heading| CalendarDate::parse_heading(&heading.text().collect::<String>()));

        let mut dishes: Vec<String> = element
            .select(&MENU_ITEM_SELECTOR)
            .filter_map(dish_text)
            .collect();
        if dishes.is_empty() {
            // some day panels skip the list-group wrapper
            dishes = element
                .select(&DISH_NAME_SELECTOR)
                .filter_map(dish_text)
                .collect();
        }

        Self { date, dishes }
    }

    /// The representative dish: always the first entry.
    #[must_use]
    pub fn dish(&self) -> Option<&str> {
        self.dishes.first().map(String::as_str)
    }
}

fn dish_text(element: ElementRef) -> Option<String> {
    let text = normalize_text(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

fn normalize_text(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ").into_owned()
}

/// Extracts every day panel from a menu page, in document order. The page is
/// assumed to list days chronologically; this function preserves whatever order
/// it finds.
#[must_use]
pub fn extract_panels(document: &Html) -> Vec<DayPanel> {
    static_selector!(PANEL_SELECTOR <- ".panel-group .panel");
    document
        .root_element()
        .select(&PANEL_SELECTOR)
        .map(DayPanel::from_html_element)
        .collect()
}
