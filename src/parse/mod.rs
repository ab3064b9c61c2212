mod calendar_date;
mod day_panel;
pub(crate) mod static_selector;

pub use calendar_date::{swedish_date_label, CalendarDate};
pub use day_panel::{extract_panels, DayPanel};
