pub mod calview;
pub mod evtlistview;

pub use calview::MonthView;
pub use evtlistview::EventListView;

pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
