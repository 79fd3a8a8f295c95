use chrono::{Local, NaiveDate};

use crate::agenda::SortOrder;

/// Shared view state: the date anchoring the displayed month and the
/// selected list ordering. Navigation only ever mutates this.
pub struct Context {
    pub cursor: NaiveDate,
    pub sort: SortOrder,
}

impl Context {
    pub fn new(cursor: NaiveDate) -> Self {
        Context {
            cursor,
            sort: SortOrder::default(),
        }
    }

    pub fn today() -> Self {
        Context::new(Local::now().date_naive())
    }

    pub fn select_today(&mut self) {
        self.cursor = Local::now().date_naive();
    }
}
