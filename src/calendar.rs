use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use std::fmt;

use crate::agenda::DayEvent;

/// Every date of the reference month, first through last, ascending.
pub fn days_of_month(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let days = first
        .checked_add_months(Months::new(1))
        .unwrap()
        .signed_duration_since(first)
        .num_days();

    (0..days).map(|d| first + Duration::days(d)).collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .unwrap()
        - Duration::days(1)
}

/// One calendar month forward. The day-of-month is kept where valid and
/// clamped when the target month is shorter (Jan 31 -> Feb 28/29).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap()
}

/// One calendar month back, clamping like `next_month`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap()
}

pub struct Day {
    date: NaiveDate,
    events: Vec<DayEvent>,
}

impl Day {
    pub fn new(date: NaiveDate, events: Vec<DayEvent>) -> Day {
        Day { date, events }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_num(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn events(&self) -> &[DayEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_spans_whole_month() {
        let days = days_of_month(date(2024, 7, 11));

        assert_eq!(days.len(), 31);
        assert_eq!(days[0], date(2024, 7, 1));
        assert_eq!(*days.last().unwrap(), date(2024, 7, 31));

        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0] + Duration::days(1));
        }
    }

    #[test]
    fn grid_handles_month_lengths() {
        assert_eq!(days_of_month(date(2024, 2, 15)).len(), 29);
        assert_eq!(days_of_month(date(2023, 2, 1)).len(), 28);
        assert_eq!(days_of_month(date(2024, 4, 30)).len(), 30);
        assert_eq!(days_of_month(date(2024, 12, 31)).len(), 31);
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(first_of_month(date(2024, 7, 11)), date(2024, 7, 1));
        assert_eq!(last_of_month(date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2023, 2, 1)), date(2023, 2, 28));
    }

    #[test]
    fn month_shift_clamps_short_months() {
        assert_eq!(next_month(date(2024, 1, 31)), date(2024, 2, 29));
        assert_eq!(next_month(date(2023, 1, 31)), date(2023, 2, 28));
        assert_eq!(next_month(date(2024, 12, 15)), date(2025, 1, 15));
        assert_eq!(prev_month(date(2024, 3, 31)), date(2024, 2, 29));
        assert_eq!(prev_month(date(2024, 1, 15)), date(2023, 12, 15));
    }

    #[test]
    fn month_navigation_round_trip() {
        // A mid-month cursor survives next-then-prev unchanged.
        assert_eq!(prev_month(next_month(date(2024, 7, 11))), date(2024, 7, 11));

        // A clamped day does not come back: Jan 31 -> Feb 29 -> Jan 29.
        assert_eq!(prev_month(next_month(date(2024, 1, 31))), date(2024, 1, 29));
    }

    #[test]
    fn day_exposes_date_parts() {
        let day = Day::new(date(2024, 7, 15), Vec::new());

        assert_eq!(day.day_num(), 15);
        assert_eq!(day.weekday(), Weekday::Mon);
        assert!(day.is_empty());
        assert_eq!(day.to_string(), "15");
    }
}
