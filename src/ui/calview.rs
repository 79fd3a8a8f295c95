use chrono::{Datelike, Month, NaiveDate};
use itertools::Itertools;
use num_traits::FromPrimitive;
use std::io::{self, Write};

use crate::agenda::Agenda;
use crate::calendar::{self, Day};
use crate::event::CLOCK_FORMAT;
use crate::ui::WEEKDAY_LABELS;

pub struct MonthView<'a> {
    agenda: &'a Agenda,
    today: NaiveDate,
    today_symbol: String,
}

impl<'a> MonthView<'a> {
    const COLUMNS: usize = 7;
    const CELL_WIDTH: usize = 5;

    pub fn new(agenda: &'a Agenda, today: NaiveDate) -> Self {
        MonthView {
            agenda,
            today,
            today_symbol: "*".to_string(),
        }
    }

    pub fn today_symbol(mut self, symbol: &str) -> Self {
        self.today_symbol = symbol.to_string();
        self
    }

    pub fn render<W: Write>(&self, out: &mut W, cursor: NaiveDate) -> io::Result<()> {
        let days: Vec<Day> = calendar::days_of_month(cursor)
            .into_iter()
            .map(|date| Day::new(date, self.agenda.events_of_day(date)))
            .collect();

        writeln!(out, "{} {}", month_name(cursor), cursor.year())?;
        writeln!(out)?;

        for label in &WEEKDAY_LABELS {
            write!(out, "{:>width$}", label, width = Self::CELL_WIDTH)?;
        }
        writeln!(out)?;

        // The grid flows row-major from day 1; the column headers are
        // decorative and days are not aligned to their actual weekday.
        for row in &days.iter().chunks(Self::COLUMNS) {
            for day in row {
                let cell = if day.date() == self.today {
                    format!("{}{}", self.today_symbol, day.day_num())
                } else {
                    day.day_num().to_string()
                };
                write!(out, "{:>width$}", cell, width = Self::CELL_WIDTH)?;
            }
            writeln!(out)?;
        }

        for day in days.iter().filter(|d| !d.is_empty()) {
            writeln!(out)?;
            writeln!(out, "{}", day.date().format("%a %b %-d"))?;

            for item in day.events() {
                // Overlapping events shift right by their stacking slot and
                // carry a dot marker, like the stacked cards in the grid.
                let indent = if item.is_overlapping { item.index } else { 0 };
                let marker = if item.is_overlapping { " \u{2022}" } else { "" };

                writeln!(
                    out,
                    "  {:indent$}{}  {} - {}{}",
                    "",
                    item.event.title,
                    item.event.start_time.format(CLOCK_FORMAT),
                    item.event.end_time.format(CLOCK_FORMAT),
                    marker,
                    indent = indent
                )?;
            }
        }

        Ok(())
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    Month::from_u32(date.month()).unwrap().name()
}
