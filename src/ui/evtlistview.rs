use chrono::NaiveDate;
use std::io::{self, Write};

use crate::agenda::{Agenda, SortOrder};
use crate::event::{Event, CLOCK_FORMAT};

pub struct EventListView<'a> {
    agenda: &'a Agenda,
    today: NaiveDate,
    show_past: bool,
}

impl<'a> EventListView<'a> {
    pub fn new(agenda: &'a Agenda, today: NaiveDate) -> Self {
        EventListView {
            agenda,
            today,
            show_past: true,
        }
    }

    pub fn show_past(mut self, show: bool) -> Self {
        self.show_past = show;
        self
    }

    pub fn render<W: Write>(&self, out: &mut W, order: SortOrder) -> io::Result<()> {
        writeln!(out, "Upcoming Events")?;
        writeln!(out)?;

        let upcoming = self.agenda.upcoming(self.today, order);
        if upcoming.is_empty() {
            writeln!(out, "  No upcoming events scheduled")?;
        } else {
            for event in upcoming {
                self.write_card(out, event)?;
            }
        }

        if self.show_past {
            writeln!(out)?;
            writeln!(out, "Past Events")?;
            writeln!(out)?;

            let past = self.agenda.past(self.today, order);
            if past.is_empty() {
                writeln!(out, "  No past events")?;
            } else {
                for event in past {
                    self.write_card(out, event)?;
                }
            }
        }

        Ok(())
    }

    fn write_card<W: Write>(&self, out: &mut W, event: &Event) -> io::Result<()> {
        match &event.category {
            Some(category) => writeln!(out, "  {} [{}]", event.title, category)?,
            None => writeln!(out, "  {}", event.title)?,
        }

        writeln!(
            out,
            "    {}  {} - {}",
            event.date.format("%a, %b %-d, %Y"),
            event.start_time.format(CLOCK_FORMAT),
            event.end_time.format(CLOCK_FORMAT)
        )?;

        if let Some(location) = &event.location {
            writeln!(out, "    {}", location)?;
        }
        if let Some(description) = &event.description {
            writeln!(out, "    {}", description)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(title: &str, on: NaiveDate, category: &str) -> Event {
        Event::new(
            title.to_string(),
            on,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            "#3b82f6".to_string(),
        )
        .with_category(category.to_string())
    }

    fn render_to_string(agenda: &Agenda, today: NaiveDate, order: SortOrder) -> String {
        let mut out = Vec::new();
        EventListView::new(agenda, today)
            .render(&mut out, order)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_agenda_shows_placeholders() {
        let agenda = Agenda::with_events(Vec::new());
        let rendered = render_to_string(&agenda, date(2024, 7, 15), SortOrder::Date);

        assert!(rendered.contains("No upcoming events scheduled"));
        assert!(rendered.contains("No past events"));
    }

    #[test]
    fn events_split_into_sections() {
        let today = date(2024, 7, 15);
        let agenda = Agenda::with_events(vec![
            event("Community Cleanup", date(2023, 12, 10), "Community"),
            event("Summer Music Festival", date(2024, 7, 15), "Music"),
        ]);

        let rendered = render_to_string(&agenda, today, SortOrder::Date);
        let upcoming_at = rendered.find("Summer Music Festival [Music]").unwrap();
        let past_heading_at = rendered.find("Past Events").unwrap();
        let past_at = rendered.find("Community Cleanup [Community]").unwrap();

        assert!(upcoming_at < past_heading_at);
        assert!(past_heading_at < past_at);
        assert!(rendered.contains("Sun, Dec 10, 2023  09:00 - 10:00"));
    }

    #[test]
    fn past_section_can_be_hidden() {
        let agenda = Agenda::with_events(vec![event(
            "Winter Art Exhibition",
            date(2023, 11, 25),
            "Art",
        )]);

        let mut out = Vec::new();
        EventListView::new(&agenda, date(2024, 7, 15))
            .show_past(false)
            .render(&mut out, SortOrder::Date)
            .unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(!rendered.contains("Past Events"));
        assert!(!rendered.contains("Winter Art Exhibition"));
    }
}
