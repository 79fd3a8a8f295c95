use chrono::NaiveDate;
use itertools::Itertools;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::event::Event;
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Date,
    Category,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Date
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(SortOrder::Date),
            "category" => Ok(SortOrder::Category),
            other => Err(Error::new(
                ErrorKind::ParseError,
                &format!("unknown sort order '{}', expected 'date' or 'category'", other),
            )),
        }
    }
}

/// An event scheduled on a particular day, carrying its stacking slot for
/// the month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvent {
    pub event: Event,
    pub is_overlapping: bool,
    pub index: usize,
}

pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    pub fn from_store(store: &dyn EventStore) -> Result<Self> {
        let events = store.load()?;
        log::debug!("agenda holds {} events", events.len());

        Ok(Agenda { events })
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Agenda { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_of_day(&self, date: NaiveDate) -> Vec<DayEvent> {
        annotate_day_events(&self.events, date)
    }

    /// Events on or after `today`, in the selected order.
    pub fn upcoming(&self, today: NaiveDate, order: SortOrder) -> Vec<&Event> {
        sort_events(self.events.iter().filter(|e| e.date >= today), order)
    }

    /// Events before `today`, most recent first: sorted in the selected
    /// order and then reversed, as the list view presents them.
    pub fn past(&self, today: NaiveDate, order: SortOrder) -> Vec<&Event> {
        let mut past = sort_events(self.events.iter().filter(|e| e.date < today), order);
        past.reverse();
        past
    }
}

fn sort_events<'a>(events: impl Iterator<Item = &'a Event>, order: SortOrder) -> Vec<&'a Event> {
    match order {
        SortOrder::Date => events.sorted_by(|a, b| a.date.cmp(&b.date)).collect(),
        SortOrder::Category => events
            .sorted_by(|a, b| category_key(a).cmp(category_key(b)))
            .collect(),
    }
}

fn category_key(event: &Event) -> &str {
    event.category.as_deref().unwrap_or("")
}

/// Filter the collection down to `date` and mark each retained event whose
/// time range is entered by another event of the same day. `index` is the
/// position in filter order, so the stored collection order decides the
/// stacking offsets the renderer derives from it.
pub fn annotate_day_events(events: &[Event], date: NaiveDate) -> Vec<DayEvent> {
    let day_events: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();

    day_events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let is_overlapping = day_events
                .iter()
                .any(|other| other.id != event.id && touches(event, other));

            DayEvent {
                event: (*event).clone(),
                is_overlapping,
                index,
            }
        })
        .collect()
}

// `other` reaches into `event`'s start, or reaches back over `event`'s end.
// Ranges that only share a boundary instant do not count. Note this is not
// a symmetric intersection test: an event strictly containing another is
// itself left unmarked while the contained one is marked.
fn touches(event: &Event, other: &Event) -> bool {
    (other.start_time <= event.start_time && other.end_time > event.start_time)
        || (other.start_time < event.end_time && other.end_time >= event.end_time)
}
