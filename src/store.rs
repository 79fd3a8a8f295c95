use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Error, ErrorKind, Result};
use crate::event::Event;

/// Storage behind the calendar. Implementations hand out and accept whole
/// collections; event semantics live entirely above this trait.
pub trait EventStore {
    fn load(&self) -> Result<Vec<Event>>;
    fn save(&mut self, events: &[Event]) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    events: Vec<Event>,
}

/// In-memory store. `save` replaces the collection and reports success;
/// nothing durable is written anywhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore { events: Vec::new() }
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        MemoryStore { events }
    }

    /// The event set bundled into the binary at compile time.
    pub fn with_builtin_events() -> Result<Self> {
        let seed: SeedFile = toml::from_str(include_str!("../data/events.toml"))?;
        log::info!("loaded {} built-in events", seed.events.len());

        Ok(MemoryStore {
            events: seed.events,
        })
    }
}

impl EventStore for MemoryStore {
    fn load(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn save(&mut self, events: &[Event]) -> Result<()> {
        self.events = events.to_vec();
        log::debug!("stored {} events", self.events.len());
        Ok(())
    }
}

// Edits go through load, rebuild, save; the store never sees a partial
// mutation.

pub fn add_event(store: &mut dyn EventStore, event: Event) -> Result<()> {
    let mut events = store.load()?;
    events.push(event);
    store.save(&events)
}

pub fn update_event(store: &mut dyn EventStore, updated: Event) -> Result<()> {
    let mut events = store.load()?;
    let slot = events
        .iter_mut()
        .find(|e| e.id == updated.id)
        .ok_or_else(|| Error::new(ErrorKind::EventNotFound, &updated.id.to_string()))?;
    *slot = updated;

    store.save(&events)
}

pub fn remove_event(store: &mut dyn EventStore, id: &Uuid) -> Result<()> {
    let mut events = store.load()?;
    let before = events.len();
    events.retain(|e| e.id != *id);

    if events.len() == before {
        return Err(Error::new(ErrorKind::EventNotFound, &id.to_string()));
    }

    store.save(&events)
}
