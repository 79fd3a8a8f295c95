mod agenda;
mod args;
mod calendar;
mod cmds;
mod config;
mod context;
mod ctrl;
mod error;
mod event;
mod store;
mod ui;

use flexi_logger::{FileSpec, Logger};
use std::io;
use structopt::StructOpt;
use uuid::Uuid;

use agenda::{Agenda, SortOrder};
use args::{Args, Command};
use cmds::Cmd;
use config::Config;
use context::Context;
use ctrl::{CalendarController, Control, EventListController};
use error::{Error, ErrorKind};
use event::Event;
use store::{EventStore, MemoryStore};
use ui::{EventListView, MonthView};

type MainResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> MainResult {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file.clone())?)
            .print_message();
    }

    logger.start()?;

    let config = config::load_suitable_config(args.configfile.as_deref())?;
    let mut store = MemoryStore::with_builtin_events()?;

    let command = args.command.unwrap_or(Command::Month {
        date: None,
        next: None,
        prev: None,
        today: false,
    });

    match command {
        Command::Month {
            date,
            next,
            prev,
            today,
        } => show_month(&store, &config, date, next, prev, today),
        Command::Events { sort } => show_events(&store, &config, &sort),
        Command::Add {
            title,
            date,
            start,
            end,
            color,
            location,
            description,
            category,
        } => add(
            &mut store,
            &config,
            title,
            date,
            start,
            end,
            color,
            location,
            description,
            category,
        ),
        Command::Edit {
            id,
            title,
            date,
            start,
            end,
            color,
            location,
            description,
            category,
        } => edit(
            &mut store,
            id,
            title,
            date,
            start,
            end,
            color,
            location,
            description,
            category,
        ),
        Command::Remove { id } => remove(&mut store, id),
    }
}

fn show_month(
    store: &dyn EventStore,
    config: &Config,
    date: Option<String>,
    next: Option<u32>,
    prev: Option<u32>,
    today: bool,
) -> MainResult {
    let mut context = match date {
        Some(raw) => Context::new(event::parse_date(&raw)?),
        None => Context::today(),
    };

    let mut calctrl = CalendarController::default();
    for _ in 0..next.unwrap_or(0) {
        calctrl.send_cmd(&Cmd::NextMonth, &mut context)?;
    }
    for _ in 0..prev.unwrap_or(0) {
        calctrl.send_cmd(&Cmd::PrevMonth, &mut context)?;
    }
    if today {
        calctrl.send_cmd(&Cmd::Today, &mut context)?;
    }

    let agenda = Agenda::from_store(store)?;
    let today = chrono::Local::now().date_naive();
    let stdout = io::stdout();

    MonthView::new(&agenda, today)
        .today_symbol(&config.today_symbol)
        .render(&mut stdout.lock(), context.cursor)?;

    Ok(())
}

fn show_events(store: &dyn EventStore, config: &Config, sort: &str) -> MainResult {
    let mut context = Context::today();
    let mut listctrl = EventListController::default();

    let cmd = match sort.parse::<SortOrder>()? {
        SortOrder::Date => Cmd::SortByDate,
        SortOrder::Category => Cmd::SortByCategory,
    };
    listctrl.send_cmd(&cmd, &mut context)?;

    let agenda = Agenda::from_store(store)?;
    let stdout = io::stdout();

    EventListView::new(&agenda, context.cursor)
        .show_past(config.show_past_events)
        .render(&mut stdout.lock(), context.sort)?;

    Ok(())
}

fn add(
    store: &mut dyn EventStore,
    config: &Config,
    title: String,
    date: String,
    start: String,
    end: String,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
    category: Option<String>,
) -> MainResult {
    let date = event::parse_date(&date)?;
    let start = event::parse_clock_time(&start)?;
    let end = event::parse_clock_time(&end)?;

    // Explicit color wins, then the category's badge color, then the
    // configured default.
    let color = color
        .or_else(|| {
            category
                .as_deref()
                .and_then(event::color_for_category)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| config.default_color.clone());

    let mut event = Event::new(title, date, start, end, color);
    if let Some(location) = location {
        event = event.with_location(location);
    }
    if let Some(description) = description {
        event = event.with_description(description);
    }
    if let Some(category) = category {
        event = event.with_category(category);
    }

    let id = event.id;
    store::add_event(store, event)?;
    log::info!("added event {}", id);
    println!("added event {}", id);
    println!();

    let agenda = Agenda::from_store(store)?;
    let today = chrono::Local::now().date_naive();
    let stdout = io::stdout();
    MonthView::new(&agenda, today)
        .today_symbol(&config.today_symbol)
        .render(&mut stdout.lock(), date)?;

    Ok(())
}

fn edit(
    store: &mut dyn EventStore,
    id: String,
    title: Option<String>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
    category: Option<String>,
) -> MainResult {
    let id = parse_id(&id)?;
    let events = store.load()?;
    let mut event = events
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .ok_or_else(|| Error::new(ErrorKind::EventNotFound, &id.to_string()))?;

    if let Some(title) = title {
        event.title = title;
    }
    if let Some(date) = date {
        event.date = event::parse_date(&date)?;
    }
    if let Some(start) = start {
        event.start_time = event::parse_clock_time(&start)?;
    }
    if let Some(end) = end {
        event.end_time = event::parse_clock_time(&end)?;
    }
    if let Some(color) = color {
        event.color = color;
    }
    if let Some(location) = location {
        event.location = Some(location);
    }
    if let Some(description) = description {
        event.description = Some(description);
    }
    if let Some(category) = category {
        event.category = Some(category);
    }

    store::update_event(store, event)?;
    log::info!("updated event {}", id);
    println!("updated event {}", id);

    Ok(())
}

fn remove(store: &mut dyn EventStore, id: String) -> MainResult {
    let id = parse_id(&id)?;
    store::remove_event(store, &id)?;
    log::info!("removed event {}", id);
    println!("removed event {}", id);

    Ok(())
}

fn parse_id(raw: &str) -> error::Result<Uuid> {
    raw.parse::<Uuid>()
        .map_err(|e| Error::new(ErrorKind::ParseError, &format!("'{}': {}", raw, e)))
}
