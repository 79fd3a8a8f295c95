use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sparrow",
    about = "Sparrow - a calendar and events manager."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "show the month view (default)")]
    Month {
        #[structopt(
            short = "d",
            long = "date",
            help = "reference date (YYYY-MM-DD), defaults to today"
        )]
        date: Option<String>,

        #[structopt(short = "n", long = "next", help = "shift N months forward")]
        next: Option<u32>,

        #[structopt(short = "p", long = "prev", help = "shift N months back")]
        prev: Option<u32>,

        #[structopt(long = "today", help = "jump back to the current month")]
        today: bool,
    },

    #[structopt(about = "show the events list")]
    Events {
        #[structopt(
            short = "s",
            long = "sort",
            help = "sort order: date or category",
            default_value = "date"
        )]
        sort: String,
    },

    #[structopt(about = "add an event")]
    Add {
        #[structopt(long = "title")]
        title: String,

        #[structopt(long = "date", help = "YYYY-MM-DD")]
        date: String,

        #[structopt(long = "start", help = "HH:MM")]
        start: String,

        #[structopt(long = "end", help = "HH:MM")]
        end: String,

        #[structopt(long = "color", help = "display color, e.g. #3b82f6")]
        color: Option<String>,

        #[structopt(long = "location")]
        location: Option<String>,

        #[structopt(long = "description")]
        description: Option<String>,

        #[structopt(long = "category")]
        category: Option<String>,
    },

    #[structopt(about = "edit an event")]
    Edit {
        #[structopt(help = "event id")]
        id: String,

        #[structopt(long = "title")]
        title: Option<String>,

        #[structopt(long = "date", help = "YYYY-MM-DD")]
        date: Option<String>,

        #[structopt(long = "start", help = "HH:MM")]
        start: Option<String>,

        #[structopt(long = "end", help = "HH:MM")]
        end: Option<String>,

        #[structopt(long = "color")]
        color: Option<String>,

        #[structopt(long = "location")]
        location: Option<String>,

        #[structopt(long = "description")]
        description: Option<String>,

        #[structopt(long = "category")]
        category: Option<String>,
    },

    #[structopt(about = "remove an event")]
    Remove {
        #[structopt(help = "event id")]
        id: String,
    },
}
