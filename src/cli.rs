use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use remember_calendar::calendar::{CalendarKind, ViewKind};

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show a calendar view
    Show(ShowArgs),
    /// Show a view anchored on today, with today selected
    Today {
        #[clap(long)]
        view: Option<ViewKind>,
    },
    /// List the events of a day
    List {
        /// Day to list, defaults to today
        #[clap(long)]
        date: Option<NaiveDate>,
    },
    /// Create an event
    Add(AddArgs),
    /// Change an event. Fields that are not given keep their current value
    Edit(EditArgs),
    /// Delete an event
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    #[clap(long)]
    pub view: Option<ViewKind>,
    /// Anchor date of the view, defaults to today
    #[clap(long)]
    pub date: Option<NaiveDate>,
    /// Date to highlight
    #[clap(long)]
    pub select: Option<NaiveDate>,
    /// Step this many periods back
    #[clap(long, default_value_t = 0)]
    pub prev: u32,
    /// Step this many periods forward
    #[clap(long, default_value_t = 0)]
    pub next: u32,
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[clap(long)]
    pub title: String,
    /// Defaults to today
    #[clap(long)]
    pub date: Option<NaiveDate>,
    /// Pre-fill a one hour slot starting at this hour
    #[clap(long, conflicts_with = "all_day")]
    pub hour: Option<u32>,
    /// No start or end time
    #[clap(long)]
    pub all_day: bool,
    /// Start time as HH:MM
    #[clap(long)]
    pub start: Option<String>,
    /// End time as HH:MM
    #[clap(long)]
    pub end: Option<String>,
    #[clap(long, default_value = "")]
    pub description: String,
    #[clap(long, default_value_t)]
    pub calendar: CalendarKind,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    pub id: String,
    #[clap(long)]
    pub title: Option<String>,
    /// Date as YYYY-MM-DD
    #[clap(long)]
    pub date: Option<String>,
    /// Start time as HH:MM, empty to clear
    #[clap(long)]
    pub start: Option<String>,
    /// End time as HH:MM, empty to clear
    #[clap(long)]
    pub end: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
    #[clap(long)]
    pub calendar: Option<CalendarKind>,
}
