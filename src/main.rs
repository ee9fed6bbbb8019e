#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use chrono::Local;
use clap::Parser;

use cli::{AddArgs, Cli, Command, EditArgs, ShowArgs};
use remember_calendar::app::{App, Update, ViewState};
use remember_calendar::calendar::{date, Direction, EventFields, EventId, EventStore, FileStorage};
use remember_calendar::logger::{self, LogExt as _};
use remember_calendar::messaging::Message;
use remember_calendar::{config, views};

mod cli;

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config = config::init(cli.config.as_deref()).log_error("Could not load the configuration file")?;

    let storage = FileStorage::new(&config.storage.directory, &config.storage.key);
    log::debug!("Using event storage {}", storage.path().display());

    let store = EventStore::load(storage).log_error("Could not load the stored events")?;
    let mut app = App::new(store, ViewState::new(config.view.default, date::today()));

    match cli.command.unwrap_or_else(|| Command::Show(ShowArgs::default())) {
        Command::Show(args) => {
            for message in show_messages(&args) {
                app.update(message)?;
            }
        }
        Command::Today { view } => {
            if let Some(view) = view {
                app.update(Message::SwitchView(view))?;
            }
            app.update(Message::Today)?;
        }
        Command::List { date: day } => {
            let day = day.unwrap_or(app.state().today);
            let events = app.store().events_on(&day);

            if events.is_empty() {
                println!("No events on {}", date::to_date_key(&day));
            }
            for event in events {
                println!("{}", views::event_line(event));
            }

            return Ok(());
        }
        Command::Add(args) => {
            let fields = add_fields(args, app.state().today);
            let update = app.update(Message::CreateEvent(fields)).log_warn("Could not create the event")?;
            report(&update);
            return Ok(());
        }
        Command::Edit(args) => {
            let id = EventId::from(args.id.as_str());
            let current = app.store().get(&id).map(EventFields::from).unwrap_or_default();
            let fields = edit_fields(args, current);
            let update = app.update(Message::UpdateEvent(id, fields)).log_warn("Could not update the event")?;
            report(&update);
            return Ok(());
        }
        Command::Delete { id } => {
            let update = app.update(Message::DeleteEvent(EventId::from(id)))?;
            report(&update);
            return Ok(());
        }
    }

    println!("{}", views::render(app.store(), app.state()));

    Ok(())
}

fn show_messages(args: &ShowArgs) -> Vec<Message> {
    let mut messages = Vec::new();

    if let Some(view) = args.view {
        messages.push(Message::SwitchView(view));
    }
    if let Some(date) = args.date {
        messages.push(Message::GoTo(date));
    }
    if let Some(selected) = args.select {
        messages.push(Message::SelectDate(selected));
    }
    messages.extend((0..args.prev).map(|_| Message::Navigate(Direction::Prev)));
    messages.extend((0..args.next).map(|_| Message::Navigate(Direction::Next)));

    messages
}

fn add_fields(args: AddArgs, today: chrono::NaiveDate) -> EventFields {
    let day = args.date.unwrap_or(today);

    let mut fields = match args.hour {
        Some(hour) => EventFields::for_hour(day, hour),
        None => EventFields::for_new(Some(day), Local::now().time()),
    };

    if args.all_day {
        fields = fields.with_times("", "");
    }
    if let Some(start) = args.start {
        fields.start_time = start;
    }
    if let Some(end) = args.end {
        fields.end_time = end;
    }

    EventFields {
        title: args.title,
        description: args.description,
        calendar: args.calendar,
        ..fields
    }
}

fn edit_fields(args: EditArgs, current: EventFields) -> EventFields {
    EventFields {
        title: args.title.unwrap_or(current.title),
        date: args.date.unwrap_or(current.date),
        start_time: args.start.unwrap_or(current.start_time),
        end_time: args.end.unwrap_or(current.end_time),
        description: args.description.unwrap_or(current.description),
        calendar: args.calendar.unwrap_or(current.calendar),
    }
}

fn report(update: &Update) {
    match update {
        Update::Created(event) => println!("Created {}", views::event_line(event)),
        Update::Updated(event) => println!("Updated {}", views::event_line(event)),
        Update::Deleted(Some(event)) => println!("Deleted {}", views::event_line(event)),
        Update::Deleted(None) => println!("Nothing to delete"),
        Update::View => {}
    }
}
