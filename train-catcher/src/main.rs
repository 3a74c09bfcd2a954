use std::path::PathBuf;

use anyhow::Context;
use chrono::Weekday;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use train_catcher::catcher::{Clock, SystemClock};
use train_catcher::config::Settings;
use train_catcher::domain::{MinuteOfDay, weekday_from_index};

/// Which train is worth catching right now?
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Settings file naming the timetables and walking parameters
    #[arg(long, env = "TRAIN_CATCHER_CONFIG", default_value = "catcher.json")]
    config: PathBuf,

    /// Look up at this time (HH:MM) instead of now
    #[arg(long, value_parser = MinuteOfDay::parse_hhmm)]
    at: Option<MinuteOfDay>,

    /// Look up on this day (0-6 from Monday, or a name) instead of today
    #[arg(long, value_parser = parse_day)]
    day: Option<Weekday>,

    /// Override the walk time in minutes
    #[arg(long)]
    walk: Option<u32>,

    /// Override the safety margin in minutes
    #[arg(long)]
    wiggle: Option<u32>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the day's timetable before the result
    #[arg(long)]
    show_schedule: bool,

    /// Only print the next catchable train
    #[arg(long)]
    next: bool,
}

fn parse_day(s: &str) -> Result<Weekday, String> {
    if let Ok(index) = s.parse::<u8>() {
        return weekday_from_index(index).map_err(|e| e.to_string());
    }
    s.parse::<Weekday>()
        .map_err(|_| format!("unknown day {s:?}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let settings = Settings::load(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;
    let mut catcher = settings.build()?;
    if let Some(walk) = args.walk {
        catcher.set_walk_time(walk);
    }
    if let Some(wiggle) = args.wiggle {
        catcher.set_wiggle(wiggle);
    }

    if args.show_schedule {
        let day = args.day.unwrap_or_else(|| SystemClock.today().1);
        let (_, schedule) = catcher.schedule_for(day)?;
        println!("{schedule}");
        println!();
    }

    if args.next {
        let next = catcher.next_train(args.at, args.day)?;
        if args.json {
            // `null` when the day has run out of trains
            println!("{}", serde_json::to_string_pretty(&next)?);
        } else {
            match next {
                Some(departure) => println!("{departure}"),
                None => println!("No more trains today"),
            }
        }
        return Ok(());
    }

    let result = catcher.lookup(args.at, args.day)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }

    Ok(())
}
