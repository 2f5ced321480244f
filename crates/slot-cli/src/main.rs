//! `freeslots` CLI - find free time shared by every team calendar.
//!
//! ## Usage
//!
//! ```sh
//! # Render this week's shared free time from busy intervals on stdin
//! cat busy.json | freeslots find
//!
//! # Pin "today" and emit JSON instead of the chat message
//! freeslots find -i busy.json --today 2026-02-02 --json
//!
//! # Show the merged busy blocks and how many calendars feed each one
//! freeslots busy -i busy.json --days 3
//!
//! # Answer a chat message the way the bot would
//! freeslots reply "。" -i busy.json
//! ```
//!
//! Busy input is a JSON array of `{startDate, startTime, endTime}` objects, or
//! an array of `{calendarId, busy: [...]}` groups.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use slot_engine::availability::{self, CalendarBusy};
use slot_engine::busy::parse_date;
use slot_engine::clock::{Clock, FixedClock, SystemClock};
use slot_engine::command::{self, DEFAULT_SEARCH_DAYS, WELCOME_MESSAGE};
use slot_engine::format::render_free_slots;
use slot_engine::time::format_time;
use slot_engine::FreeSlot;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "freeslots",
    version,
    about = "Find free time shared by the whole team"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Window {
    /// Number of calendar dates to search, starting today (weekends count)
    #[arg(long, default_value_t = DEFAULT_SEARCH_DAYS)]
    days: u32,
    /// Treat this date (YYYY-MM-DD, +09:00) as today instead of reading the clock
    #[arg(long)]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print free time shared by every calendar
    Find {
        /// Busy intervals JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        window: Window,
        /// Emit free slots as JSON instead of the chat message
        #[arg(long)]
        json: bool,
    },
    /// Print merged busy blocks per date with their calendar counts
    Busy {
        /// Busy intervals JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        window: Window,
    },
    /// Print the bot's reply to a chat message
    Reply {
        /// The message text
        text: String,
        /// Busy intervals JSON file (no busy time if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        window: Window,
    },
    /// Print the greeting sent to new followers
    Welcome,
}

/// JSON shape of a free slot on stdout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FreeSlotDto {
    date: String,
    start_time: String,
    end_time: String,
    duration_minutes: u32,
}

impl From<&FreeSlot> for FreeSlotDto {
    fn from(slot: &FreeSlot) -> Self {
        Self {
            date: slot.date.to_string(),
            start_time: slot.start_time(),
            end_time: slot.end_time(),
            duration_minutes: slot.duration_minutes(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            window,
            json,
        } => {
            let calendars = load_calendars(input.as_deref())?;
            let clock = clock_for(window.today.as_deref())?;
            let slots = availability::find_common_free_slots(&calendars, window.days, &*clock);

            let rendered = if json {
                let dtos: Vec<FreeSlotDto> = slots.iter().map(FreeSlotDto::from).collect();
                serde_json::to_string_pretty(&dtos).context("Failed to serialize free slots")?
            } else {
                render_free_slots(&slots)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy { input, window } => {
            let calendars = load_calendars(input.as_deref())?;
            let clock = clock_for(window.today.as_deref())?;
            let blocks = availability::busy_blocks_in_window(&calendars, window.days, &*clock);
            for block in blocks {
                println!(
                    "{} {}-{} ({} calendars)",
                    block.date,
                    format_time(block.start_minute),
                    format_time(block.end_minute),
                    block.source_count
                );
            }
        }
        Commands::Reply {
            text,
            input,
            window,
        } => {
            let command = command::parse_command(&text);
            debug!(?command, "parsed chat message");

            let slots = if command::needs_search(command) {
                // Without -i there is no busy time; stdin is not read.
                let calendars = match input.as_deref() {
                    Some(path) => load_calendars(Some(path))?,
                    None => Vec::new(),
                };
                let clock = clock_for(window.today.as_deref())?;
                availability::find_common_free_slots(&calendars, window.days, &*clock)
            } else {
                Vec::new()
            };
            println!("{}", command::reply(command, &slots));
        }
        Commands::Welcome => {
            println!("{}", WELCOME_MESSAGE);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Pick the clock: a pinned date when `--today` is given, otherwise the system clock.
fn clock_for(today: Option<&str>) -> Result<Box<dyn Clock>> {
    match today {
        Some(raw) => {
            let date = parse_date(raw).with_context(|| format!("Invalid --today: {}", raw))?;
            Ok(Box::new(FixedClock::at_start_of(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Read and parse busy input from a file, or stdin when `path` is `None`.
fn load_calendars(path: Option<&str>) -> Result<Vec<CalendarBusy>> {
    let json = read_input(path)?;
    let calendars =
        availability::parse_busy_json(&json).context("Failed to parse busy intervals")?;
    info!(
        calendars = calendars.len(),
        intervals = calendars.iter().map(|c| c.busy.len()).sum::<usize>(),
        "loaded busy intervals"
    );
    Ok(calendars)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
