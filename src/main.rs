use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam_channel::{after, never, select};
use tracing::{error, info, Level};

use elevator::utilities::debug::Debug;
use elevator::utilities::logging;
use elevator::{Config, Elevator, ScriptedInput, SystemTimer};

/// Runs one elevator car against the scripted demo from the configuration.
#[derive(Debug, Parser)]
#[command(name = "elevator", version)]
struct Args {
    /// Configuration file, defaults to ./config.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every floor passed, not only stops
    #[arg(long)]
    debug: bool,

    /// Redraw a status table on every event instead of logging
    #[arg(long)]
    status: bool,

    /// Stop the demo after this many milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug {
        Level::DEBUG
    } else if args.status {
        Level::WARN
    } else {
        Level::INFO
    };
    if let Err(e) = logging::init(level) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // READ CONFIGURATION
    let mut config = Config::get(args.config.as_deref())?;
    if let Some(duration_ms) = args.duration_ms {
        config.demo.duration_ms = duration_ms;
    }

    let settings = config.elevator.clone();
    let (elevator, events_rx) = Elevator::init(settings.clone(), Arc::new(SystemTimer::new()))?;

    let mut debug = if args.status {
        let mut debug = Debug::new(&settings);
        debug.init()?;
        Some(debug)
    } else {
        None
    };

    let mut inputs = config.demo.inputs.clone();
    inputs.sort_by_key(ScriptedInput::at);
    let mut inputs = inputs.into_iter().peekable();

    let started = Instant::now();
    elevator.start()?;
    let deadline = after(Duration::from_millis(config.demo.duration_ms));

    loop {
        let next_input = match inputs.peek() {
            Some(input) => after(input.at().saturating_sub(started.elapsed())),
            None => never(),
        };
        select! {
            recv(events_rx) -> msg => {
                if let (Ok(_), Some(debug)) = (msg, debug.as_mut()) {
                    debug.printstatus(elevator.name(), &elevator.status())?;
                }
            },
            recv(next_input) -> _ => {
                if let Some(input) = inputs.next() {
                    apply(&elevator, input);
                }
            },
            recv(deadline) -> _ => {
                info!("demo finished, stopping...");
                break;
            },
        }
    }

    elevator.stop();
    elevator.join();
    Ok(())
}

fn apply(elevator: &Elevator, input: ScriptedInput) {
    match input {
        ScriptedInput::Press { floor, .. } => elevator.press_floor(floor),
        ScriptedInput::Call { floor, direction, .. } => elevator.call_from_str(floor, &direction),
    }
}
