//! fifosim CLI.
//!
//! Usage: fifosim run --refs "1 2 3 4" --frames 3 [--required "2 4"] [OPTIONS]
//!
//! Steps are revealed one per `--delay-ms` (1000 by default), the way the
//! classroom page animates them. `--all` prints the final table only and
//! `--json` dumps the whole trace.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fifosim::common::config::DEFAULT_STEP_DELAY_MS;
use fifosim::input::{InputLimits, RawInput, RequestFile};
use fifosim::playback::{PlaybackConfig, PlaybackOutcome, Player, StepSink};
use fifosim::render::{render_step, HistoryTable};
use fifosim::{FaultPolicy, Result, Simulation, SimulationRequest, SimulationStep, Termination};

#[derive(Parser, Debug)]
#[command(
    name = "fifosim",
    author,
    version,
    about = "FIFO page-replacement simulator",
    long_about = "Animate FIFO page replacement over a reference string.\n\nExamples:\n  fifosim run --refs \"1 2 3 4 1 2 5\" --frames 3\n  fifosim run --refs 1,2,3,4 --frames 3 --required 2,4 --policy lookahead --all\n  fifosim run --config request.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one simulation.
    Run {
        /// Reference string, pages separated by spaces or commas.
        #[arg(long, required_unless_present = "config")]
        refs: Option<String>,

        /// Number of RAM frames.
        #[arg(long, required_unless_present = "config")]
        frames: Option<String>,

        /// Pages to track for faults. Empty disables the fault row.
        #[arg(long, default_value = "")]
        required: String,

        /// Fault accounting: drain (stop once every required page was seen)
        /// or lookahead (stop once all are resident together).
        #[arg(long, default_value_t = FaultPolicy::Drain)]
        policy: FaultPolicy,

        /// JSON request file; replaces --refs/--frames/--required/--policy.
        #[arg(long, conflicts_with_all = ["refs", "frames"])]
        config: Option<PathBuf>,

        /// Milliseconds between revealed steps.
        #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS)]
        delay_ms: u64,

        /// Skip the animation and print the final table.
        #[arg(long)]
        all: bool,

        /// Print the trace as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            refs,
            frames,
            required,
            policy,
            config,
            delay_ms,
            all,
            json,
        } => build_request(refs, frames, required, policy, config)
            .and_then(|request| cmd_run(request, delay_ms, all, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn build_request(
    refs: Option<String>,
    frames: Option<String>,
    required: String,
    policy: FaultPolicy,
    config: Option<PathBuf>,
) -> Result<SimulationRequest> {
    if let Some(path) = config {
        return RequestFile::load(path)?.into_request();
    }

    let raw = RawInput::new(
        refs.unwrap_or_default(),
        frames.unwrap_or_default(),
        required,
    );
    InputLimits::default().validate(&raw, policy)
}

fn cmd_run(request: SimulationRequest, delay_ms: u64, all: bool, json: bool) -> Result<()> {
    let mut simulation = Simulation::new(request)?;

    if all || json {
        let trace = simulation.run_to_end();
        if json {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        } else {
            print!("{}", HistoryTable::from_trace(&trace));
            print_summary(trace.termination, &trace.stats);
        }
        return Ok(());
    }

    let player = Player::new(PlaybackConfig { delay_ms });
    let mut sink = ConsoleSink {
        table: HistoryTable::new(
            simulation.request().frame_count,
            simulation.tracks_faults(),
        ),
        tracks_faults: simulation.tracks_faults(),
    };

    match player.play(&mut simulation, &mut sink) {
        PlaybackOutcome::Completed { termination, .. } => {
            print!("\n{}", sink.table);
            print_summary(termination, &simulation.stats());
        }
        PlaybackOutcome::Stopped { steps } => {
            println!("Playback stopped after {} steps", steps);
        }
    }
    Ok(())
}

fn print_summary(termination: Termination, stats: &fifosim::ram::SimulationStats) {
    println!();
    println!("Finished: {}", termination);
    println!("{}", stats);
}

/// Prints each step as it is revealed and keeps the history for the final table.
struct ConsoleSink {
    table: HistoryTable,
    tracks_faults: bool,
}

impl StepSink for ConsoleSink {
    fn on_step(&mut self, step: &SimulationStep) {
        println!("{}", render_step(step, self.tracks_faults));
        self.table.push(step.clone());
    }
}
