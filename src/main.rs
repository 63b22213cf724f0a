use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use flight_replay::dataset::FlightLog;
use flight_replay::timeline::{parse_timestamp, Geodetic, Timeline};
use flight_replay::web::{run_server, Config};

#[derive(Parser)]
#[command(name = "flight-replay")]
#[command(about = "Replay vehicle flight logs on a 3D globe")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every track of a flight log and print a summary
    Validate {
        /// Log file (YAML or JSON), or `builtin` for the sample log
        dataset: String,
    },
    /// Print the value of every track at one instant
    Inspect {
        dataset: String,
        /// RFC3339 timestamp
        #[arg(long, value_parser = parse_timestamp)]
        at: DateTime<Utc>,
        /// Take-off origin as `lat,lon`
        #[arg(long)]
        origin: Option<String>,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        altitude_offset: f64,
    },
    /// Run the web server
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { dataset } => validate(&dataset),
        Commands::Inspect {
            dataset,
            at,
            origin,
            altitude_offset,
        } => inspect(&dataset, at, origin.as_deref(), altitude_offset),
        Commands::Serve { config } => serve(&config),
    }
}

fn validate(path: &str) -> ExitCode {
    let log = match FlightLog::open(path) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Error reading dataset: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match Timeline::build(&log, Some(&Geodetic::new(0.0, 0.0, 0.0)), 0.0, None) {
        Ok(timeline) => {
            println!("Dataset is valid");
            println!("  position samples:     {}", timeline.position.len());
            println!(
                "  attitude intervals:   {}",
                timeline.orientation.as_ref().map_or(0, |o| o.len())
            );
            println!("  flight-mode intervals: {}", timeline.flight_modes.len());
            println!("  setpoint intervals:   {}", timeline.setpoints.len());
            match timeline.window {
                Some(window) => println!("  window: {} .. {}", window.start, window.stop),
                None => println!("  window: none (no position data)"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Track error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn inspect(path: &str, at: DateTime<Utc>, origin: Option<&str>, offset: f64) -> ExitCode {
    let origin = match origin.map(|o| Geodetic::from_coordinates(o, None)) {
        Some(None) => {
            eprintln!("Invalid origin, expected lat,lon");
            return ExitCode::FAILURE;
        }
        Some(origin) => origin,
        None => None,
    };

    let timeline = match FlightLog::open(path)
        .map_err(|e| e.to_string())
        .and_then(|log| {
            Timeline::build(&log, origin.as_ref(), offset, None).map_err(|e| e.to_string())
        }) {
        Ok(timeline) => timeline,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = timeline.state_at(at);
    println!("{}", state.time);
    match state.position {
        Some(p) => println!("  position (ECEF m): {:.3}, {:.3}, {:.3}", p.x, p.y, p.z),
        None => println!("  position: outside the sampled range"),
    }
    match state.orientation {
        Some(q) => println!(
            "  orientation (xyzw): {:.6}, {:.6}, {:.6}, {:.6}",
            q.i, q.j, q.k, q.w
        ),
        None => println!("  orientation: none"),
    }
    match state.flight_mode {
        Some(mode) => println!("  flight mode: {}", mode),
        None => println!("  flight mode: none"),
    }
    match state.setpoint {
        Some(s) => println!("  setpoint: x={} y={} z={} r={}", s.x, s.y, s.z, s.r),
        None => println!("  setpoint: none"),
    }
    ExitCode::SUCCESS
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
