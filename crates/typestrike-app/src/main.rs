//! TypeStrike headless runner.
//!
//! Usage:
//!   cargo run --release -p typestrike-app -- --seed 7 --seconds 300
//!   LOG_FORMAT=json RUST_LOG=debug cargo run -p typestrike-app -- --realtime

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};

use typestrike_app::autopilot::AutopilotConfig;
use typestrike_app::session::{run_headless, run_realtime, SessionConfig};
use typestrike_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "typestrike")]
#[command(about = "Run the TypeStrike simulation with an autopilot typist and print a JSON summary")]
struct Cli {
    /// Seed for the simulation and the autopilot
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Maximum run length in seconds (menus included)
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,
    /// Autopilot typing speed
    #[arg(long, default_value_t = 5.0)]
    keys_per_sec: f32,
    /// Probability that the autopilot types the right letter
    #[arg(long, default_value_t = 0.95)]
    accuracy: f64,
    /// Run on the paced 60Hz game loop thread instead of as fast as possible
    #[arg(long, default_value_t = false)]
    realtime: bool,
    /// Log output format (defaults to LOG_FORMAT, then compact)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

fn init_tracing(format: Option<LogFormat>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = match format {
        Some(format) => format == LogFormat::Json,
        None => matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")),
    };
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    ensure!(
        cli.seconds.is_finite() && cli.seconds > 0.0,
        "--seconds must be positive, got {}",
        cli.seconds
    );
    ensure!(
        cli.keys_per_sec.is_finite() && cli.keys_per_sec >= 0.0,
        "--keys-per-sec must be non-negative, got {}",
        cli.keys_per_sec
    );
    ensure!(
        (0.0..=1.0).contains(&cli.accuracy),
        "--accuracy must be within [0, 1], got {}",
        cli.accuracy
    );

    let config = SessionConfig {
        sim: SimConfig {
            seed: cli.seed,
            ..Default::default()
        },
        autopilot: AutopilotConfig {
            keys_per_sec: cli.keys_per_sec,
            accuracy: cli.accuracy,
            seed: cli.seed,
        },
        seconds: cli.seconds,
    };

    let summary = if cli.realtime {
        run_realtime(&config)?
    } else {
        run_headless(&config)?
    };

    let json = serde_json::to_string_pretty(&summary).context("failed to serialize run summary")?;
    println!("{json}");
    Ok(())
}
