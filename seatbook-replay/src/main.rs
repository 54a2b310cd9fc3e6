use std::io::Write;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use seatbook_replay::{render_submissions, replay, Config, OutputFormat, Scenario};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Replay a scripted booking page session and print what the form submits
#[derive(Debug, Parser)]
#[command(name = "seatbook-replay", version)]
struct Cli {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Directory holding default.toml and its overrides
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print every tracker event as JSON
    #[arg(long)]
    events: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatbook_replay=info,seatbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir)
        .with_context(|| format!("Failed to load config from {}", cli.config_dir.display()))?;
    let scenario = Scenario::from_path(&cli.scenario)?;
    tracing::info!(
        "Replaying {} ({} seats, {} steps)",
        cli.scenario.display(),
        scenario.seats.len(),
        scenario.steps.len()
    );

    let report = replay(&scenario, &config.tracker).context("Replay failed")?;
    let format = cli.format.unwrap_or(config.replay.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in render_submissions(&report, format)? {
        writeln!(out, "{}", line)?;
    }
    if cli.events || config.replay.print_events {
        for event in &report.events {
            writeln!(out, "{}", serde_json::to_string(event)?)?;
        }
    }
    Ok(())
}
