use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use registration_wizard_lib::{
    init_tracing_subscriber, load_config, load_script, replay, wire_orchestrator,
};
use rw_core::ports::ClockPort;
use rw_core::WizardConfig;
use rw_infra::FixedClock;
use tracing::info;

/// Replay a scripted registration session and print every snapshot as JSON.
#[derive(Debug, Parser)]
#[command(name = "registration-wizard", version, about)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pin "today" for expiry-year checks.
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// Pretty-print snapshots.
    #[arg(long)]
    pretty: bool,

    /// TOML script of inputs to replay.
    script: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;
    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WizardConfig::with_defaults(),
    };
    let clock = match cli.today {
        Some(today) => {
            let midnight = today
                .and_hms_opt(0, 0, 0)
                .context("Failed to build midnight for --today")?;
            Some(Arc::new(FixedClock::new(midnight.and_utc().timestamp_millis()))
                as Arc<dyn ClockPort>)
        }
        None => None,
    };

    let script = load_script(&cli.script)?;
    info!(script = %cli.script.display(), steps = script.steps.len(), "replaying script");

    let wiring = wire_orchestrator(&config, clock, None);
    for outcome in replay(&wiring.orchestrator, &script).await {
        let line = if cli.pretty {
            serde_json::to_string_pretty(&outcome)?
        } else {
            serde_json::to_string(&outcome)?
        };
        println!("{line}");
    }

    Ok(())
}
