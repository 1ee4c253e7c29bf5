use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use aetherledger_schemas::{dashboard::TimeRange, footprint::FootprintInput};

mod config;
mod plotting;
mod workflow;

#[derive(Parser, Debug)]
#[command(name = "aetherledger", version, about = "Emission footprint, hotspot dispersion and filter deployment toolkit")]
struct Cli {
    /// Knowledge base directory (hotspots/, locations/, filters/)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Root directory for run artefacts
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a monthly carbon footprint
    Footprint {
        /// YAML file with a `footprint` section; the default form is used otherwise.
        /// With `--output` the breakdown chart is written too.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Show the hotspot dispersion forecast
    Forecast {
        #[arg(long, default_value_t = 24)]
        hours: u32,
        /// Evaluate every horizon and write a CSV log
        #[arg(long)]
        all: bool,
    },
    /// Rank filter deployment sites
    Advisor {
        /// Expand the location with this id
        #[arg(long)]
        select: Option<u32>,
    },
    /// Print the emissions dashboard
    Dashboard {
        #[arg(long, value_enum, default_value_t = RangeArg::Month)]
        range: RangeArg,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run every workflow into a timestamped directory
    Report {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RangeArg {
    Week,
    Month,
    Year,
}

impl From<RangeArg> for TimeRange {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::Week => TimeRange::Week,
            RangeArg::Month => TimeRange::Month,
            RangeArg::Year => TimeRange::Year,
        }
    }
}

fn load_input(path: Option<&PathBuf>) -> Result<FootprintInput> {
    match path {
        Some(p) => config::load_footprint_input(p),
        None => Ok(FootprintInput::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let explicit_output = cli.output.is_some();
    let cfg = config::AppCfg::resolve(cli.data, cli.output);
    tracing::debug!(?cfg, "Resolved configuration");

    println!("--- AetherLedger ---");

    match cli.command {
        Command::Footprint { input } => {
            let input = load_input(input.as_ref())?;
            let chart_dir = cfg.output_dir.to_string_lossy().into_owned();
            workflow::run_footprint(&input, explicit_output.then_some(chart_dir.as_str()))?;
        }
        Command::Forecast { hours, all } => {
            let kb = config::KnowledgeBase::load(&cfg.data_dir)?;
            if all {
                std::fs::create_dir_all(&cfg.output_dir)?;
                let log_path = cfg.output_dir.join("forecast.csv");
                workflow::run_forecast_timeline(&kb, &log_path.to_string_lossy())?;
            } else {
                workflow::run_forecast(&kb, hours)?;
            }
        }
        Command::Advisor { select } => {
            let kb = config::KnowledgeBase::load(&cfg.data_dir)?;
            workflow::run_advisor(&kb, select)?;
        }
        Command::Dashboard { range, seed } => {
            workflow::run_dashboard(range.into(), seed)?;
        }
        Command::Report { input, seed } => {
            let kb = config::KnowledgeBase::load(&cfg.data_dir)?;
            let input = load_input(input.as_ref())?;
            let output_dir = workflow::run_report(&kb, &input, &cfg.output_dir, seed)?;
            println!("\nEnd-to-end workflow complete. Results are in '{}'", output_dir);
        }
    }

    Ok(())
}
