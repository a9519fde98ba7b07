mod dashboard;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Weekday;
use clap::{Parser, ValueEnum};
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::dashboard::{render_report, render_zones, DashboardOptions, DashboardService};
use crate::storage::{CsvDatasetLoader, DataSource};
use crate::types::{Month, ALL_ZONES};

/// Sales dashboard over a CSV export: revenue, monthly indicators, weekly trend and top categories.
#[derive(Parser)]
#[command(name = "sales-dashboard", version, about, long_about = None)]
struct Cli {
    /// Path to the sales CSV export
    #[arg(long, env = "SALES_DATASET")]
    dataset: PathBuf,

    /// Zone to report on; repeat for several zones, "all" disables filtering
    #[arg(long = "zone", default_value = ALL_ZONES)]
    zones: Vec<String>,

    /// Current month for the indicators, as a number or a name
    #[arg(long, default_value = "12")]
    month: Month,

    /// Categories kept per gender
    #[arg(long, default_value_t = 10)]
    top_n: usize,

    /// Rank categories from the smallest count upwards
    #[arg(long)]
    ascending: bool,

    /// Rows in the recent transactions table
    #[arg(long, default_value_t = 100)]
    recent: usize,

    /// First day of the week used to group the revenue trend
    #[arg(long, default_value = "monday")]
    week_start: Weekday,

    /// Print the zones present in the dataset and exit
    #[arg(long)]
    list_zones: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    log_level: LogLevel
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.into());

    let loader = CsvDatasetLoader::new(&cli.dataset).with_first_day_of_week(cli.week_start);

    let timer = Instant::now();
    let dataset = spawn_blocking(move || loader.load()).await?
        .with_context(|| format!("Failed to load dataset from [{}]", cli.dataset.display()))?;
    let duration = timer.elapsed();

    info!("Loaded dataset in: {duration:?}");

    let service = DashboardService::new(Arc::new(dataset), DashboardOptions {
        current_month: cli.month,
        top_n: cli.top_n,
        ascending: cli.ascending,
        recent: cli.recent
    });

    let mut output = BufWriter::new(stdout().lock());

    if cli.list_zones {
        render_zones(&service.zones(), &mut output)?;
        output.flush()?;

        return Ok(());
    }

    let selections: Vec<_> = cli.zones.into_iter()
        .map(|zone| {
            let service = service.clone();
            tokio::spawn(async move { service.select(&zone).await })
        })
        .collect();

    for selection in selections {
        let snapshot = selection.await??;
        render_report(&snapshot, &mut output)?;
    }

    output.flush()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
