//! CLI entry point for the bike-sharing dashboard pipeline.
//!
//! Loads the daily (and optionally hourly) rental data, applies a selection,
//! and hands the computed views to a renderer as JSON or per-view CSV files.

use anyhow::Result;
use bike_share_insights::{
    config::Config,
    filter::Selection,
    labels::{ALL_SEASONS, ALL_WEATHER, season_label, weather_label},
    loader::SourceCache,
    output::{export_views, print_pretty, write_json},
    pipeline::Pipeline,
    views::dataset_summary,
};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bike_share_insights")]
#[command(about = "Summary views over the bike-sharing rental dataset", long_about = None)]
struct Cli {
    /// Daily dataset (overrides BIKE_DAILY_CSV)
    #[arg(long, global = true, value_name = "CSV")]
    daily: Option<PathBuf>,

    /// Hourly dataset (overrides BIKE_HOURLY_CSV); enables the hourly views
    #[arg(long, global = true, value_name = "CSV")]
    hourly: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// One `--season`/`--weather` value: a code in 1..=4, or `none` to select
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeArg {
    None,
    Code(u8),
}

fn parse_code(s: &str) -> Result<CodeArg, String> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(CodeArg::None);
    }
    match s.parse::<u8>() {
        Ok(code @ 1..=4) => Ok(CodeArg::Code(code)),
        _ => Err(format!("expected a code in 1..=4 or `none`, got `{s}`")),
    }
}

/// No flags means the full domain; `none` alone means the empty set.
fn code_set(args: &[CodeArg], all: [u8; 4]) -> Vec<u8> {
    if args.is_empty() {
        return all.to_vec();
    }
    args.iter()
        .filter_map(|a| match a {
            CodeArg::Code(code) => Some(*code),
            CodeArg::None => None,
        })
        .collect()
}

#[derive(Args, Clone)]
struct SelectionArgs {
    /// Calendar year to show
    #[arg(
        short,
        long,
        default_value_t = 2011,
        value_parser = clap::value_parser!(i32).range(2011..=2012)
    )]
    year: i32,

    /// Season codes to keep (1=Spring, 2=Summer, 3=Fall, 4=Winter, or `none`); repeatable
    #[arg(short, long = "season", value_parser = parse_code)]
    seasons: Vec<CodeArg>,

    /// Weather codes to keep in the hourly data (1=Clear .. 4=Heavy, or `none`); repeatable
    #[arg(short, long = "weather", value_parser = parse_code)]
    weather: Vec<CodeArg>,
}

impl SelectionArgs {
    fn to_selection(&self) -> Selection {
        Selection::for_year(self.year)
            .with_seasons(code_set(&self.seasons, ALL_SEASONS))
            .with_weather(code_set(&self.weather, ALL_WEATHER))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every view and print it as JSON
    Views {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute every view and write one CSV file per view
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Directory to write the CSV files into
        #[arg(short = 'd', long, default_value = "views")]
        output_dir: PathBuf,
    },
    /// Log row counts, date range and total rentals of the selection
    Summary {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.daily.clone(), cli.hourly.clone());

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = config.log_file.parent().unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("bike_share_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    info!(
        daily = %config.daily_csv.display(),
        hourly = ?config.hourly_csv,
        "Configuration loaded"
    );

    let mut cache = SourceCache::new();
    let pipeline = Pipeline::from_cache(&mut cache, &config.sources())?;

    match cli.command {
        Commands::Views { selection, output } => {
            let selection = selection.to_selection();
            log_selection(&pipeline, &selection);
            let views = pipeline.views(&selection);
            print_pretty(&views);
            write_json(output.as_deref(), &views)?;
        }
        Commands::Export {
            selection,
            output_dir,
        } => {
            let selection = selection.to_selection();
            log_selection(&pipeline, &selection);
            let views = pipeline.views(&selection);
            let written = export_views(&output_dir, &views)?;
            for path in &written {
                info!(path = %path.display(), "View written");
            }
        }
        Commands::Summary { selection } => {
            let selection = selection.to_selection();
            log_selection(&pipeline, &selection);
            let daily = pipeline.filtered_daily(&selection);
            let summary = dataset_summary(&daily);

            info!(
                year = selection.calendar_year(),
                rows = summary.rows,
                first_date = ?summary.first_date,
                last_date = ?summary.last_date,
                total_rentals = summary.total_rentals,
                "Daily selection summary"
            );

            if let Some(hourly) = pipeline.filtered_hourly(&selection) {
                let summary = dataset_summary(&hourly);
                info!(
                    rows = summary.rows,
                    total_rentals = summary.total_rentals,
                    "Hourly selection summary"
                );
            }
        }
    }

    Ok(())
}

fn labels(codes: &BTreeSet<u8>, label: fn(u8) -> Option<&'static str>) -> Vec<&'static str> {
    codes.iter().filter_map(|c| label(*c)).collect()
}

/// Logs the selection by name. Weather codes only narrow hourly data, so a
/// narrowed weather set without hourly data gets a warning.
fn log_selection(pipeline: &Pipeline, selection: &Selection) {
    let weather = selection.weather.as_ref().map(|w| labels(w, weather_label));
    info!(
        year = selection.calendar_year(),
        seasons = ?labels(&selection.seasons, season_label),
        weather = ?weather,
        "Selection"
    );

    let narrowed = weather.is_some_and(|w| w.len() < ALL_WEATHER.len());
    if narrowed && !pipeline.has_hourly() {
        warn!("Weather selection has no effect without hourly data");
    }
}
