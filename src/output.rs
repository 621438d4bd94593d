//! Output formatting and persistence for dashboard views.
//!
//! Supports pretty-printing, JSON serialization, and one CSV file per view.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::pipeline::DashboardViews;
use csv::WriterBuilder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Logs the views using Rust's debug pretty-print format.
pub fn print_pretty(views: &DashboardViews) {
    debug!("{:#?}", views);
}

/// Renders the views as pretty-printed JSON.
pub fn to_json(views: &DashboardViews) -> Result<String> {
    Ok(serde_json::to_string_pretty(views)?)
}

/// Writes the views as pretty-printed JSON to `path`, or to stdout when
/// `path` is `None`.
pub fn write_json(path: Option<&Path>, views: &DashboardViews) -> Result<()> {
    let json = to_json(views)?;
    match path {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "Views written as JSON");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Writes `rows` to a new CSV file at `path`, header first.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV table");

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes one CSV per view into `dir`, creating it if needed. Returns the
/// paths written. Hourly views are skipped when absent.
pub fn export_views(dir: &Path, views: &DashboardViews) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::new();

    macro_rules! export {
        ($name:expr, $rows:expr) => {{
            let path = dir.join($name);
            write_table(&path, $rows)?;
            written.push(path);
        }};
    }

    export!("weekly_user_split.csv", &views.weekly_user_split.long);
    export!("weekday_summary.csv", &views.weekly_user_split.summary);
    export!("seasonal_usage.csv", &views.seasonal_usage);
    export!("usage_categories.csv", &views.usage_categories);
    export!("usage_bins.csv", &views.usage_bins.bins);
    export!("monthly_trend.csv", &views.monthly_trend);

    if let Some(periods) = &views.time_of_day_usage {
        export!("time_of_day_usage.csv", periods);
    }
    if let Some(weather) = &views.weather_correlation {
        export!("temperature_scatter.csv", &weather.temperature);
        export!("humidity_scatter.csv", &weather.humidity);
    }

    info!(dir = %dir.display(), files = written.len(), "Views exported");
    Ok(written)
}
