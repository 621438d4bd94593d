//! Loader → Filter → Aggregator, for a daily dataset and an optional hourly one.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::filter::{Selection, filter_records};
use crate::loader::{LoadedSource, SourceCache};
use crate::records::{DailyRecord, HourlyRecord};
use crate::views::types::{
    CategoryCount, DatasetSummary, MonthlyTrendRow, SeasonalUsageRow, TimeOfDayRow, UsageBins,
    WeatherCorrelation, WeeklyUserSplit,
};
use crate::views::{
    dataset_summary, monthly_trend, seasonal_usage, time_of_day_usage, usage_bins,
    usage_categories, weather_correlation, weekly_user_split,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("data source {} unavailable: {reason}", path.display())]
    SourceUnavailable { path: PathBuf, reason: String },
}

/// Where the record sets come from. The hourly source is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub daily: PathBuf,
    pub hourly: Option<PathBuf>,
}

/// Every view a dashboard draws. The hourly views are present only when the
/// pipeline was built with hourly data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub selection: Selection,
    pub summary: DatasetSummary,
    pub weekly_user_split: WeeklyUserSplit,
    pub seasonal_usage: Vec<SeasonalUsageRow>,
    pub usage_categories: Vec<CategoryCount>,
    pub usage_bins: UsageBins,
    pub monthly_trend: Vec<MonthlyTrendRow>,
    pub time_of_day_usage: Option<Vec<TimeOfDayRow>>,
    pub weather_correlation: Option<WeatherCorrelation>,
}

/// Immutable record sets plus the operations that turn a selection into views.
#[derive(Debug, Clone)]
pub struct Pipeline {
    daily: Arc<[DailyRecord]>,
    hourly: Option<Arc<[HourlyRecord]>>,
}

fn require<R>(path: &Path, loaded: LoadedSource<R>) -> Result<Arc<[R]>, PipelineError> {
    if let Some(failure) = loaded.failure {
        return Err(PipelineError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: failure.to_string(),
        });
    }
    if loaded.records.is_empty() {
        return Err(PipelineError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: "no records".to_string(),
        });
    }
    Ok(loaded.records)
}

impl Pipeline {
    pub fn new(daily: Arc<[DailyRecord]>, hourly: Option<Arc<[HourlyRecord]>>) -> Self {
        Self { daily, hourly }
    }

    /// Loads the configured sources through `cache` and refuses to build if
    /// any of them is empty or failed to load. A refusal is logged at error level.
    #[tracing::instrument(
        err,
        skip(cache, sources),
        fields(daily = %sources.daily.display(), hourly = sources.hourly.is_some())
    )]
    pub fn from_cache(cache: &mut SourceCache, sources: &Sources) -> Result<Self, PipelineError> {
        let daily = require(&sources.daily, cache.daily(&sources.daily))?;
        let hourly = match &sources.hourly {
            Some(path) => Some(require(path, cache.hourly(path))?),
            None => None,
        };

        info!(
            daily_rows = daily.len(),
            hourly_rows = hourly.as_ref().map(|h| h.len()),
            "Pipeline ready"
        );
        Ok(Self::new(daily, hourly))
    }

    pub fn has_hourly(&self) -> bool {
        self.hourly.is_some()
    }

    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    /// Daily records matching the year and seasons of `selection`. The daily
    /// set is never narrowed by weather.
    pub fn filtered_daily(&self, selection: &Selection) -> Vec<DailyRecord> {
        filter_records(&self.daily[..], &selection.clone().without_weather())
    }

    /// Hourly records matching the full selection, weather included.
    pub fn filtered_hourly(&self, selection: &Selection) -> Option<Vec<HourlyRecord>> {
        self.hourly
            .as_ref()
            .map(|hourly| filter_records(&hourly[..], selection))
    }

    /// Filters, then computes every view for `selection`.
    #[tracing::instrument(skip(self), fields(year = selection.calendar_year()))]
    pub fn views(&self, selection: &Selection) -> DashboardViews {
        let daily = self.filtered_daily(selection);
        let hourly = self.filtered_hourly(selection);

        debug!(
            daily_rows = daily.len(),
            hourly_rows = hourly.as_ref().map(|h| h.len()),
            "Selection applied"
        );

        DashboardViews {
            selection: selection.clone(),
            summary: dataset_summary(&daily),
            weekly_user_split: weekly_user_split(&daily),
            seasonal_usage: seasonal_usage(&daily),
            usage_categories: usage_categories(&daily),
            usage_bins: usage_bins(&daily),
            monthly_trend: monthly_trend(&daily),
            time_of_day_usage: hourly.as_deref().map(time_of_day_usage),
            weather_correlation: hourly.as_ref().map(|_| weather_correlation(&daily)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{at_hour, on};

    fn pipeline(with_hourly: bool) -> Pipeline {
        let daily: Vec<DailyRecord> = vec![
            on(2011, 1, 3, 1500),
            on(2011, 2, 7, 2500),
            on(2012, 1, 2, 4500),
        ];
        let mut wet = at_hour(8, 50);
        wet.weather_situation = 3;
        let hourly = vec![at_hour(8, 100), at_hour(22, 20), wet];

        Pipeline::new(daily.into(), with_hourly.then(|| hourly.into()))
    }

    #[test]
    fn test_daily_only_has_no_hourly_views() {
        let views = pipeline(false).views(&Selection::for_year(2011));

        assert_eq!(views.summary.rows, 2);
        assert_eq!(views.monthly_trend.len(), 2);
        assert!(views.time_of_day_usage.is_none());
        assert!(views.weather_correlation.is_none());
    }

    #[test]
    fn test_hourly_views_present_with_hourly_data() {
        let views = pipeline(true).views(&Selection::for_year(2011));

        let periods = views.time_of_day_usage.unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].period, "Morning");
        assert_eq!(periods[0].mean_total, 75.0);
        assert_eq!(views.weather_correlation.unwrap().temperature.len(), 2);
    }

    #[test]
    fn test_weather_narrows_hourly_only() {
        let p = pipeline(true);
        let sel = Selection::for_year(2011).with_weather([1]);

        assert_eq!(p.filtered_daily(&sel).len(), 2);
        assert_eq!(p.filtered_hourly(&sel).unwrap().len(), 2);

        let views = p.views(&sel);
        let periods = views.time_of_day_usage.unwrap();
        assert_eq!(periods[0].mean_total, 100.0);
    }

    #[test]
    fn test_empty_selection_degrades_to_empty_views() {
        let views = pipeline(true).views(&Selection::for_year(2011).with_seasons([]));

        assert_eq!(views.summary.rows, 0);
        assert!(views.weekly_user_split.summary.is_empty());
        assert!(views.seasonal_usage.is_empty());
        assert!(views.usage_categories.is_empty());
        assert_eq!(views.usage_bins, UsageBins::default());
        assert!(views.monthly_trend.is_empty());
        assert_eq!(views.time_of_day_usage, Some(vec![]));
        assert_eq!(views.weather_correlation, Some(WeatherCorrelation::default()));
    }

    #[test]
    fn test_pipeline_leaves_source_records_untouched() {
        let p = pipeline(true);
        let before: Vec<DailyRecord> = p.daily().to_vec();
        let _ = p.views(&Selection::for_year(2011));
        assert_eq!(p.daily(), before.as_slice());
    }

    #[test]
    fn test_from_cache_refuses_missing_daily_source() {
        let sources = Sources {
            daily: std::env::temp_dir().join("bike_share_insights_pipeline_missing.csv"),
            hourly: None,
        };
        let _ = std::fs::remove_file(&sources.daily);

        let mut cache = SourceCache::new();
        let result = Pipeline::from_cache(&mut cache, &sources);
        assert!(matches!(result, Err(PipelineError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_from_cache_refuses_header_only_daily_source() {
        let path = std::env::temp_dir().join("bike_share_insights_pipeline_header_only.csv");
        std::fs::write(
            &path,
            "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,\
             temp,atemp,hum,windspeed,casual,registered,cnt\n",
        )
        .unwrap();

        let mut cache = SourceCache::new();
        let loaded = cache.daily(&path);
        assert!(loaded.failure.is_none());
        assert!(loaded.is_empty());

        let sources = Sources {
            daily: path.clone(),
            hourly: None,
        };
        match Pipeline::from_cache(&mut cache, &sources) {
            Err(PipelineError::SourceUnavailable { path: p, reason }) => {
                assert_eq!(p, path);
                assert_eq!(reason, "no records");
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }

        std::fs::remove_file(&path).unwrap();
    }
}
