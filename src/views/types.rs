//! Row types of the views handed to the chart renderer.

use chrono::NaiveDate;
use serde::Serialize;

/// Per-weekday means of each user type, plus the weekday's total rentals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdaySummary {
    pub weekday_code: u8,
    pub weekday: &'static str,
    pub mean_casual: f64,
    pub mean_registered: f64,
    pub total_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Casual,
    Registered,
}

/// Long-form row for grouped-bar charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyUsageRow {
    pub weekday: &'static str,
    pub user_type: UserType,
    pub average_usage: f64,
}

/// View 1: weekly split between casual and registered users.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyUserSplit {
    pub summary: Vec<WeekdaySummary>,
    pub long: Vec<WeeklyUsageRow>,
}

/// View 2 row: mean rentals per season and working-day status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalUsageRow {
    pub season: &'static str,
    pub working_day: &'static str,
    pub mean_total: f64,
}

/// View 3 row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: usize,
}

/// View 4 row. `lower` is exclusive except for the first band, `upper` is
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinCount {
    pub interval: &'static str,
    pub lower: u32,
    pub upper: u32,
    pub count: usize,
}

/// View 4: usage bins whose top edge is the largest total in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageBins {
    pub upper_bound: Option<u32>,
    pub bins: Vec<BinCount>,
}

/// View 5 row, keyed by the first day of the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrendRow {
    pub month: NaiveDate,
    pub mean_total: f64,
}

/// View 6 row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeOfDayRow {
    pub period: &'static str,
    pub mean_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub total_count: u32,
}

/// View 7: scatter series against total rentals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherCorrelation {
    pub temperature: Vec<ScatterPoint>,
    pub humidity: Vec<ScatterPoint>,
}

/// Headline numbers of a filtered daily set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub total_rentals: u64,
}
