//! Typed rows of the bike-sharing dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only accessors shared by the daily and hourly record kinds.
///
/// The filter and the count-based views are generic over this trait so that
/// both datasets go through the same code path.
pub trait RentalRow {
    fn date(&self) -> NaiveDate;
    fn year_index(&self) -> u8;
    fn season(&self) -> u8;
    fn weather_situation(&self) -> u8;
    fn total_count(&self) -> u32;
}

/// One row of the daily dataset (`day.csv`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: u8,
    #[serde(rename = "yr")]
    pub year_index: u8,
    #[serde(rename = "mnth")]
    pub month: u8,
    pub weekday: u8,
    #[serde(rename = "workingday")]
    pub working_day: u8,
    #[serde(rename = "weathersit")]
    pub weather_situation: u8,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "hum")]
    pub humidity: f64,
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    #[serde(rename = "casual")]
    pub casual_count: u32,
    #[serde(rename = "registered")]
    pub registered_count: u32,
    #[serde(rename = "cnt")]
    pub total_count: u32,
}

/// One row of the hourly dataset (`hour.csv`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourlyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: u8,
    #[serde(rename = "yr")]
    pub year_index: u8,
    #[serde(rename = "mnth")]
    pub month: u8,
    #[serde(rename = "hr")]
    pub hour: u8,
    pub weekday: u8,
    #[serde(rename = "workingday")]
    pub working_day: u8,
    #[serde(rename = "weathersit")]
    pub weather_situation: u8,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "hum")]
    pub humidity: f64,
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    #[serde(rename = "casual")]
    pub casual_count: u32,
    #[serde(rename = "registered")]
    pub registered_count: u32,
    #[serde(rename = "cnt")]
    pub total_count: u32,
}

macro_rules! impl_rental_row {
    ($ty:ty) => {
        impl RentalRow for $ty {
            fn date(&self) -> NaiveDate {
                self.date
            }

            fn year_index(&self) -> u8 {
                self.year_index
            }

            fn season(&self) -> u8 {
                self.season
            }

            fn weather_situation(&self) -> u8 {
                self.weather_situation
            }

            fn total_count(&self) -> u32 {
                self.total_count
            }
        }
    };
}

impl_rental_row!(DailyRecord);
impl_rental_row!(HourlyRecord);
