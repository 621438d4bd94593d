use crate::records::DailyRecord;
use crate::views::types::{ScatterPoint, WeatherCorrelation};

/// Temperature and humidity against total rentals, passed through as-is.
pub fn weather_correlation(records: &[DailyRecord]) -> WeatherCorrelation {
    let point = |x: f64, r: &DailyRecord| ScatterPoint {
        x,
        total_count: r.total_count,
    };

    WeatherCorrelation {
        temperature: records.iter().map(|r| point(r.temperature, r)).collect(),
        humidity: records.iter().map(|r| point(r.humidity, r)).collect(),
    }
}
