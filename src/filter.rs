//! Narrowing record sets to a user selection.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::labels::{ALL_SEASONS, ALL_WEATHER};
use crate::records::RentalRow;

/// First calendar year covered by the dataset; `year_index` 0.
pub const BASE_YEAR: i32 = 2011;

/// Year, seasons and (optionally) weather conditions to keep.
///
/// Empty sets are taken literally and match nothing. `weather: None` means
/// "do not filter on weather".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub year_index: u8,
    pub seasons: BTreeSet<u8>,
    pub weather: Option<BTreeSet<u8>>,
}

impl Selection {
    /// All seasons of the given calendar year, no weather restriction.
    ///
    /// Years before `BASE_YEAR`, or too far past it for a `u8` index, map to
    /// `u8::MAX`, which no record carries.
    pub fn for_year(calendar_year: i32) -> Self {
        Self {
            year_index: calendar_year
                .checked_sub(BASE_YEAR)
                .and_then(|i| u8::try_from(i).ok())
                .unwrap_or(u8::MAX),
            seasons: ALL_SEASONS.into_iter().collect(),
            weather: None,
        }
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = u8>) -> Self {
        self.seasons = seasons.into_iter().collect();
        self
    }

    pub fn with_weather(mut self, weather: impl IntoIterator<Item = u8>) -> Self {
        self.weather = Some(weather.into_iter().collect());
        self
    }

    /// Same selection with every weather condition allowed.
    pub fn with_all_weather(self) -> Self {
        self.with_weather(ALL_WEATHER)
    }

    /// Same selection without the weather restriction.
    pub fn without_weather(mut self) -> Self {
        self.weather = None;
        self
    }

    pub fn calendar_year(&self) -> i32 {
        BASE_YEAR + self.year_index as i32
    }

    pub fn matches<R: RentalRow>(&self, record: &R) -> bool {
        record.year_index() == self.year_index
            && self.seasons.contains(&record.season())
            && self
                .weather
                .as_ref()
                .is_none_or(|w| w.contains(&record.weather_situation()))
    }
}

/// Returns the records matching `selection`, in their original order.
pub fn filter_records<R: RentalRow + Clone>(records: &[R], selection: &Selection) -> Vec<R> {
    records
        .iter()
        .filter(|r| selection.matches(*r))
        .cloned()
        .collect()
}
