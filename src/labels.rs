//! Static code → label lookup tables.
//!
//! Codes are stored as small integers in the records and only turned into
//! names here, when a view is built for display.

use serde::Serialize;

static SEASONS: &[(u8, &str)] = &[(1, "Spring"), (2, "Summer"), (3, "Fall"), (4, "Winter")];

static WEEKDAYS: &[(u8, &str)] = &[
    (0, "Sunday"),
    (1, "Monday"),
    (2, "Tuesday"),
    (3, "Wednesday"),
    (4, "Thursday"),
    (5, "Friday"),
    (6, "Saturday"),
];

static WORKING_DAYS: &[(u8, &str)] = &[(0, "Non-Working Day"), (1, "Working Day")];

static WEATHER: &[(u8, &str)] = &[
    (1, "Clear"),
    (2, "Mist"),
    (3, "Light Precipitation"),
    (4, "Heavy Precipitation"),
];

/// Hour ranges `[start, end)` for each period. Night wraps midnight, so it
/// appears twice.
static TIME_OF_DAY: &[(u8, u8, TimeOfDay)] = &[
    (0, 5, TimeOfDay::Night),
    (5, 12, TimeOfDay::Morning),
    (12, 17, TimeOfDay::Afternoon),
    (17, 21, TimeOfDay::Evening),
    (21, 24, TimeOfDay::Night),
];

/// Every season code, in display order.
pub const ALL_SEASONS: [u8; 4] = [1, 2, 3, 4];

/// Every weather-situation code, in display order.
pub const ALL_WEATHER: [u8; 4] = [1, 2, 3, 4];

fn lookup(table: &'static [(u8, &'static str)], code: u8) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

pub fn season_label(code: u8) -> Option<&'static str> {
    lookup(SEASONS, code)
}

pub fn weekday_label(code: u8) -> Option<&'static str> {
    lookup(WEEKDAYS, code)
}

pub fn working_day_label(code: u8) -> Option<&'static str> {
    lookup(WORKING_DAYS, code)
}

pub fn weather_label(code: u8) -> Option<&'static str> {
    lookup(WEATHER, code)
}

/// Part of the day an hourly record falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Canonical display order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Classifies an hour of the day. Returns `None` for hours outside 0..=23.
    pub fn from_hour(hour: u8) -> Option<Self> {
        TIME_OF_DAY
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&hour))
            .map(|(_, _, period)| *period)
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}
