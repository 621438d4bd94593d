//! Summary views derived from a filtered record set.
//!
//! Each view is a pure function of its input and returns a fresh,
//! serializable table for one chart. Empty input always yields an empty or
//! default view.

pub mod hourly;
pub mod monthly;
pub mod seasonal;
pub mod summary;
pub mod types;
pub mod usage;
pub mod utility;
pub mod weather;
pub mod weekly;

pub use hourly::time_of_day_usage;
pub use monthly::monthly_trend;
pub use seasonal::seasonal_usage;
pub use summary::dataset_summary;
pub use usage::{usage_bins, usage_categories};
pub use weather::weather_correlation;
pub use weekly::weekly_user_split;
