use chrono::{Datelike, NaiveDate};

use crate::records::RentalRow;
use crate::views::types::MonthlyTrendRow;
use crate::views::utility::grouped_mean;

/// Mean rentals per calendar month, oldest first.
///
/// Months are keyed by (year, month), so the same month in two years gives
/// two rows.
pub fn monthly_trend<R: RentalRow>(records: &[R]) -> Vec<MonthlyTrendRow> {
    grouped_mean(
        records,
        |r| (r.date().year(), r.date().month()),
        |r| r.total_count() as f64,
    )
    .into_iter()
    .filter_map(|((year, month), mean_total)| {
        NaiveDate::from_ymd_opt(year, month, 1).map(|month| MonthlyTrendRow { month, mean_total })
    })
    .collect()
}
