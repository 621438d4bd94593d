use crate::labels::{season_label, working_day_label};
use crate::records::DailyRecord;
use crate::views::types::SeasonalUsageRow;
use crate::views::utility::grouped_mean;

/// Mean daily rentals per (season, working-day status), ordered by season
/// then working-day code. Combinations with no records are left out.
pub fn seasonal_usage(records: &[DailyRecord]) -> Vec<SeasonalUsageRow> {
    grouped_mean(
        records,
        |r| (r.season, r.working_day),
        |r| r.total_count as f64,
    )
    .into_iter()
    .map(|((season, working_day), mean_total)| SeasonalUsageRow {
        season: season_label(season).unwrap_or("Unknown"),
        working_day: working_day_label(working_day).unwrap_or("Unknown"),
        mean_total,
    })
    .collect()
}
