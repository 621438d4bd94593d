use std::collections::BTreeMap;

use crate::labels::weekday_label;
use crate::records::DailyRecord;
use crate::views::types::{UserType, WeekdaySummary, WeeklyUsageRow, WeeklyUserSplit};
use crate::views::utility::MeanAcc;

#[derive(Default)]
struct WeekdayGroup {
    casual: MeanAcc,
    registered: MeanAcc,
    total: u64,
}

/// Groups daily records by weekday and compares casual against registered use.
///
/// Only weekdays present in `records` appear. The long form lists all casual
/// rows first, then all registered rows, each in weekday order.
pub fn weekly_user_split(records: &[DailyRecord]) -> WeeklyUserSplit {
    let mut groups: BTreeMap<u8, WeekdayGroup> = BTreeMap::new();

    for r in records {
        let g = groups.entry(r.weekday).or_default();
        g.casual.push(r.casual_count as f64);
        g.registered.push(r.registered_count as f64);
        g.total += r.total_count as u64;
    }

    let summary: Vec<WeekdaySummary> = groups
        .into_iter()
        .map(|(code, g)| WeekdaySummary {
            weekday_code: code,
            weekday: weekday_label(code).unwrap_or("Unknown"),
            mean_casual: g.casual.mean(),
            mean_registered: g.registered.mean(),
            total_count: g.total,
        })
        .collect();

    let casual = summary.iter().map(|s| WeeklyUsageRow {
        weekday: s.weekday,
        user_type: UserType::Casual,
        average_usage: s.mean_casual,
    });
    let registered = summary.iter().map(|s| WeeklyUsageRow {
        weekday: s.weekday,
        user_type: UserType::Registered,
        average_usage: s.mean_registered,
    });
    let long = casual.chain(registered).collect();

    WeeklyUserSplit { summary, long }
}
