use crate::labels::TimeOfDay;
use crate::records::HourlyRecord;
use crate::views::types::TimeOfDayRow;
use crate::views::utility::grouped_mean;

/// Mean hourly rentals per part of the day, in Morning/Afternoon/Evening/Night
/// order. Periods with no records are left out.
pub fn time_of_day_usage(records: &[HourlyRecord]) -> Vec<TimeOfDayRow> {
    grouped_mean(
        records.iter().filter_map(|r| TimeOfDay::from_hour(r.hour).map(|p| (p, r))),
        |(period, _)| *period,
        |(_, r)| r.total_count as f64,
    )
    .into_iter()
    .map(|(period, mean_total)| TimeOfDayRow {
        period: period.label(),
        mean_total,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::at_hour;

    #[test]
    fn test_periods_in_canonical_order() {
        let records = vec![
            at_hour(23, 10),
            at_hour(8, 100),
            at_hour(3, 30),
            at_hour(13, 200),
            at_hour(18, 300),
            at_hour(9, 300),
        ];
        let out = time_of_day_usage(&records);

        let layout: Vec<_> = out.iter().map(|r| (r.period, r.mean_total)).collect();
        assert_eq!(
            layout,
            vec![
                ("Morning", 200.0),
                ("Afternoon", 200.0),
                ("Evening", 300.0),
                ("Night", 20.0),
            ]
        );
    }

    #[test]
    fn test_hour_23_and_3_share_night() {
        let out = time_of_day_usage(&[at_hour(23, 40), at_hour(3, 20)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].period, "Night");
        assert_eq!(out[0].mean_total, 30.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(time_of_day_usage(&[]).is_empty());
    }
}
