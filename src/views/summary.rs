use crate::records::RentalRow;
use crate::views::types::DatasetSummary;

pub fn dataset_summary<R: RentalRow>(records: &[R]) -> DatasetSummary {
    DatasetSummary {
        rows: records.len(),
        first_date: records.iter().map(|r| r.date()).min(),
        last_date: records.iter().map(|r| r.date()).max(),
        total_rentals: records.iter().map(|r| r.total_count() as u64).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::DailyRecord;
    use crate::views::test_support::on;
    use chrono::NaiveDate;

    #[test]
    fn test_summary() {
        let records = vec![on(2011, 5, 2, 100), on(2011, 1, 9, 200), on(2011, 3, 1, 300)];
        let s = dataset_summary(&records);

        assert_eq!(s.rows, 3);
        assert_eq!(s.first_date, NaiveDate::from_ymd_opt(2011, 1, 9));
        assert_eq!(s.last_date, NaiveDate::from_ymd_opt(2011, 5, 2));
        assert_eq!(s.total_rentals, 600);
    }

    #[test]
    fn test_summary_empty() {
        let s = dataset_summary::<DailyRecord>(&[]);
        assert_eq!(s.rows, 0);
        assert_eq!(s.first_date, None);
        assert_eq!(s.total_rentals, 0);
    }
}
