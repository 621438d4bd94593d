//! Usage-level categorization and binning of rental totals.

use crate::records::RentalRow;
use crate::views::types::{BinCount, CategoryCount, UsageBins};

/// Categories as `[lower, upper)` bounds. `None` means unbounded.
static USAGE_CATEGORIES: &[(&str, u32, Option<u32>)] = &[
    ("Low Usage", 0, Some(2000)),
    ("Medium Usage", 2000, Some(4000)),
    ("High Usage", 4000, None),
];

/// Fixed bin edges. The last bin runs from the last edge up to the largest
/// observed total.
static BIN_EDGES: &[(&str, u32, u32)] = &[
    ("Very Low", 0, 1000),
    ("Low", 1000, 3000),
    ("Medium", 3000, 5000),
];

static TOP_BIN: &str = "High";

fn category_index(total: u32) -> usize {
    USAGE_CATEGORIES
        .iter()
        .position(|(_, lower, upper)| total >= *lower && upper.is_none_or(|u| total < u))
        .unwrap_or(USAGE_CATEGORIES.len() - 1)
}

/// Counts records per usage category, in Low/Medium/High order.
///
/// Every record lands in exactly one category; empty categories are omitted.
pub fn usage_categories<R: RentalRow>(records: &[R]) -> Vec<CategoryCount> {
    let mut counts = vec![0usize; USAGE_CATEGORIES.len()];
    for r in records {
        counts[category_index(r.total_count())] += 1;
    }

    USAGE_CATEGORIES
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&(category, _, _), count)| CategoryCount { category, count })
        .collect()
}

/// Bins records by total rentals. Bins are right-closed; zero belongs to the
/// first bin. The top bin ends at the largest total in `records`, so the edges
/// move with the filter.
///
/// An empty input gives an empty view with no upper bound.
pub fn usage_bins<R: RentalRow>(records: &[R]) -> UsageBins {
    let Some(max) = records.iter().map(|r| r.total_count()).max() else {
        return UsageBins::default();
    };

    let (_, _, top_edge) = BIN_EDGES[BIN_EDGES.len() - 1];
    let mut edges: Vec<(&'static str, u32, u32)> = BIN_EDGES.to_vec();
    if max > top_edge {
        edges.push((TOP_BIN, top_edge, max));
    }

    let mut counts = vec![0usize; edges.len()];
    for r in records {
        let total = r.total_count();
        if let Some(idx) = edges.iter().position(|(_, _, upper)| total <= *upper) {
            counts[idx] += 1;
        }
    }

    let bins = edges
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|((interval, lower, upper), count)| BinCount {
            interval,
            lower,
            upper,
            count,
        })
        .collect();

    UsageBins {
        upper_bound: Some(max),
        bins,
    }
}
