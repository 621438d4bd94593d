use std::collections::BTreeMap;

/// Running sum and count for a mean. An empty accumulator averages to 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Groups `items` by `key` and averages `value` per group, ordered by key.
pub fn grouped_mean<T, K: Ord>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> f64,
) -> BTreeMap<K, f64> {
    let mut groups: BTreeMap<K, MeanAcc> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(value(&item));
    }
    groups.into_iter().map(|(k, acc)| (k, acc.mean())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator_is_zero() {
        assert_eq!(MeanAcc::default().mean(), 0.0);
    }

    #[test]
    fn test_accumulator_mean() {
        let mut acc = MeanAcc::default();
        for v in [1.0, 2.0, 3.0] {
            acc.push(v);
        }
        assert_eq!(acc.mean(), 2.0);
    }

    #[test]
    fn test_grouped_mean_orders_by_key() {
        let rows = [(2, 10.0), (1, 4.0), (2, 20.0), (1, 6.0)];
        let out = grouped_mean(rows.iter(), |r| r.0, |r| r.1);
        let pairs: Vec<_> = out.into_iter().collect();
        assert_eq!(pairs, vec![(1, 5.0), (2, 15.0)]);
    }
}
