//! Aggregation over fetched Shopify records.
//!
//! Every function here is a single pass over an in-memory, bounded list.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::PaymentStatus;

/// Sum of quantities, treating a missing quantity as zero.
///
/// Quantities are signed: Shopify reports oversold inventory as negative and
/// the sum is not clamped.
#[must_use]
pub fn total_quantity<I>(quantities: I) -> i64
where
    I: IntoIterator<Item = Option<i64>>,
{
    quantities.into_iter().map(|q| q.unwrap_or(0)).sum()
}

/// Values accumulated per payment status bucket.
///
/// Buckets keep first-seen order so chart labels follow the order in which
/// statuses appear in the data. Serializes as a JSON object in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBuckets<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for StatusBuckets<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> StatusBuckets<V> {
    fn accumulate(&mut self, key: String, init: impl FnOnce() -> V, update: impl FnOnce(&mut V)) {
        if let Some((_, value)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            update(value);
        } else {
            let mut value = init();
            update(&mut value);
            self.entries.push((key, value));
        }
    }

    /// Value for a bucket key, if any order fell into it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Bucket keys in first-seen order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Bucket values, aligned with [`labels`](Self::labels).
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.entries.iter().map(|(_, v)| v).collect()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatusBuckets<u64> {
    /// Number of orders per payment status.
    #[must_use]
    pub fn count_by_status<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a PaymentStatus>,
    {
        let mut buckets = Self::default();
        for status in statuses {
            buckets.accumulate(status.bucket_key(), || 0, |n| *n += 1);
        }
        buckets
    }
}

impl StatusBuckets<Decimal> {
    /// Summed order value per payment status.
    #[must_use]
    pub fn totals_by_status<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = (&'a PaymentStatus, Decimal)>,
    {
        let mut buckets = Self::default();
        for (status, amount) in orders {
            buckets.accumulate(status.bucket_key(), || Decimal::ZERO, |total| *total += amount);
        }
        buckets
    }
}

impl<V: Serialize> Serialize for StatusBuckets<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(raw: &[&str]) -> Vec<PaymentStatus> {
        raw.iter().map(|s| PaymentStatus::from(*s)).collect()
    }

    #[test]
    fn test_total_quantity_sums() {
        assert_eq!(total_quantity([Some(3), Some(4), Some(5)]), 12);
    }

    #[test]
    fn test_total_quantity_empty_is_zero() {
        assert_eq!(total_quantity(std::iter::empty()), 0);
    }

    #[test]
    fn test_total_quantity_missing_counts_as_zero() {
        assert_eq!(total_quantity([Some(2), None, Some(1)]), 3);
    }

    #[test]
    fn test_total_quantity_keeps_negative_inventory() {
        assert_eq!(total_quantity([Some(5), Some(-2)]), 3);
    }

    #[test]
    fn test_count_by_status_groups() {
        let orders = statuses(&["PAID", "PAID", "PENDING"]);
        let buckets = StatusBuckets::<u64>::count_by_status(&orders);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get("PAID"), Some(&2));
        assert_eq!(buckets.get("PENDING"), Some(&1));
        assert_eq!(buckets.labels(), vec!["PAID", "PENDING"]);
    }

    #[test]
    fn test_count_by_status_normalizes_case() {
        let orders = statuses(&["pending", "Paid", "PAID", "PENDING"]);
        let buckets = StatusBuckets::<u64>::count_by_status(&orders);

        assert_eq!(buckets.labels(), vec!["PENDING", "PAID"]);
        assert_eq!(buckets.values(), vec![&2, &2]);
    }

    #[test]
    fn test_count_by_status_empty() {
        let buckets = StatusBuckets::<u64>::count_by_status(&Vec::new());
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_totals_by_status_sums_amounts() {
        let orders = statuses(&["PAID", "REFUNDED", "PAID"]);
        let amounts = [
            Decimal::new(1050, 2),
            Decimal::new(500, 2),
            Decimal::new(225, 2),
        ];
        let buckets = StatusBuckets::<Decimal>::totals_by_status(orders.iter().zip(amounts));

        assert_eq!(buckets.get("PAID"), Some(&Decimal::new(1275, 2)));
        assert_eq!(buckets.get("REFUNDED"), Some(&Decimal::new(500, 2)));
    }

    #[test]
    fn test_serializes_in_first_seen_order() {
        let orders = statuses(&["PENDING", "PAID", "PAID"]);
        let buckets = StatusBuckets::<u64>::count_by_status(&orders);
        let json = serde_json::to_string(&buckets).expect("serialize");
        assert_eq!(json, r#"{"PENDING":1,"PAID":2}"#);
    }
}
