//! Secondary lookup indexes.
//!
//! A [`FieldIndex`] maps a normalized key to the rows (positions in the store's
//! primary list) whose field currently derives that key. Rows, not records, are
//! stored: the primary list owns every record, so an in-place edit is seen through
//! all three indexes without copying anything.
//!
//! Key derivation lives here so that insertion and lookup can never disagree:
//! - names: Unicode uppercase (`"jon"` and `"Jon"` both land on `"JON"`)
//! - dates: `M/d/yyyy` without leading zeros (`3/5/1990`)

use chrono::NaiveDate;
use std::collections::HashMap;

pub const DATE_KEY_FORMAT: &str = "%-m/%-d/%Y";

pub fn name_key(name: &str) -> String {
    name.to_uppercase()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

#[derive(Debug, Default, Clone)]
pub struct FieldIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `row` to the bucket for `key`, creating the bucket if needed.
    pub fn insert(&mut self, key: String, row: usize) {
        self.buckets.entry(key).or_default().push(row);
    }

    /// Removes `row` from the bucket for `key`. Empty buckets are dropped.
    pub fn remove(&mut self, key: &str, row: usize) -> bool {
        let Some(bucket) = self.buckets.get_mut(key) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|&r| r == row) else {
            return false;
        };
        bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(key);
        }
        true
    }

    /// Moves `row` from `old_key` to `new_key`. Same key: nothing moves and the
    /// row keeps its position in the bucket.
    pub fn relocate(&mut self, old_key: &str, new_key: String, row: usize) -> bool {
        if old_key == new_key {
            return false;
        }
        self.remove(old_key, row);
        self.insert(new_key, row);
        true
    }

    /// Rows under `key`, in insertion order. Empty for unknown keys.
    pub fn rows(&self, key: &str) -> &[usize] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_keys_ignore_case() {
        assert_eq!(name_key("jon"), "JON");
        assert_eq!(name_key("JoN"), name_key("jOn"));
        assert_eq!(name_key("Şahin"), "ŞAHIN");
    }

    #[test]
    fn date_keys_drop_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();
        assert_eq!(date_key(date), "3/5/1990");

        let date = NaiveDate::from_ymd_opt(2001, 12, 25).unwrap();
        assert_eq!(date_key(date), "12/25/2001");
    }

    #[test]
    fn insert_keeps_order_within_bucket() {
        let mut index = FieldIndex::new();
        index.insert("A".into(), 2);
        index.insert("A".into(), 0);
        index.insert("B".into(), 1);

        assert_eq!(index.rows("A"), &[2, 0]);
        assert_eq!(index.rows("B"), &[1]);
        assert!(index.rows("C").is_empty());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn remove_drops_empty_bucket() {
        let mut index = FieldIndex::new();
        index.insert("A".into(), 0);
        assert!(index.remove("A", 0));
        assert!(index.is_empty());
        assert!(!index.remove("A", 0));
    }

    #[test]
    fn relocate_moves_only_on_key_change() {
        let mut index = FieldIndex::new();
        index.insert("A".into(), 0);
        index.insert("A".into(), 1);

        assert!(!index.relocate("A", "A".into(), 0));
        assert_eq!(index.rows("A"), &[0, 1]);

        assert!(index.relocate("A", "B".into(), 0));
        assert_eq!(index.rows("A"), &[1]);
        assert_eq!(index.rows("B"), &[0]);
    }
}
