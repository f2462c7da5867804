//! # Storage Layer
//!
//! This module holds every record the cabinet knows about. The [`RecordService`]
//! trait is the boundary the command layer talks to; [`RecordStore`] is the
//! in-memory implementation.
//!
//! ## Layout
//!
//! ```text
//! records:         [ #1 Jon Smith 3/5/1990 | #2 Ann Smith 7/1/1985 | ... ]   (owned, insertion order)
//!                        ▲                        ▲
//! first_names:  "JON" ───┘          "ANN" ────────┘
//! last_names:   "SMITH" ─── [0, 1]
//! dates:        "3/5/1990" ─── [0]     "7/1/1985" ─── [1]
//! ```
//!
//! Indexes store row positions into `records`. Records are never removed, so a row
//! stays valid for the lifetime of the store.
//!
//! ## Invariant
//!
//! After every operation, each record has exactly one entry in each of the three
//! indexes, filed under the key derived from its current field value. Create and
//! edit validate first and only then touch storage, so a rejected candidate leaves
//! everything as it was.
//!
//! ## Ids
//!
//! A new record gets `count + 1`. That is collision free only because nothing is
//! ever deleted; adding deletion means switching to a separate counter.

use crate::error::{CabinetError, Result};
use crate::model::{Record, RecordData, RecordId};
use crate::snapshot::Snapshot;
use crate::validation::{RecordValidator, RuleSet};
use chrono::NaiveDate;
use tracing::{debug, trace};

pub mod index;

use index::{date_key, name_key, FieldIndex};

/// Abstract interface for record storage.
pub trait RecordService {
    /// Validate and store a new record, returning its id.
    fn create_record(&mut self, data: RecordData) -> Result<RecordId>;

    /// All records in insertion order.
    fn get_records(&self) -> Vec<&Record>;

    fn get_record(&self, id: RecordId) -> Option<&Record>;

    /// Number of stored records.
    fn get_stat(&self) -> usize;

    /// Validate and overwrite every field of an existing record.
    fn edit_record(&mut self, id: RecordId, data: RecordData) -> Result<()>;

    fn find_by_first_name(&self, first_name: &str) -> Result<Vec<&Record>>;

    fn find_by_last_name(&self, last_name: &str) -> Result<Vec<&Record>>;

    fn find_by_date_of_birth(&self, date_of_birth: NaiveDate) -> Vec<&Record>;

    /// Copy of the current records, detached from later changes.
    fn make_snapshot(&self) -> Snapshot;
}

/// The three index keys a record's fields derive.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexKeys {
    first_name: String,
    last_name: String,
    date_of_birth: String,
}

impl IndexKeys {
    fn of(first_name: &str, last_name: &str, date_of_birth: NaiveDate) -> Self {
        Self {
            first_name: name_key(first_name),
            last_name: name_key(last_name),
            date_of_birth: date_key(date_of_birth),
        }
    }

    fn of_record(record: &Record) -> Self {
        Self::of(&record.first_name, &record.last_name, record.date_of_birth)
    }

    fn of_data(data: &RecordData) -> Self {
        Self::of(&data.first_name, &data.last_name, data.date_of_birth)
    }
}

pub struct RecordStore<V: RecordValidator = RuleSet> {
    records: Vec<Record>,
    first_names: FieldIndex,
    last_names: FieldIndex,
    dates_of_birth: FieldIndex,
    validator: V,
}

impl<V: RecordValidator> RecordStore<V> {
    pub fn new(validator: V) -> Self {
        Self {
            records: Vec::new(),
            first_names: FieldIndex::new(),
            last_names: FieldIndex::new(),
            dates_of_birth: FieldIndex::new(),
            validator,
        }
    }

    fn rows_to_records(&self, rows: &[usize]) -> Vec<&Record> {
        rows.iter().filter_map(|&row| self.records.get(row)).collect()
    }
}

impl Default for RecordStore<RuleSet> {
    fn default() -> Self {
        Self::new(RuleSet::default_rules())
    }
}

impl<V: RecordValidator> RecordService for RecordStore<V> {
    fn create_record(&mut self, data: RecordData) -> Result<RecordId> {
        self.validator.validate(&data)?;

        let id = RecordId::try_from(self.records.len() + 1)
            .map_err(|_| CabinetError::invalid_argument("id", "Record id space is exhausted."))?;
        let row = self.records.len();
        let keys = IndexKeys::of_data(&data);

        self.first_names.insert(keys.first_name, row);
        self.last_names.insert(keys.last_name, row);
        self.dates_of_birth.insert(keys.date_of_birth, row);
        self.records.push(Record::new(id, data));

        debug!(id, row, "record created");
        Ok(id)
    }

    fn get_records(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    fn get_record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    fn get_stat(&self) -> usize {
        self.records.len()
    }

    fn edit_record(&mut self, id: RecordId, data: RecordData) -> Result<()> {
        let row = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CabinetError::RecordNotFound(id))?;

        self.validator.validate(&data)?;

        let old = IndexKeys::of_record(&self.records[row]);
        let new = IndexKeys::of_data(&data);

        if self
            .first_names
            .relocate(&old.first_name, new.first_name.clone(), row)
        {
            trace!(id, from = %old.first_name, to = %new.first_name, "first name index moved");
        }
        if self
            .last_names
            .relocate(&old.last_name, new.last_name.clone(), row)
        {
            trace!(id, from = %old.last_name, to = %new.last_name, "last name index moved");
        }
        if self
            .dates_of_birth
            .relocate(&old.date_of_birth, new.date_of_birth.clone(), row)
        {
            trace!(id, from = %old.date_of_birth, to = %new.date_of_birth, "date of birth index moved");
        }

        self.records[row].apply(data);
        debug!(id, row, "record updated");
        Ok(())
    }

    fn find_by_first_name(&self, first_name: &str) -> Result<Vec<&Record>> {
        if first_name.trim().is_empty() {
            return Err(CabinetError::invalid_argument(
                "first_name",
                "First name cannot be null or white space.",
            ));
        }
        Ok(self.rows_to_records(self.first_names.rows(&name_key(first_name))))
    }

    fn find_by_last_name(&self, last_name: &str) -> Result<Vec<&Record>> {
        if last_name.trim().is_empty() {
            return Err(CabinetError::invalid_argument(
                "last_name",
                "Last name cannot be null or white space.",
            ));
        }
        Ok(self.rows_to_records(self.last_names.rows(&name_key(last_name))))
    }

    fn find_by_date_of_birth(&self, date_of_birth: NaiveDate) -> Vec<&Record> {
        self.rows_to_records(self.dates_of_birth.rows(&date_key(date_of_birth)))
    }

    fn make_snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.iter().cloned())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use rust_decimal::Decimal;

    /// A store with a clock pinned to 1-Jun-2024 so dates of birth never age into
    /// the future.
    pub struct StoreFixture {
        pub store: RecordStore<RuleSet>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    pub fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    pub fn person(first: &str, last: &str, year: i32, month: u32, day: u32) -> RecordData {
        RecordData::new(
            first,
            last,
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            212,
            Decimal::new(150000, 2),
            'M',
        )
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::with_rules(RuleSet::default_rules())
        }

        pub fn with_rules(rules: RuleSet) -> Self {
            Self {
                store: RecordStore::new(rules.with_today(fixed_today())),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let first = format!("First{}", i + 1);
                let last = format!("Last{}", i + 1);
                self.store
                    .create_record(person(&first, &last, 1980, 1, 1 + (i as u32 % 28)))
                    .unwrap();
            }
            self
        }

        pub fn with_person(mut self, first: &str, last: &str, year: i32, month: u32, day: u32) -> Self {
            self.store
                .create_record(person(first, last, year, month, day))
                .unwrap();
            self
        }
    }
}
