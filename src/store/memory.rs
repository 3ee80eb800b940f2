//! In-memory time-entry store.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, FixedOffset};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeEntry;

use super::repository::TimeEntryRepository;

#[derive(Debug, Default)]
struct StoreState {
    entries: BTreeMap<u64, TimeEntry>,
    last_id: u64,
}

/// [`TimeEntryRepository`] backed by a map behind an `RwLock`.
///
/// Ids are never reused, even after a delete.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeEntry;
/// use payroll_engine::store::{InMemoryTimeEntryStore, TimeEntryRepository};
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryTimeEntryStore::new();
/// let stored = store.create(TimeEntry {
///     id: 0,
///     employee_id: 1,
///     employee_name: "Alice".to_string(),
///     employee_type: "FTE".to_string(),
///     start_time: DateTime::parse_from_rfc3339("2024-11-04T09:00:00Z").unwrap(),
///     end_time: DateTime::parse_from_rfc3339("2024-11-04T17:00:00Z").unwrap(),
///     hourly_rate: Decimal::new(20, 0),
///     total_pay: Decimal::ZERO,
///     notes: None,
///     years_of_service: 0,
///     country_code: None,
/// });
/// assert_eq!(stored.id, 1);
/// assert!(store.get(1).is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTimeEntryStore {
    state: RwLock<StoreState>,
}

impl InMemoryTimeEntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.read(|state| state.entries.len())
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl TimeEntryRepository for InMemoryTimeEntryStore {
    fn create(&self, mut entry: TimeEntry) -> TimeEntry {
        self.write(|state| {
            state.last_id += 1;
            entry.id = state.last_id;
            state.entries.insert(entry.id, entry.clone());
            entry
        })
    }

    fn get(&self, id: u64) -> Option<TimeEntry> {
        self.read(|state| state.entries.get(&id).cloned())
    }

    fn list(&self) -> Vec<TimeEntry> {
        self.read(|state| state.entries.values().cloned().collect())
    }

    fn update(&self, id: u64, entry: TimeEntry) -> EngineResult<TimeEntry> {
        self.write(|state| {
            let stored = state
                .entries
                .get_mut(&id)
                .ok_or(EngineError::EntryNotFound { id })?;
            let total_pay = entry.total_pay;
            stored.apply_changes(entry);
            stored.total_pay = total_pay;
            Ok(stored.clone())
        })
    }

    fn delete(&self, id: u64) -> EngineResult<()> {
        self.write(|state| {
            state
                .entries
                .remove(&id)
                .map(|_| ())
                .ok_or(EngineError::EntryNotFound { id })
        })
    }

    fn query_by_employee(
        &self,
        employee_id: u64,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Vec<TimeEntry> {
        let mut matches: Vec<TimeEntry> = self.read(|state| {
            state
                .entries
                .values()
                .filter(|entry| entry.employee_id == employee_id)
                .filter(|entry| entry.start_time >= from && entry.start_time < to)
                .cloned()
                .collect()
        });
        matches.sort_by_key(|entry| entry.start_time);
        matches
    }
}
