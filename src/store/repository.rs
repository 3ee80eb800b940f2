//! The repository abstraction over stored time entries.

use chrono::{DateTime, FixedOffset};

use crate::error::EngineResult;
use crate::models::TimeEntry;

/// Storage for time entries.
///
/// Implementations assign ids on [`create`](TimeEntryRepository::create) and
/// must be safe to share between request handlers.
pub trait TimeEntryRepository: Send + Sync {
    /// Stores a new entry, assigning the next id (starting at 1). Any id on
    /// the given entry is ignored.
    fn create(&self, entry: TimeEntry) -> TimeEntry;

    /// Returns the entry with the given id.
    fn get(&self, id: u64) -> Option<TimeEntry>;

    /// Returns every entry, ordered by id.
    fn list(&self) -> Vec<TimeEntry>;

    /// Applies the editable fields and total pay of `entry` to a stored entry.
    ///
    /// The stored id, employee id and country code are kept; see
    /// [`TimeEntry::apply_changes`].
    ///
    /// Fails with [`crate::error::EngineError::EntryNotFound`] if the id is unknown.
    fn update(&self, id: u64, entry: TimeEntry) -> EngineResult<TimeEntry>;

    /// Removes an entry.
    ///
    /// Fails with [`crate::error::EngineError::EntryNotFound`] if the id is unknown.
    fn delete(&self, id: u64) -> EngineResult<()>;

    /// Returns an employee's entries whose start instant lies in `[from, to)`,
    /// ordered by start instant.
    fn query_by_employee(
        &self,
        employee_id: u64,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Vec<TimeEntry>;
}
