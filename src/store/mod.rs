//! Time-entry storage.
//!
//! The handlers depend on the [`TimeEntryRepository`] trait; the crate ships
//! [`InMemoryTimeEntryStore`], which keeps records for the life of the
//! process only.

mod memory;
mod repository;

pub use memory::InMemoryTimeEntryStore;
pub use repository::TimeEntryRepository;
