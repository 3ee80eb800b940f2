//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayrollEngine;
use crate::config::ConfigLoader;
use crate::store::{InMemoryTimeEntryStore, TimeEntryRepository};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// payroll engine built from the loaded configuration, and the time-entry
/// repository.
#[derive(Clone)]
pub struct AppState {
    /// The payroll engine.
    engine: Arc<PayrollEngine>,
    /// Storage for time entries.
    repository: Arc<dyn TimeEntryRepository>,
}

impl AppState {
    /// Creates a new application state from loaded configuration, backed by
    /// an empty in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_repository(
            PayrollEngine::from_config(config.config()),
            Arc::new(InMemoryTimeEntryStore::new()),
        )
    }

    /// Creates a new application state from an engine and a repository.
    pub fn with_repository(
        engine: PayrollEngine,
        repository: Arc<dyn TimeEntryRepository>,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            repository,
        }
    }

    /// Returns a reference to the payroll engine.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }

    /// Returns a reference to the time-entry repository.
    pub fn repository(&self) -> &dyn TimeEntryRepository {
        self.repository.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
