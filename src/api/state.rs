//! Application state for the Shift Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::JapaneseHolidays;
use crate::config::ConfigLoader;
use crate::models::Workplace;

/// Shared application state.
///
/// Holds the loaded configuration: the registered workplaces and the
/// holiday calendar.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The workplaces of a request, or the configured ones when it names none.
    pub fn workplaces_or_configured<'a>(
        &'a self,
        requested: Option<&'a [Workplace]>,
    ) -> &'a [Workplace] {
        requested.unwrap_or_else(|| self.config.workplaces())
    }

    /// The holiday calendar.
    pub fn calendar(&self) -> &JapaneseHolidays {
        self.config.calendar()
    }
}
