//! Configuration loading for the Shift Payroll Engine.
//!
//! This module loads the registered workplaces and any extra holidays from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} workplaces", config.workplaces().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CustomHoliday, HolidaysConfig, WorkplacesConfig};
