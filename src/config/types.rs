//! Configuration file structures.
//!
//! These are the strongly-typed shapes of the YAML files read by
//! [`ConfigLoader`](super::ConfigLoader).

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Workplace;

/// The contents of `workplaces.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkplacesConfig {
    /// Registered workplaces, in display order.
    pub workplaces: Vec<Workplace>,
}

/// A company or regional holiday observed on top of the national ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomHoliday {
    /// The day off.
    pub date: NaiveDate,
    /// Display name of the holiday.
    pub name: String,
}

/// The contents of `holidays.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// Extra holidays.
    #[serde(default)]
    pub holidays: Vec<CustomHoliday>,
}
