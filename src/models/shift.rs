//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct for representing logged work
//! shifts, and [`WorkplaceRef`] for the workplace a shift is billed to.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayOfMonth, PaydayRule, Workplace};

/// The sentinel workplace id of an ad hoc, one-off engagement.
pub const ONE_OFF_WORKPLACE_ID: &str = "one-off";

/// The sentinel workplace id of a non-billable placeholder shift.
pub const UNASSIGNED_WORKPLACE_ID: &str = "none";

/// The workplace a shift is billed to.
///
/// Serialized as a plain string: a registered workplace id, `"one-off"` or
/// `"none"`. An empty string is read as `"none"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkplaceRef {
    /// A registered workplace.
    Registered(String),
    /// An ad hoc engagement paid at the shift's own manual wage.
    OneOff,
    /// A placeholder that never pays.
    Unassigned,
}

impl WorkplaceRef {
    /// Whether this reference points at the registered workplace `id`.
    pub fn is_workplace(&self, id: &str) -> bool {
        matches!(self, WorkplaceRef::Registered(own) if own == id)
    }
}

impl From<String> for WorkplaceRef {
    fn from(id: String) -> Self {
        match id.as_str() {
            ONE_OFF_WORKPLACE_ID => WorkplaceRef::OneOff,
            UNASSIGNED_WORKPLACE_ID | "" => WorkplaceRef::Unassigned,
            _ => WorkplaceRef::Registered(id),
        }
    }
}

impl From<WorkplaceRef> for String {
    fn from(reference: WorkplaceRef) -> Self {
        match reference {
            WorkplaceRef::Registered(id) => id,
            WorkplaceRef::OneOff => ONE_OFF_WORKPLACE_ID.to_string(),
            WorkplaceRef::Unassigned => UNASSIGNED_WORKPLACE_ID.to_string(),
        }
    }
}

/// Pay schedule stored on a one-off shift.
///
/// Missing fields fall back to the shift's own date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleOverride {
    /// Closing day of the synthesized pay period.
    #[serde(default)]
    pub closing_day: Option<DayOfMonth>,
    /// Payday of the synthesized pay period.
    #[serde(default)]
    pub payday: Option<DayOfMonth>,
    /// Payday rule of the synthesized pay period.
    #[serde(default)]
    pub payday_rule: PaydayRule,
}

/// Represents a logged work shift.
///
/// `start` and `end` are local date-times; the data-access layer converts
/// stored timestamps before they reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The workplace this shift is billed to.
    pub workplace_id: WorkplaceRef,
    /// The start time of the shift.
    pub start: NaiveDateTime,
    /// The end time of the shift.
    pub end: NaiveDateTime,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Hourly wage of a one-off shift.
    #[serde(default)]
    pub manual_wage: Option<Decimal>,
    /// Pay schedule of a one-off shift.
    #[serde(default)]
    pub workplace: Option<ScheduleOverride>,
}

impl Shift {
    /// Minutes between start and end, ignoring breaks.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Minutes worked once the break is deducted. Can be negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::{Shift, WorkplaceRef};
    /// use chrono::NaiveDateTime;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     workplace_id: WorkplaceRef::Registered("cafe".to_string()),
    ///     start: NaiveDateTime::parse_from_str("2025-06-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2025-06-10 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     break_minutes: 60,
    ///     manual_wage: None,
    ///     workplace: None,
    /// };
    /// assert_eq!(shift.worked_minutes(), 420);
    /// ```
    pub fn worked_minutes(&self) -> i64 {
        self.duration_minutes() - i64::from(self.break_minutes)
    }

    /// The calendar day the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether this is an ad hoc, one-off engagement.
    pub fn is_one_off(&self) -> bool {
        self.workplace_id == WorkplaceRef::OneOff
    }

    /// Whether this shift is billed to `workplace`.
    pub fn is_billed_to(&self, workplace: &Workplace) -> bool {
        self.workplace_id.is_workplace(&workplace.id)
    }
}
