//! Salary report models.
//!
//! These are the outputs of a salary computation: the wage of a single
//! shift, one row per paid pay period, and the report for a displayed month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The wage earned for a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftWage {
    /// Pay in whole yen, transport fee included.
    pub salary: i64,
    /// Minutes worked after the break is deducted.
    pub work_minutes: i64,
}

impl ShiftWage {
    /// A shift that pays nothing.
    pub const ZERO: ShiftWage = ShiftWage {
        salary: 0,
        work_minutes: 0,
    };
}

/// The pay for one workplace's pay period.
///
/// # Example
///
/// ```
/// use shift_payroll::models::SalaryDetail;
///
/// let detail = SalaryDetail {
///     workplace_name: "Cafe".to_string(),
///     period_str: "5月16日〜6月15日".to_string(),
///     salary: 7000,
///     minutes: 425,
/// };
/// assert_eq!(detail.hours_and_minutes(), (7, 5));
/// assert_eq!(detail.duration_label(), "7時間 05分");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDetail {
    /// Name of the workplace.
    pub workplace_name: String,
    /// Label of the pay period.
    pub period_str: String,
    /// Pay for the period in whole yen.
    pub salary: i64,
    /// Minutes worked in the period.
    pub minutes: i64,
}

impl SalaryDetail {
    /// Worked time split into whole hours and remaining minutes.
    pub fn hours_and_minutes(&self) -> (i64, i64) {
        (self.minutes.div_euclid(60), self.minutes.rem_euclid(60))
    }

    /// Worked time as displayed next to the period, e.g. `"7時間 05分"`.
    pub fn duration_label(&self) -> String {
        let (hours, minutes) = self.hours_and_minutes();
        format!("{}時間 {:02}分", hours, minutes)
    }
}

/// Everything paid out in a displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Sum of all detail salaries.
    pub total_salary: i64,
    /// One row per paid pay period.
    pub details: Vec<SalaryDetail>,
}

impl SalaryReport {
    /// A report with nothing paid.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A payday that falls inside a displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaydayMarker {
    /// The payday.
    pub date: NaiveDate,
    /// The workplace paying out.
    pub workplace_id: String,
    /// Display name of the workplace.
    pub workplace_name: String,
}
