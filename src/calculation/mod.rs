//! Calculation logic for the Shift Payroll Engine.
//!
//! This module contains the payday resolver, the selection of pay periods
//! paid in a displayed month, the per-period aggregation of shifts, the
//! minute-rate wage calculator, and the monthly salary report.

mod payday;
mod period_aggregate;
mod period_selector;
mod salary_report;
mod shift_wage;

pub use payday::{
    MAX_PAYDAY_ADJUSTMENT_DAYS, adjust_payday, never_due, resolve_day_number, resolve_payday,
};
pub use period_aggregate::{PeriodResult, aggregate_period};
pub use period_selector::{MONTH_OFFSETS, PeriodCandidate, paydays_in_month, select_periods_for_month};
pub use salary_report::{ONE_OFF_WORKPLACE_NAME, build_salary_report};
pub use shift_wage::{LATE_NIGHT_END_HOUR, LATE_NIGHT_START_HOUR, compute_shift_wage, is_late_night};
