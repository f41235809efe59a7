//! Core data models for the Shift Payroll Engine.
//!
//! This module contains the input records (workplaces and shifts), the
//! derived pay period, and the salary report outputs.

mod pay_period;
mod salary_report;
mod shift;
mod workplace;
mod year_month;

pub use pay_period::PayPeriod;
pub use salary_report::{PaydayMarker, SalaryDetail, SalaryReport, ShiftWage};
pub use shift::{
    ONE_OFF_WORKPLACE_ID, ScheduleOverride, Shift, UNASSIGNED_WORKPLACE_ID, WorkplaceRef,
};
pub use workplace::{Allowance, AllowanceKind, Allowances, DayOfMonth, PaydayRule, Workplace};
pub use year_month::{PAYROLL_YEARS, YearMonth};
