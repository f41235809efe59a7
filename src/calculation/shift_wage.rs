//! Minute-by-minute wage accrual for a single shift.
//!
//! The hourly wage can change at any minute of a shift: at 22:00 and 05:00
//! for the late-night allowance and at midnight when a shift runs into a
//! weekend or holiday. Walking the shift one minute at a time applies every
//! overlapping allowance window without special-casing the boundaries.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calendar::HolidayCalendar;
use crate::models::{Allowances, Shift, ShiftWage, Workplace, WorkplaceRef};

/// Hour at which late-night work begins (inclusive).
pub const LATE_NIGHT_START_HOUR: u32 = 22;

/// Hour at which late-night work ends (exclusive).
pub const LATE_NIGHT_END_HOUR: u32 = 5;

/// Whether the minute starting at `instant` is late-night work.
pub fn is_late_night(instant: NaiveDateTime) -> bool {
    let hour = instant.hour();
    hour >= LATE_NIGHT_START_HOUR || hour < LATE_NIGHT_END_HOUR
}

/// The hourly wage after the holiday allowance, if the day is a rest day.
fn holiday_adjusted_wage(base_wage: Decimal, allowances: &Allowances, rest_day: bool) -> Decimal {
    match allowances.holiday {
        Some(allowance) if rest_day => allowance.apply_holiday(base_wage),
        _ => base_wage,
    }
}

/// The hourly wage in effect for one minute.
fn minute_wage(
    base_wage: Decimal,
    allowances: &Allowances,
    rest_day: bool,
    late_night: bool,
) -> Decimal {
    let wage = holiday_adjusted_wage(base_wage, allowances, rest_day);
    match allowances.late_night {
        Some(allowance) if late_night => allowance.apply_late_night(wage),
        _ => wage,
    }
}

/// Computes the pay and worked minutes of a single shift.
///
/// The wage of each minute from `start` up to `end` is the base wage, with
/// the holiday allowance applied on weekends and holidays (a flat amount
/// replaces the wage, a multiplier scales it) and then the late-night
/// allowance between 22:00 and 05:00 (a multiplier scales the wage, a flat
/// amount is added). The break is deducted at the holiday-adjusted wage of
/// the day the shift starts. The transport fee is added once and the total
/// is rounded half-up to whole yen. Every minute started before `end` is
/// worked time, so a start with seconds pays its partial first minute.
///
/// One-off shifts are paid at their `manual_wage` and never receive a
/// transport fee.
///
/// # Returns
///
/// [`ShiftWage::ZERO`] when the calendar or workplace is missing, the shift
/// is unassigned, or no time is left once the break is deducted.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::compute_shift_wage;
/// use shift_payroll::calendar::JapaneseHolidays;
/// use shift_payroll::models::{Shift, Workplace, WorkplaceRef};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let workplace = Workplace {
///     id: "cafe".to_string(),
///     name: "Cafe".to_string(),
///     base_wage: Decimal::from(1000),
///     transport_fee: Decimal::from(500),
///     closing_day: None,
///     payday: None,
///     payday_rule: Default::default(),
///     allowances: Default::default(),
/// };
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     workplace_id: WorkplaceRef::Registered("cafe".to_string()),
///     start: NaiveDateTime::parse_from_str("2025-06-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2025-06-10 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     break_minutes: 60,
///     manual_wage: None,
///     workplace: None,
/// };
///
/// let wage = compute_shift_wage(&shift, Some(&workplace), Some(&JapaneseHolidays::new()));
/// assert_eq!(wage.salary, 7500);
/// assert_eq!(wage.work_minutes, 420);
/// ```
pub fn compute_shift_wage<C>(
    shift: &Shift,
    workplace: Option<&Workplace>,
    calendar: Option<&C>,
) -> ShiftWage
where
    C: HolidayCalendar + ?Sized,
{
    let (Some(workplace), Some(calendar)) = (workplace, calendar) else {
        return ShiftWage::ZERO;
    };
    if shift.workplace_id == WorkplaceRef::Unassigned || shift.end <= shift.start {
        return ShiftWage::ZERO;
    }

    let (base_wage, transport_fee) = if shift.is_one_off() {
        (shift.manual_wage.unwrap_or_default(), Decimal::ZERO)
    } else {
        (workplace.base_wage, workplace.transport_fee)
    };
    let allowances = &workplace.allowances;

    // Sum of the hourly wage in effect for every minute worked.
    let mut wage_minutes = Decimal::ZERO;
    let mut counted_minutes: i64 = 0;
    let mut rest_day: Option<(NaiveDate, bool)> = None;
    let mut current = shift.start;

    while current < shift.end {
        let date = current.date();
        let is_rest_day = match rest_day {
            Some((cached, value)) if cached == date => value,
            _ => {
                let value = calendar.is_rest_day(date);
                rest_day = Some((date, value));
                value
            }
        };

        wage_minutes += minute_wage(base_wage, allowances, is_rest_day, is_late_night(current));
        counted_minutes += 1;
        current += Duration::minutes(1);
    }

    // Every started minute counts, including a partial first minute.
    let work_minutes = counted_minutes - i64::from(shift.break_minutes);
    if work_minutes <= 0 {
        return ShiftWage::ZERO;
    }

    let break_wage = holiday_adjusted_wage(
        base_wage,
        allowances,
        calendar.is_rest_day(shift.start.date()),
    );
    let break_minutes = Decimal::from(shift.break_minutes);
    let accrued = (wage_minutes - break_wage * break_minutes) / Decimal::from(60);

    let salary = (accrued.max(Decimal::ZERO) + transport_fee)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    ShiftWage {
        salary: salary.to_i64().unwrap_or(i64::MAX),
        work_minutes,
    }
}
