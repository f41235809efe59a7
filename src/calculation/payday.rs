//! Payday resolution.
//!
//! This module works out on which calendar date the pay period closing in a
//! given month is paid, including the move to an earlier or later business
//! day when the payday falls on a weekend or public holiday.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayOfMonth, PaydayRule, Workplace, YearMonth};

/// Upper bound on the number of days a payday may be moved.
///
/// No run of weekends and holidays comes close to this; reaching it means
/// the holiday calendar is broken.
pub const MAX_PAYDAY_ADJUSTMENT_DAYS: u32 = 14;

/// The date returned for workplaces that are never paid.
///
/// Far enough in the future to never coincide with a displayed month.
pub fn never_due() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 1, 1).expect("Valid sentinel date")
}

/// Resolves a configured day to a day number within `month`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::resolve_day_number;
/// use shift_payroll::models::{DayOfMonth, YearMonth};
///
/// let april = YearMonth::new(2025, 4).unwrap();
/// assert_eq!(resolve_day_number(DayOfMonth::EndOfMonth, april), 30);
/// assert_eq!(resolve_day_number(DayOfMonth::Day(10), april), 10);
/// ```
pub fn resolve_day_number(day: DayOfMonth, month: YearMonth) -> u32 {
    day.resolve(month)
}

/// Resolves the payday of the pay period closing in `closing_month`.
///
/// The payday belongs to the closing month when its day number comes after
/// the closing day, and to the following month otherwise. If the workplace's
/// payday rule is not [`PaydayRule::AsIs`], the date is then moved one day
/// at a time until it is neither a weekend nor a holiday.
///
/// # Returns
///
/// - [`never_due`] when the workplace lacks a closing day or payday
/// - [`EngineError::PaydayAdjustmentExhausted`] when no business day is
///   found within [`MAX_PAYDAY_ADJUSTMENT_DAYS`]
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::resolve_payday;
/// use shift_payroll::calendar::JapaneseHolidays;
/// use shift_payroll::models::{DayOfMonth, PaydayRule, Workplace, YearMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let workplace = Workplace {
///     id: "cafe".to_string(),
///     name: "Cafe".to_string(),
///     base_wage: Decimal::from(1000),
///     transport_fee: Decimal::ZERO,
///     closing_day: Some(DayOfMonth::EndOfMonth),
///     payday: Some(DayOfMonth::Day(25)),
///     payday_rule: PaydayRule::MoveEarlier,
///     allowances: Default::default(),
/// };
///
/// // Closing 2025-04-30, payday 2025-05-25 is a Sunday: paid Friday the 23rd
/// let april = YearMonth::new(2025, 4).unwrap();
/// let payday = resolve_payday(april, &workplace, &JapaneseHolidays::new()).unwrap();
/// assert_eq!(payday, NaiveDate::from_ymd_opt(2025, 5, 23).unwrap());
/// ```
pub fn resolve_payday<C>(
    closing_month: YearMonth,
    workplace: &Workplace,
    calendar: &C,
) -> EngineResult<NaiveDate>
where
    C: HolidayCalendar + ?Sized,
{
    let (Some(closing_day), Some(payday)) = (workplace.closing_day, workplace.payday) else {
        return Ok(never_due());
    };

    let closing_day_num = resolve_day_number(closing_day, closing_month);
    let payday_month = if resolve_day_number(payday, closing_month) <= closing_day_num {
        closing_month.next()
    } else {
        closing_month
    };
    let scheduled = payday_month.day(resolve_day_number(payday, payday_month));

    adjust_payday(scheduled, workplace.payday_rule, &workplace.id, calendar)
}

/// Moves `scheduled` off weekends and holidays according to `rule`.
///
/// `workplace_id` only identifies the workplace in logs and errors.
pub fn adjust_payday<C>(
    scheduled: NaiveDate,
    rule: PaydayRule,
    workplace_id: &str,
    calendar: &C,
) -> EngineResult<NaiveDate>
where
    C: HolidayCalendar + ?Sized,
{
    let step = match rule {
        PaydayRule::AsIs => return Ok(scheduled),
        PaydayRule::MoveEarlier => Duration::days(-1),
        PaydayRule::MoveLater => Duration::days(1),
    };

    let mut adjusted = scheduled;
    let mut moved = 0;
    while calendar.is_rest_day(adjusted) {
        if moved == MAX_PAYDAY_ADJUSTMENT_DAYS {
            return Err(EngineError::PaydayAdjustmentExhausted {
                workplace_id: workplace_id.to_string(),
                start: scheduled,
                max_steps: MAX_PAYDAY_ADJUSTMENT_DAYS,
            });
        }
        adjusted += step;
        moved += 1;
    }

    if moved > 0 {
        debug!(
            workplace_id,
            calendar = calendar.name(),
            scheduled = %scheduled,
            adjusted = %adjusted,
            "Payday moved off a rest day"
        );
    }

    Ok(adjusted)
}
