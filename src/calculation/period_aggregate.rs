//! Pay period aggregation.
//!
//! This module sums the wages and worked minutes of every shift a workplace
//! logged inside one of its pay periods.

use crate::calendar::HolidayCalendar;
use crate::models::{DayOfMonth, PayPeriod, SalaryDetail, Shift, Workplace, YearMonth};

use super::shift_wage::compute_shift_wage;

/// The pay of one workplace for one pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodResult {
    /// Id of the workplace.
    pub workplace_id: String,
    /// Name of the workplace.
    pub workplace_name: String,
    /// The aggregated pay period.
    pub period: PayPeriod,
    /// Total pay in whole yen.
    pub salary: i64,
    /// Total worked minutes.
    pub minutes: i64,
}

impl PeriodResult {
    /// Label of the pay period, e.g. `"5月16日〜6月15日"`.
    pub fn period_str(&self) -> String {
        self.period.label()
    }
}

impl From<PeriodResult> for SalaryDetail {
    fn from(result: PeriodResult) -> Self {
        SalaryDetail {
            period_str: result.period_str(),
            workplace_name: result.workplace_name,
            salary: result.salary,
            minutes: result.minutes,
        }
    }
}

/// Aggregates the pay period of `workplace` that closes in `closing_month`.
///
/// A workplace without a closing day is treated as closing at the end of
/// the month.
///
/// # Arguments
///
/// * `closing_month` - The month the period closes in
/// * `workplace` - The workplace whose shifts are summed
/// * `shifts` - All shifts; those billed elsewhere or outside the period are skipped
/// * `calendar` - Holiday calendar used for the holiday allowance
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::aggregate_period;
/// use shift_payroll::calendar::JapaneseHolidays;
/// use shift_payroll::models::{DayOfMonth, Shift, Workplace, WorkplaceRef, YearMonth};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let workplace = Workplace {
///     id: "cafe".to_string(),
///     name: "Cafe".to_string(),
///     base_wage: Decimal::from(1000),
///     transport_fee: Decimal::ZERO,
///     closing_day: Some(DayOfMonth::Day(15)),
///     payday: Some(DayOfMonth::Day(25)),
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
/// let june = YearMonth::new(2025, 6).unwrap();
/// let result = aggregate_period(june, &workplace, &[shift], Some(&JapaneseHolidays::new()));
/// assert_eq!(result.salary, 7000);
/// assert_eq!(result.minutes, 420);
/// assert_eq!(result.period_str(), "5月16日〜6月15日");
/// ```
pub fn aggregate_period<C>(
    closing_month: YearMonth,
    workplace: &Workplace,
    shifts: &[Shift],
    calendar: Option<&C>,
) -> PeriodResult
where
    C: HolidayCalendar + ?Sized,
{
    let closing_day = workplace.closing_day.unwrap_or(DayOfMonth::EndOfMonth);
    let period = PayPeriod::for_closing_month(closing_month, closing_day);

    sum_shifts(
        workplace,
        period,
        shifts
            .iter()
            .filter(|shift| shift.is_billed_to(workplace) && period.contains(shift.start)),
        calendar,
    )
}

/// Sums the wages of `shifts` into a result for `period`.
pub(crate) fn sum_shifts<'a, C, I>(
    workplace: &Workplace,
    period: PayPeriod,
    shifts: I,
    calendar: Option<&C>,
) -> PeriodResult
where
    C: HolidayCalendar + ?Sized,
    I: IntoIterator<Item = &'a Shift>,
{
    let mut salary = 0i64;
    let mut minutes = 0i64;

    for shift in shifts {
        let wage = compute_shift_wage(shift, Some(workplace), calendar);
        salary = salary.saturating_add(wage.salary);
        minutes = minutes.saturating_add(wage.work_minutes);
    }

    PeriodResult {
        workplace_id: workplace.id.clone(),
        workplace_name: workplace.name.clone(),
        period,
        salary,
        minutes,
    }
}
