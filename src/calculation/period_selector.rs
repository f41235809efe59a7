//! Selection of the pay periods paid out in a displayed month.
//!
//! A pay period closes once a month and is paid either in its closing month
//! or in the month after. Looking at the periods closing last month and
//! this month therefore finds every period whose payday can fall in the
//! displayed month.

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{PaydayMarker, Workplace, YearMonth};

use super::payday::resolve_payday;

/// Month offsets scanned relative to the displayed month, in report order.
pub const MONTH_OFFSETS: [i32; 2] = [-1, 0];

/// A pay period whose payday falls inside the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCandidate<'a> {
    /// The workplace paying out.
    pub workplace: &'a Workplace,
    /// The month the period closes in.
    pub closing_month: YearMonth,
    /// The resolved payday.
    pub payday: NaiveDate,
}

/// Finds the pay periods of each workplace that are paid in `display_month`.
///
/// Candidates are returned in workplace order, and for each workplace the
/// period closing in the previous month comes before the one closing in
/// `display_month`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::select_periods_for_month;
/// use shift_payroll::calendar::HolidayList;
/// use shift_payroll::models::{DayOfMonth, PaydayRule, Workplace, YearMonth};
/// use rust_decimal::Decimal;
///
/// let workplace = Workplace {
///     id: "cafe".to_string(),
///     name: "Cafe".to_string(),
///     base_wage: Decimal::from(1000),
///     transport_fee: Decimal::ZERO,
///     closing_day: Some(DayOfMonth::Day(15)),
///     payday: Some(DayOfMonth::Day(25)),
///     payday_rule: PaydayRule::AsIs,
///     allowances: Default::default(),
/// };
/// let workplaces = [workplace];
///
/// let june = YearMonth::new(2025, 6).unwrap();
/// let candidates =
///     select_periods_for_month(june, &workplaces, &HolidayList::weekends_only()).unwrap();
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].closing_month, june);
/// ```
pub fn select_periods_for_month<'a, C>(
    display_month: YearMonth,
    workplaces: &'a [Workplace],
    calendar: &C,
) -> EngineResult<Vec<PeriodCandidate<'a>>>
where
    C: HolidayCalendar + ?Sized,
{
    let mut candidates = Vec::new();

    for workplace in workplaces {
        for offset in MONTH_OFFSETS {
            let closing_month = display_month.offset(offset);
            let payday = resolve_payday(closing_month, workplace, calendar)?;

            if display_month.contains(payday) {
                candidates.push(PeriodCandidate {
                    workplace,
                    closing_month,
                    payday,
                });
            }
        }
    }

    Ok(candidates)
}

/// Lists the paydays inside `display_month`, sorted by date.
///
/// Used to mark paydays on a month grid.
pub fn paydays_in_month<C>(
    display_month: YearMonth,
    workplaces: &[Workplace],
    calendar: &C,
) -> EngineResult<Vec<PaydayMarker>>
where
    C: HolidayCalendar + ?Sized,
{
    let mut markers: Vec<PaydayMarker> = Vec::new();

    for candidate in select_periods_for_month(display_month, workplaces, calendar)? {
        let duplicate = markers
            .iter()
            .any(|m| m.date == candidate.payday && m.workplace_id == candidate.workplace.id);
        if !duplicate {
            markers.push(PaydayMarker {
                date: candidate.payday,
                workplace_id: candidate.workplace.id.clone(),
                workplace_name: candidate.workplace.name.clone(),
            });
        }
    }

    markers.sort_by_key(|m| m.date);
    Ok(markers)
}
