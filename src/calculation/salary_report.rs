//! Salary report for a displayed month.
//!
//! The report lists one row per pay period whose payday falls in the
//! displayed month, and the total of those rows. Each pay period is counted
//! at most once, however many times it is selected.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calendar::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{
    DayOfMonth, PayPeriod, SalaryReport, ScheduleOverride, Shift, Workplace, YearMonth,
};

use super::payday::resolve_payday;
use super::period_aggregate::{PeriodResult, aggregate_period, sum_shifts};
use super::period_selector::select_periods_for_month;

/// Display name of the rows produced by one-off shifts.
pub const ONE_OFF_WORKPLACE_NAME: &str = "単発バイト";

/// Builds the salary report of the month containing `display_date`.
///
/// Registered workplaces come first, in the order given, followed by the
/// one-off shifts grouped per calendar day. Rows that pay nothing are left
/// out.
///
/// # Returns
///
/// An empty report when there are no workplaces or no calendar, or
/// [`EngineError::PaydayAdjustmentExhausted`](crate::error::EngineError::PaydayAdjustmentExhausted)
/// when a payday cannot be moved to a business day.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::build_salary_report;
/// use shift_payroll::calendar::JapaneseHolidays;
/// use shift_payroll::models::{DayOfMonth, PaydayRule, Shift, Workplace, WorkplaceRef};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let workplace = Workplace {
///     id: "cafe".to_string(),
///     name: "Cafe".to_string(),
///     base_wage: Decimal::from(1000),
///     transport_fee: Decimal::from(500),
///     closing_day: Some(DayOfMonth::Day(15)),
///     payday: Some(DayOfMonth::Day(25)),
///     payday_rule: PaydayRule::AsIs,
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
/// let report = build_salary_report(
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     &[shift],
///     &[workplace],
///     Some(&JapaneseHolidays::new()),
/// )
/// .unwrap();
/// assert_eq!(report.total_salary, 7500);
/// assert_eq!(report.details[0].period_str, "5月16日〜6月15日");
/// ```
pub fn build_salary_report<C>(
    display_date: NaiveDate,
    shifts: &[Shift],
    workplaces: &[Workplace],
    calendar: Option<&C>,
) -> EngineResult<SalaryReport>
where
    C: HolidayCalendar + ?Sized,
{
    if workplaces.is_empty() {
        return Ok(SalaryReport::empty());
    }
    let Some(calendar) = calendar else {
        warn!(
            display_date = %display_date,
            "No holiday calendar available, salary report is empty"
        );
        return Ok(SalaryReport::empty());
    };

    let display_month = YearMonth::from_date(display_date);
    let mut builder = ReportBuilder::default();

    for candidate in select_periods_for_month(display_month, workplaces, calendar)? {
        builder.push(aggregate_period(
            candidate.closing_month,
            candidate.workplace,
            shifts,
            Some(calendar),
        ));
    }

    for group in one_off_groups(shifts) {
        let workplace = one_off_workplace(&group);
        let payday = resolve_payday(YearMonth::from_date(group.date), &workplace, calendar)?;
        if !display_month.contains(payday) {
            continue;
        }

        builder.push(sum_shifts(
            &workplace,
            PayPeriod::single_day(group.date),
            group.shifts,
            Some(calendar),
        ));
    }

    let report = builder.finish();
    debug!(
        display_month = %display_month,
        rows = report.details.len(),
        total_salary = report.total_salary,
        "Built salary report"
    );

    Ok(report)
}

/// Accumulates report rows, skipping empty and already counted periods.
#[derive(Default)]
struct ReportBuilder {
    seen: HashSet<(String, NaiveDate, NaiveDate)>,
    report: SalaryReport,
}

impl ReportBuilder {
    fn push(&mut self, result: PeriodResult) {
        if result.salary <= 0 {
            return;
        }

        let key = (
            result.workplace_id.clone(),
            result.period.start_date,
            result.period.end_date,
        );
        if !self.seen.insert(key) {
            debug!(
                workplace_id = %result.workplace_id,
                period = %result.period_str(),
                "Skipping pay period already in the report"
            );
            return;
        }

        self.report.total_salary = self.report.total_salary.saturating_add(result.salary);
        self.report.details.push(result.into());
    }

    fn finish(self) -> SalaryReport {
        self.report
    }
}

/// One-off shifts worked on the same day under the same pay schedule.
struct OneOffGroup<'a> {
    date: NaiveDate,
    /// 1 for the first schedule seen on `date`, 2 for the next, and so on.
    ordinal: usize,
    schedule: ScheduleOverride,
    shifts: Vec<&'a Shift>,
}

/// One-off shifts grouped by start day and pay schedule, in date order.
///
/// Groups on the same day keep the order their first shift was given in.
/// Days whose payday could fall outside the payroll years are skipped.
fn one_off_groups(shifts: &[Shift]) -> Vec<OneOffGroup<'_>> {
    let mut groups: Vec<OneOffGroup<'_>> = Vec::new();
    for shift in shifts.iter().filter(|shift| shift.is_one_off()) {
        let date = shift.date();
        if !YearMonth::from_date(date).is_payroll_month() {
            debug!(
                shift_id = %shift.id,
                date = %date,
                "Skipping one-off shift outside the payroll years"
            );
            continue;
        }

        let schedule = shift.workplace.clone().unwrap_or_default();
        match groups
            .iter_mut()
            .find(|group| group.date == date && group.schedule == schedule)
        {
            Some(group) => group.shifts.push(shift),
            None => {
                let ordinal = 1 + groups.iter().filter(|group| group.date == date).count();
                groups.push(OneOffGroup {
                    date,
                    ordinal,
                    schedule,
                    shifts: vec![shift],
                });
            }
        }
    }

    groups.sort_by_key(|group| (group.date, group.ordinal));
    groups
}

/// The stand-in workplace of a group of one-off shifts.
///
/// Closing day and payday default to the day worked. Its base wage is
/// unused: one-off shifts are paid their own manual wage.
fn one_off_workplace(group: &OneOffGroup<'_>) -> Workplace {
    let own_day = DayOfMonth::Day(group.date.day());
    let id = match group.ordinal {
        1 => format!("one-off:{}", group.date),
        ordinal => format!("one-off:{}#{}", group.date, ordinal),
    };
    Workplace {
        id,
        name: ONE_OFF_WORKPLACE_NAME.to_string(),
        base_wage: Decimal::ZERO,
        transport_fee: Decimal::ZERO,
        closing_day: Some(group.schedule.closing_day.unwrap_or(own_day)),
        payday: Some(group.schedule.payday.unwrap_or(own_day)),
        payday_rule: group.schedule.payday_rule,
        allowances: Default::default(),
    }
}
