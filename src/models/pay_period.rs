//! Pay period model.
//!
//! A [`PayPeriod`] is the closing-day-to-closing-day span of a workplace. It
//! is derived from the closing month and closing day, never stored.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{DayOfMonth, YearMonth};

/// An inclusive span of days whose shifts are paid together.
///
/// The period runs from `00:00:00` on `start_date` to `23:59:59` on
/// `end_date`. Consecutive periods of the same workplace tile the calendar:
/// each one starts the day after the previous closing date.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{DayOfMonth, PayPeriod, YearMonth};
/// use chrono::NaiveDate;
///
/// let june = YearMonth::new(2025, 6).unwrap();
/// let period = PayPeriod::for_closing_month(june, DayOfMonth::Day(15));
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 5, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
/// assert_eq!(period.label(), "5月16日〜6月15日");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The closing day of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// The period that closes in `closing_month` on `closing_day`.
    pub fn for_closing_month(closing_month: YearMonth, closing_day: DayOfMonth) -> Self {
        let end_date = closing_month.day(closing_day.resolve(closing_month));
        let previous = closing_month.previous();
        let previous_end = previous.day(closing_day.resolve(previous));

        Self {
            start_date: previous_end + Duration::days(1),
            end_date,
        }
    }

    /// A period covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given instant falls within this pay period.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.contains_date(instant.date())
    }

    /// Human readable label, e.g. `"5月16日〜6月15日"`.
    pub fn label(&self) -> String {
        format!(
            "{}月{}日〜{}月{}日",
            self.start_date.month(),
            self.start_date.day(),
            self.end_date.month(),
            self.end_date.day()
        )
    }
}
