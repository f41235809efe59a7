//! Calendar month arithmetic.
//!
//! Closing months and displayed months are both plain `(year, month)` pairs.
//! [`YearMonth`] keeps month offsets and year rollover in one place so the
//! payday and period code never has to wrap month indices by hand.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

/// Years the engine computes pay for. Payday and period lookups reach one
/// month to either side, which must stay representable and before the
/// never-due date in year 9999.
pub const PAYROLL_YEARS: RangeInclusive<i32> = 1..=9998;

/// A calendar month of a specific year, with a 1-based month number.
///
/// # Example
///
/// ```
/// use shift_payroll::models::YearMonth;
///
/// let january = YearMonth::new(2026, 1).unwrap();
/// let december = january.offset(-1);
/// assert_eq!((december.year(), december.month()), (2025, 12));
/// assert_eq!(december.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, returning `None` when `month` is outside `1..=12`
    /// or the year is outside of chrono's supported range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves `months` months forwards (positive) or backwards (negative),
    /// rolling the year over as needed.
    pub fn offset(self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// The following month.
    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// The preceding month.
    pub fn previous(self) -> Self {
        self.offset(-1)
    }

    /// The first day of the month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("Valid first day of month")
    }

    /// The number of days in the month.
    pub fn days_in_month(self) -> u32 {
        self.last_day().day()
    }

    /// The last day of the month.
    pub fn last_day(self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("Valid last day of month")
    }

    /// The given day of the month, clamped into `1..=days_in_month`.
    ///
    /// ```
    /// use shift_payroll::models::YearMonth;
    /// use chrono::NaiveDate;
    ///
    /// let february = YearMonth::new(2025, 2).unwrap();
    /// assert_eq!(february.day(30), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    /// ```
    pub fn day(self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days_in_month());
        NaiveDate::from_ymd_opt(self.year, self.month, day).expect("Valid clamped day of month")
    }

    /// Whether pay can be computed for this month and both of its neighbours.
    pub fn is_payroll_month(self) -> bool {
        PAYROLL_YEARS.contains(&self.year)
    }

    /// Whether `date` falls inside this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
