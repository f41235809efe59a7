//! Holiday calendars.
//!
//! The wage and payday calculations only need to know whether a date is a
//! weekend or a public holiday. That knowledge is injected through the
//! [`HolidayCalendar`] trait so the engine itself stays free of any
//! national calendar data.

mod holiday_list;
mod japan;

use chrono::{Datelike, NaiveDate, Weekday};

pub use holiday_list::HolidayList;
pub use japan::JapaneseHolidays;

/// Answers weekend and public holiday questions for a calendar.
///
/// # Example
///
/// ```
/// use shift_payroll::calendar::{HolidayCalendar, JapaneseHolidays};
/// use chrono::NaiveDate;
///
/// let calendar = JapaneseHolidays::new();
/// let culture_day = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
/// assert!(calendar.is_holiday(culture_day));
/// assert!(calendar.is_rest_day(culture_day));
/// assert_eq!(calendar.holiday_name(culture_day), Some("文化の日"));
/// ```
pub trait HolidayCalendar {
    /// A short name for logging.
    fn name(&self) -> &str;

    /// The name of the public holiday on `date`, if any.
    fn holiday_name(&self, date: NaiveDate) -> Option<&str>;

    /// Whether `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether `date` is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Whether `date` is a weekend or a public holiday.
    fn is_rest_day(&self, date: NaiveDate) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }
}
