//! A calendar backed by an explicit list of holidays.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::HolidayCalendar;

/// Weekends plus a fixed set of named holidays.
///
/// # Example
///
/// ```
/// use shift_payroll::calendar::{HolidayCalendar, HolidayList};
/// use chrono::NaiveDate;
///
/// let founding_day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let calendar = HolidayList::new([(founding_day, "Founding Day")]);
/// assert!(calendar.is_holiday(founding_day));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 9, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayList {
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidayList {
    /// Creates a calendar from `(date, name)` pairs.
    pub fn new<I, S>(holidays: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, S)>,
        S: Into<String>,
    {
        Self {
            holidays: holidays
                .into_iter()
                .map(|(date, name)| (date, name.into()))
                .collect(),
        }
    }

    /// A calendar where only weekends are rest days.
    pub fn weekends_only() -> Self {
        Self::default()
    }

    /// Number of listed holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Whether no holidays are listed.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayCalendar for HolidayList {
    fn name(&self) -> &str {
        "holiday list"
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_only_calendar() {
        let calendar = HolidayList::weekends_only();
        assert!(calendar.is_empty());
        // 2025-06-14 is a Saturday, 2025-06-16 a Monday
        assert!(calendar.is_rest_day(date(2025, 6, 14)));
        assert!(calendar.is_rest_day(date(2025, 6, 15)));
        assert!(!calendar.is_rest_day(date(2025, 6, 16)));
    }

    #[test]
    fn test_listed_holiday_is_rest_day() {
        let calendar = HolidayList::new([(date(2025, 6, 16), "Store Holiday")]);
        assert_eq!(calendar.len(), 1);
        assert!(calendar.is_holiday(date(2025, 6, 16)));
        assert!(!calendar.is_weekend(date(2025, 6, 16)));
        assert!(calendar.is_rest_day(date(2025, 6, 16)));
        assert_eq!(calendar.holiday_name(date(2025, 6, 16)), Some("Store Holiday"));
    }
}
