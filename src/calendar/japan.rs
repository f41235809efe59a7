//! Japanese national holiday calendar.
//!
//! Observes the holidays of the Act on National Holidays:
//! * Fixed days (New Year's Day, National Foundation Day, ...)
//! * Happy Monday days (Coming of Age Day, Marine Day, Respect for the Aged
//!   Day, Sports Day)
//! * Vernal and autumnal equinoxes (formula valid for 1980-2099)
//! * The 2019 enthronement days and the 2020/2021 Olympic moves
//! * Substitute holidays (振替休日) and citizens' holidays (国民の休日)
//!
//! Extra company or regional holidays can be layered on top.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::HolidayCalendar;

const SUBSTITUTE_HOLIDAY: &str = "振替休日";
const CITIZENS_HOLIDAY: &str = "国民の休日";

/// Japanese national holidays, optionally extended with extra dates.
///
/// # Example
///
/// ```
/// use shift_payroll::calendar::{HolidayCalendar, JapaneseHolidays};
/// use chrono::NaiveDate;
///
/// let calendar = JapaneseHolidays::new();
/// // 2025-05-06 is the substitute holiday for Greenery Day (Sunday 2025-05-04)
/// let date = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
/// assert_eq!(calendar.holiday_name(date), Some("振替休日"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JapaneseHolidays {
    additional: BTreeMap<NaiveDate, String>,
}

impl JapaneseHolidays {
    /// The national holidays only.
    pub fn new() -> Self {
        Self::default()
    }

    /// The national holidays plus extra `(date, name)` holidays.
    ///
    /// Extra holidays do not create substitute or citizens' holidays.
    pub fn with_additional<I, S>(holidays: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, S)>,
        S: Into<String>,
    {
        Self {
            additional: holidays
                .into_iter()
                .map(|(date, name)| (date, name.into()))
                .collect(),
        }
    }
}

impl HolidayCalendar for JapaneseHolidays {
    fn name(&self) -> &str {
        "Japan"
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        national_holiday(date).or_else(|| self.additional.get(&date).map(String::as_str))
    }
}

/// Returns the name of the national holiday on `date`, if any.
pub(crate) fn national_holiday(date: NaiveDate) -> Option<&'static str> {
    designated_holiday(date)
        .or_else(|| is_substitute_holiday(date).then_some(SUBSTITUTE_HOLIDAY))
        .or_else(|| is_citizens_holiday(date).then_some(CITIZENS_HOLIDAY))
}

/// Holidays named directly by the Act, before substitutes are considered.
fn designated_holiday(date: NaiveDate) -> Option<&'static str> {
    let year = date.year();
    let day = date.day();

    match date.month() {
        1 if day == 1 => Some("元日"),
        1 if year >= 2000 && is_nth_monday(date, 2) => Some("成人の日"),
        1 if year < 2000 && day == 15 => Some("成人の日"),
        2 if day == 11 && year >= 1967 => Some("建国記念の日"),
        2 if day == 23 && year >= 2020 => Some("天皇誕生日"),
        3 if Some(day) == vernal_equinox_day(year) => Some("春分の日"),
        4 if day == 29 => Some(match year {
            y if y >= 2007 => "昭和の日",
            1989..=2006 => "みどりの日",
            _ => "天皇誕生日",
        }),
        5 if day == 1 && year == 2019 => Some("天皇の即位の日"),
        5 if day == 3 => Some("憲法記念日"),
        5 if day == 4 && year >= 2007 => Some("みどりの日"),
        5 if day == 5 => Some("こどもの日"),
        7 => match year {
            2020 if day == 23 => Some("海の日"),
            2020 if day == 24 => Some("スポーツの日"),
            2021 if day == 22 => Some("海の日"),
            2021 if day == 23 => Some("スポーツの日"),
            2020 | 2021 => None,
            y if y >= 2003 && is_nth_monday(date, 3) => Some("海の日"),
            1996..=2002 if day == 20 => Some("海の日"),
            _ => None,
        },
        8 => match year {
            2020 if day == 10 => Some("山の日"),
            2021 if day == 8 => Some("山の日"),
            2020 | 2021 => None,
            y if y >= 2016 && day == 11 => Some("山の日"),
            _ => None,
        },
        9 if Some(day) == autumnal_equinox_day(year) => Some("秋分の日"),
        9 if year >= 2003 && is_nth_monday(date, 3) => Some("敬老の日"),
        9 if (1966..2003).contains(&year) && day == 15 => Some("敬老の日"),
        10 if day == 22 && year == 2019 => Some("即位礼正殿の儀の行われる日"),
        10 => match year {
            2020 | 2021 => None,
            y if y >= 2022 && is_nth_monday(date, 2) => Some("スポーツの日"),
            2000..=2019 if is_nth_monday(date, 2) => Some("体育の日"),
            1966..=1999 if day == 10 => Some("体育の日"),
            _ => None,
        },
        11 if day == 3 => Some("文化の日"),
        11 if day == 23 => Some("勤労感謝の日"),
        12 if day == 23 && (1989..=2018).contains(&year) => Some("天皇誕生日"),
        _ => None,
    }
}

/// A day following a run of holidays that began on a Sunday.
///
/// Since 2007 the substitute is the first non-holiday after the run; before
/// that it was only ever the Monday right after a Sunday holiday.
fn is_substitute_holiday(date: NaiveDate) -> bool {
    if date.year() < 1973 || designated_holiday(date).is_some() {
        return false;
    }

    if date.year() < 2007 {
        let previous = date - Duration::days(1);
        return date.weekday() == Weekday::Mon && designated_holiday(previous).is_some();
    }

    let mut previous = date - Duration::days(1);
    while designated_holiday(previous).is_some() {
        if previous.weekday() == Weekday::Sun {
            return true;
        }
        previous -= Duration::days(1);
    }
    false
}

/// A weekday sandwiched between two holidays.
fn is_citizens_holiday(date: NaiveDate) -> bool {
    date.year() >= 1988
        && date.weekday() != Weekday::Sun
        && designated_holiday(date).is_none()
        && designated_holiday(date - Duration::days(1)).is_some()
        && designated_holiday(date + Duration::days(1)).is_some()
}

fn is_nth_monday(date: NaiveDate, n: u32) -> bool {
    date.weekday() == Weekday::Mon && (date.day() - 1) / 7 + 1 == n
}

/// Day of March of the vernal equinox, computed in millionths of a day.
fn vernal_equinox_day(year: i32) -> Option<u32> {
    equinox_day(year, 20_843_100)
}

/// Day of September of the autumnal equinox.
fn autumnal_equinox_day(year: i32) -> Option<u32> {
    equinox_day(year, 23_248_800)
}

fn equinox_day(year: i32, base_micro_days: i64) -> Option<u32> {
    if !(1980..=2099).contains(&year) {
        return None;
    }
    let elapsed = i64::from(year - 1980);
    let day = (base_micro_days + 242_194 * elapsed) / 1_000_000 - elapsed / 4;
    u32::try_from(day).ok()
}
