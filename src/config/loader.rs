//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading registered
//! workplaces and extra holidays from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::JapaneseHolidays;
use crate::error::{EngineError, EngineResult};
use crate::models::Workplace;

use super::types::{HolidaysConfig, WorkplacesConfig};

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── workplaces.yaml  # Registered workplaces and their pay schedules
/// └── holidays.yaml    # Optional extra holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
/// use shift_payroll::calendar::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
///
/// let cafe = loader.workplace("cafe").unwrap();
/// println!("Base wage: {}", cafe.base_wage);
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
/// println!("Day off: {}", loader.calendar().is_rest_day(date));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    workplaces: Vec<Workplace>,
    calendar: JapaneseHolidays,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sample")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `workplaces.yaml` is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let workplaces_config =
            Self::load_yaml::<WorkplacesConfig>(&path.join("workplaces.yaml"))?;

        // holidays.yaml is optional
        let holidays_path = path.join("holidays.yaml");
        let holidays_config = if holidays_path.exists() {
            Self::load_yaml::<HolidaysConfig>(&holidays_path)?
        } else {
            HolidaysConfig::default()
        };

        debug!(
            path = %path.display(),
            workplaces = workplaces_config.workplaces.len(),
            holidays = holidays_config.holidays.len(),
            "Loaded payroll configuration"
        );

        Ok(Self::from_parts(workplaces_config, holidays_config))
    }

    /// Builds a loader from already parsed configuration.
    pub fn from_parts(workplaces: WorkplacesConfig, holidays: HolidaysConfig) -> Self {
        let calendar = JapaneseHolidays::with_additional(
            holidays
                .holidays
                .into_iter()
                .map(|holiday| (holiday.date, holiday.name)),
        );

        Self {
            workplaces: workplaces.workplaces,
            calendar,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the registered workplaces in display order.
    pub fn workplaces(&self) -> &[Workplace] {
        &self.workplaces
    }

    /// Gets a workplace by its id.
    pub fn workplace(&self, id: &str) -> Option<&Workplace> {
        self.workplaces.iter().find(|workplace| workplace.id == id)
    }

    /// Returns the holiday calendar, national holidays plus configured ones.
    pub fn calendar(&self) -> &JapaneseHolidays {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::models::{AllowanceKind, DayOfMonth, PaydayRule};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/sample"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let ids: Vec<&str> = loader.workplaces().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["cafe", "izakaya", "tutor"]);
    }

    #[test]
    fn test_workplace_schedule_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let cafe = loader.workplace("cafe").unwrap();
        assert_eq!(cafe.base_wage, dec("1100"));
        assert_eq!(cafe.transport_fee, dec("300"));
        assert_eq!(cafe.closing_day, Some(DayOfMonth::Day(15)));
        assert_eq!(cafe.payday, Some(DayOfMonth::Day(25)));
        assert_eq!(cafe.payday_rule, PaydayRule::MoveEarlier);

        let late_night = cafe.allowances.late_night.unwrap();
        assert_eq!(late_night.kind, AllowanceKind::Multiplier);
        assert_eq!(late_night.value, dec("1.25"));
        let holiday = cafe.allowances.holiday.unwrap();
        assert_eq!(holiday.kind, AllowanceKind::FlatYen);
        assert_eq!(holiday.value, dec("1300"));

        let izakaya = loader.workplace("izakaya").unwrap();
        assert_eq!(izakaya.closing_day, Some(DayOfMonth::EndOfMonth));
        assert_eq!(izakaya.payday_rule, PaydayRule::MoveLater);
    }

    #[test]
    fn test_workplace_without_schedule_uses_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tutor = loader.workplace("tutor").unwrap();
        assert!(!tutor.has_pay_schedule());
        assert_eq!(tutor.transport_fee, Decimal::ZERO);
        assert_eq!(tutor.payday_rule, PaydayRule::AsIs);
        assert!(tutor.allowances.late_night.is_none());
    }

    #[test]
    fn test_unknown_workplace_is_none() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.workplace("unknown").is_none());
    }

    #[test]
    fn test_custom_holidays_extend_calendar() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        // 2025-08-14 is a Thursday
        let summer_break = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
        assert_eq!(loader.calendar().holiday_name(summer_break), Some("夏季休業"));

        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(loader.calendar().holiday_name(new_year), Some("元日"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("workplaces.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_parts_without_holidays() {
        let workplaces: WorkplacesConfig = serde_yaml::from_str(
            "workplaces:\n  - id: shop\n    name: Shop\n    base_wage: 1000\n    closing_day: 20\n    payday: 5\n",
        )
        .unwrap();
        let loader = ConfigLoader::from_parts(workplaces, HolidaysConfig::default());

        assert_eq!(loader.workplaces().len(), 1);
        assert_eq!(loader.workplaces()[0].payday, Some(DayOfMonth::Day(5)));
        let ordinary_thursday = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
        assert!(!loader.calendar().is_rest_day(ordinary_thursday));
    }

    #[test]
    fn test_invalid_day_of_month_is_parse_error() {
        let result = serde_yaml::from_str::<WorkplacesConfig>(
            "workplaces:\n  - id: shop\n    name: Shop\n    base_wage: 1000\n    closing_day: 32\n",
        );
        assert!(result.is_err());
    }
}
