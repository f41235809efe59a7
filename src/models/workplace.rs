//! Workplace model and its pay rules.
//!
//! A [`Workplace`] carries everything the engine needs to pay a shift worked
//! there: the base hourly wage, a per-shift transport fee, the pay schedule
//! (closing day, payday and the weekend/holiday payday rule) and the
//! holiday and late-night allowances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// A day of the month as configured on a pay schedule.
///
/// Serialized as a plain day number, or as `"eom"` for the end of the month.
/// The strings `"end_of_month"`, `"月末"` and `"末日"` are accepted as well.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{DayOfMonth, YearMonth};
///
/// let february = YearMonth::new(2024, 2).unwrap();
/// assert_eq!(DayOfMonth::EndOfMonth.resolve(february), 29);
/// assert_eq!(DayOfMonth::Day(15).resolve(february), 15);
///
/// let parsed: DayOfMonth = serde_json::from_str("\"eom\"").unwrap();
/// assert_eq!(parsed, DayOfMonth::EndOfMonth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DayOfMonthRepr", into = "DayOfMonthRepr")]
pub enum DayOfMonth {
    /// A fixed day number (1-31).
    Day(u32),
    /// The last calendar day of whichever month it is resolved in.
    EndOfMonth,
}

impl DayOfMonth {
    /// Resolves to a concrete day number within `month`.
    ///
    /// Day numbers past the end of a short month resolve to its last day.
    pub fn resolve(self, month: YearMonth) -> u32 {
        match self {
            DayOfMonth::Day(day) => day.min(month.days_in_month()),
            DayOfMonth::EndOfMonth => month.days_in_month(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DayOfMonthRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<DayOfMonthRepr> for DayOfMonth {
    type Error = String;

    fn try_from(repr: DayOfMonthRepr) -> Result<Self, Self::Error> {
        let day = match repr {
            DayOfMonthRepr::Number(day) => day,
            DayOfMonthRepr::Text(text) => match text.trim() {
                "eom" | "end_of_month" | "月末" | "末日" => return Ok(DayOfMonth::EndOfMonth),
                other => other
                    .parse::<u32>()
                    .map_err(|_| format!("invalid day of month '{}'", text))?,
            },
        };

        if (1..=31).contains(&day) {
            Ok(DayOfMonth::Day(day))
        } else {
            Err(format!("day of month must be between 1 and 31, got {}", day))
        }
    }
}

impl From<DayOfMonth> for DayOfMonthRepr {
    fn from(day: DayOfMonth) -> Self {
        match day {
            DayOfMonth::Day(day) => DayOfMonthRepr::Number(day),
            DayOfMonth::EndOfMonth => DayOfMonthRepr::Text("eom".to_string()),
        }
    }
}

/// What to do when a payday lands on a weekend or public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaydayRule {
    /// Pay on the configured day regardless.
    #[default]
    #[serde(alias = "as-is")]
    AsIs,
    /// Pay on the closest earlier business day.
    #[serde(alias = "before")]
    MoveEarlier,
    /// Pay on the closest later business day.
    #[serde(alias = "after")]
    MoveLater,
}

/// How an allowance value is applied to the hourly wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceKind {
    /// The value is a wage multiplier (e.g. 1.25).
    Multiplier,
    /// The value is an amount of yen per hour.
    #[serde(alias = "yen")]
    FlatYen,
}

/// A holiday or late-night wage adjustment.
///
/// Holiday and late-night allowances compose differently: a flat holiday
/// allowance replaces the hourly wage, while a flat late-night allowance is
/// added on top of it.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{Allowance, AllowanceKind};
/// use rust_decimal::Decimal;
///
/// let holiday = Allowance::flat_yen(Decimal::from(1500));
/// assert_eq!(holiday.apply_holiday(Decimal::from(1000)), Decimal::from(1500));
///
/// let late_night = Allowance::flat_yen(Decimal::from(200));
/// assert_eq!(late_night.apply_late_night(Decimal::from(1000)), Decimal::from(1200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allowance {
    /// How `value` is applied.
    #[serde(rename = "type")]
    pub kind: AllowanceKind,
    /// The multiplier or yen amount.
    pub value: Decimal,
}

impl Allowance {
    /// A multiplier allowance.
    pub fn multiplier(value: Decimal) -> Self {
        Self {
            kind: AllowanceKind::Multiplier,
            value,
        }
    }

    /// A flat yen-per-hour allowance.
    pub fn flat_yen(value: Decimal) -> Self {
        Self {
            kind: AllowanceKind::FlatYen,
            value,
        }
    }

    /// The hourly wage on a holiday: a flat amount replaces `base_wage`,
    /// a multiplier scales it.
    pub fn apply_holiday(&self, base_wage: Decimal) -> Decimal {
        match self.kind {
            AllowanceKind::FlatYen => self.value,
            AllowanceKind::Multiplier => base_wage * self.value,
        }
    }

    /// The hourly wage at night: a multiplier scales `wage`, a flat amount
    /// is added to it.
    pub fn apply_late_night(&self, wage: Decimal) -> Decimal {
        match self.kind {
            AllowanceKind::Multiplier => wage * self.value,
            AllowanceKind::FlatYen => wage + self.value,
        }
    }
}

/// The optional allowances configured on a workplace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowances {
    /// Applied to minutes between 22:00 and 05:00.
    #[serde(default)]
    pub late_night: Option<Allowance>,
    /// Applied to minutes on weekends and public holidays.
    #[serde(default)]
    pub holiday: Option<Allowance>,
}

/// A place of work with its wage and pay schedule.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{DayOfMonth, PaydayRule, Workplace};
/// use rust_decimal::Decimal;
///
/// let json = r#"{
///     "id": "cafe",
///     "name": "Cafe",
///     "base_wage": 1100,
///     "transport_fee": 300,
///     "closing_day": "eom",
///     "payday": 25,
///     "payday_rule": "before",
///     "allowances": {
///         "late_night": { "type": "multiplier", "value": "1.25" },
///         "holiday": { "type": "yen", "value": 1300 }
///     }
/// }"#;
///
/// let workplace: Workplace = serde_json::from_str(json).unwrap();
/// assert_eq!(workplace.base_wage, Decimal::from(1100));
/// assert_eq!(workplace.closing_day, Some(DayOfMonth::EndOfMonth));
/// assert_eq!(workplace.payday_rule, PaydayRule::MoveEarlier);
/// assert!(workplace.has_pay_schedule());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workplace {
    /// Unique identifier for the workplace.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hourly wage in yen.
    pub base_wage: Decimal,
    /// Transport fee paid once per shift.
    #[serde(default)]
    pub transport_fee: Decimal,
    /// Last day of each pay period.
    #[serde(default)]
    pub closing_day: Option<DayOfMonth>,
    /// Day wages for a closed period are paid.
    #[serde(default)]
    pub payday: Option<DayOfMonth>,
    /// Adjustment applied when the payday is not a business day.
    #[serde(default)]
    pub payday_rule: PaydayRule,
    /// Holiday and late-night allowances.
    #[serde(default)]
    pub allowances: Allowances,
}

impl Workplace {
    /// Whether both a closing day and a payday are configured.
    ///
    /// Workplaces without a full pay schedule are never paid out.
    pub fn has_pay_schedule(&self) -> bool {
        self.closing_day.is_some() && self.payday.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_day_of_month_deserializes_numbers_and_markers() {
        let day: DayOfMonth = serde_json::from_str("15").unwrap();
        assert_eq!(day, DayOfMonth::Day(15));

        let day: DayOfMonth = serde_json::from_str("\"20\"").unwrap();
        assert_eq!(day, DayOfMonth::Day(20));

        for marker in ["\"eom\"", "\"end_of_month\"", "\"月末\"", "\"末日\""] {
            let day: DayOfMonth = serde_json::from_str(marker).unwrap();
            assert_eq!(day, DayOfMonth::EndOfMonth, "marker {}", marker);
        }
    }

    #[test]
    fn test_day_of_month_rejects_out_of_range() {
        assert!(serde_json::from_str::<DayOfMonth>("0").is_err());
        assert!(serde_json::from_str::<DayOfMonth>("32").is_err());
        assert!(serde_json::from_str::<DayOfMonth>("\"someday\"").is_err());
    }

    #[test]
    fn test_day_of_month_serializes_back() {
        assert_eq!(serde_json::to_string(&DayOfMonth::Day(10)).unwrap(), "10");
        assert_eq!(
            serde_json::to_string(&DayOfMonth::EndOfMonth).unwrap(),
            "\"eom\""
        );
    }

    #[test]
    fn test_resolve_end_of_month() {
        let april = YearMonth::new(2025, 4).unwrap();
        let february = YearMonth::new(2025, 2).unwrap();
        assert_eq!(DayOfMonth::EndOfMonth.resolve(april), 30);
        assert_eq!(DayOfMonth::EndOfMonth.resolve(february), 28);
    }

    #[test]
    fn test_resolve_clamps_long_day_numbers() {
        let february = YearMonth::new(2025, 2).unwrap();
        assert_eq!(DayOfMonth::Day(30).resolve(february), 28);
        assert_eq!(DayOfMonth::Day(28).resolve(february), 28);
    }

    #[test]
    fn test_payday_rule_accepts_legacy_spellings() {
        let rule: PaydayRule = serde_json::from_str("\"as-is\"").unwrap();
        assert_eq!(rule, PaydayRule::AsIs);
        let rule: PaydayRule = serde_json::from_str("\"before\"").unwrap();
        assert_eq!(rule, PaydayRule::MoveEarlier);
        let rule: PaydayRule = serde_json::from_str("\"after\"").unwrap();
        assert_eq!(rule, PaydayRule::MoveLater);
        let rule: PaydayRule = serde_json::from_str("\"move_later\"").unwrap();
        assert_eq!(rule, PaydayRule::MoveLater);
    }

    #[test]
    fn test_holiday_allowance_replaces_or_multiplies() {
        let base = dec("1000");
        assert_eq!(Allowance::flat_yen(dec("1500")).apply_holiday(base), dec("1500"));
        assert_eq!(Allowance::multiplier(dec("1.35")).apply_holiday(base), dec("1350"));
    }

    #[test]
    fn test_late_night_allowance_multiplies_or_adds() {
        let wage = dec("1500");
        assert_eq!(
            Allowance::multiplier(dec("1.25")).apply_late_night(wage),
            dec("1875")
        );
        assert_eq!(Allowance::flat_yen(dec("250")).apply_late_night(wage), dec("1750"));
    }

    #[test]
    fn test_minimal_workplace_uses_defaults() {
        let json = r#"{ "id": "wp_001", "name": "Bookshop", "base_wage": 1000 }"#;
        let workplace: Workplace = serde_json::from_str(json).unwrap();

        assert_eq!(workplace.transport_fee, Decimal::ZERO);
        assert_eq!(workplace.closing_day, None);
        assert_eq!(workplace.payday, None);
        assert_eq!(workplace.payday_rule, PaydayRule::AsIs);
        assert_eq!(workplace.allowances, Allowances::default());
        assert!(!workplace.has_pay_schedule());
    }

    #[test]
    fn test_workplace_yaml_round_trip() {
        let yaml = r#"
id: wp_002
name: Izakaya
base_wage: 1200
closing_day: 15
payday: 25
payday_rule: move_later
allowances:
  late_night:
    type: multiplier
    value: 1.25
"#;
        let workplace: Workplace = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(workplace.closing_day, Some(DayOfMonth::Day(15)));
        assert_eq!(
            workplace.allowances.late_night,
            Some(Allowance::multiplier(dec("1.25")))
        );
        assert_eq!(workplace.allowances.holiday, None);

        let encoded = serde_yaml::to_string(&workplace).unwrap();
        let decoded: Workplace = serde_yaml::from_str(&encoded).unwrap();
        assert_eq!(decoded, workplace);
    }
}
