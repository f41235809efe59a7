//! Request types for the Shift Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/salary-report`
//! and `/paydays` endpoints.

use chrono::{Datelike, Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PAYROLL_YEARS, ScheduleOverride, Shift, Workplace, YearMonth};

/// Request body for the `/salary-report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryReportRequest {
    /// Year of the displayed month.
    pub year: i32,
    /// Displayed month (1-12).
    pub month: u32,
    /// All logged shifts; the engine picks those paid in the month.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
    /// Workplaces to report on. The configured workplaces are used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workplaces: Option<Vec<Workplace>>,
}

impl SalaryReportRequest {
    /// The displayed month, validated.
    pub fn display_month(&self) -> EngineResult<YearMonth> {
        display_month(self.year, self.month)
    }
}

/// Request body for the `/paydays` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaydaysRequest {
    /// Year of the displayed month.
    pub year: i32,
    /// Displayed month (1-12).
    pub month: u32,
    /// Workplaces to list paydays for. The configured workplaces are used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workplaces: Option<Vec<Workplace>>,
}

impl PaydaysRequest {
    /// The displayed month, validated.
    pub fn display_month(&self) -> EngineResult<YearMonth> {
        display_month(self.year, self.month)
    }
}

fn display_month(year: i32, month: u32) -> EngineResult<YearMonth> {
    YearMonth::new(year, month)
        .filter(|month| month.is_payroll_month())
        .ok_or(EngineError::InvalidDisplayMonth { year, month })
}

/// Longest shift a request may log. Wages accrue minute by minute, so the
/// cost of a report grows with shift length.
pub const MAX_SHIFT_HOURS: i64 = 48;

/// Shift information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// Workplace id, `"one-off"` or `"none"`.
    pub workplace_id: String,
    /// The start time of the shift (local time).
    pub start: NaiveDateTime,
    /// The end time of the shift (local time).
    pub end: NaiveDateTime,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Hourly wage of a one-off shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_wage: Option<Decimal>,
    /// Pay schedule of a one-off shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workplace: Option<ScheduleOverride>,
}

impl TryFrom<ShiftRequest> for Shift {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> EngineResult<Self> {
        let reason = if !PAYROLL_YEARS.contains(&req.start.year())
            || !PAYROLL_YEARS.contains(&req.end.year())
        {
            Some(format!(
                "shift must start and end between years {} and {}",
                PAYROLL_YEARS.start(),
                PAYROLL_YEARS.end()
            ))
        } else if req.end - req.start > Duration::hours(MAX_SHIFT_HOURS) {
            Some(format!("shift is longer than {} hours", MAX_SHIFT_HOURS))
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(EngineError::InvalidShift {
                shift_id: req.id,
                reason,
            });
        }

        Ok(Shift {
            id: req.id,
            workplace_id: req.workplace_id.into(),
            start: req.start,
            end: req.end,
            break_minutes: req.break_minutes,
            manual_wage: req.manual_wage,
            workplace: req.workplace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkplaceRef;

    #[test]
    fn test_deserialize_salary_report_request() {
        let json = r#"{
            "year": 2025,
            "month": 6,
            "shifts": [
                {
                    "id": "shift_001",
                    "workplace_id": "cafe",
                    "start": "2025-06-10T09:00:00",
                    "end": "2025-06-10T17:00:00",
                    "break_minutes": 60
                },
                {
                    "id": "shift_002",
                    "workplace_id": "one-off",
                    "start": "2025-06-11T10:00:00",
                    "end": "2025-06-11T15:00:00",
                    "manual_wage": 1200
                }
            ]
        }"#;

        let request: SalaryReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 2025);
        assert_eq!(request.shifts.len(), 2);
        assert!(request.workplaces.is_none());
        assert_eq!(request.display_month().unwrap(), YearMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_shift_conversion() {
        let request = ShiftRequest {
            id: "shift_002".to_string(),
            workplace_id: "one-off".to_string(),
            start: NaiveDateTime::parse_from_str("2025-06-11 10:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            end: NaiveDateTime::parse_from_str("2025-06-11 15:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            break_minutes: 0,
            manual_wage: Some(Decimal::from(1200)),
            workplace: None,
        };

        let shift = Shift::try_from(request).unwrap();
        assert_eq!(shift.workplace_id, WorkplaceRef::OneOff);
        assert_eq!(shift.worked_minutes(), 300);
    }

    fn create_shift_request(start: &str, end: &str) -> ShiftRequest {
        ShiftRequest {
            id: "shift_003".to_string(),
            workplace_id: "cafe".to_string(),
            start: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            end: NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S").unwrap(),
            break_minutes: 0,
            manual_wage: None,
            workplace: None,
        }
    }

    #[test]
    fn test_shift_longer_than_limit_is_rejected() {
        let exactly_two_days = create_shift_request("2025-06-10 09:00:00", "2025-06-12 09:00:00");
        assert!(Shift::try_from(exactly_two_days).is_ok());

        let decade = create_shift_request("2025-06-10 09:00:00", "2035-06-10 09:00:00");
        match Shift::try_from(decade) {
            Err(EngineError::InvalidShift { shift_id, reason }) => {
                assert_eq!(shift_id, "shift_003");
                assert!(reason.contains("48 hours"));
            }
            other => panic!("Expected InvalidShift error, got {:?}", other),
        }
    }

    #[test]
    fn test_shift_outside_payroll_years_is_rejected() {
        let day = chrono::NaiveDate::from_ymd_opt(262_142, 12, 20).unwrap();
        let far_future = ShiftRequest {
            start: day.and_hms_opt(9, 0, 0).unwrap(),
            end: day.and_hms_opt(17, 0, 0).unwrap(),
            ..create_shift_request("2025-06-10 09:00:00", "2025-06-10 17:00:00")
        };
        assert!(matches!(
            Shift::try_from(far_future),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_reversed_shift_is_accepted() {
        let reversed = create_shift_request("2025-06-10 17:00:00", "2025-06-10 09:00:00");
        assert!(Shift::try_from(reversed).is_ok());
    }

    #[test]
    fn test_invalid_display_month() {
        let request = PaydaysRequest {
            year: 2025,
            month: 13,
            workplaces: None,
        };

        match request.display_month() {
            Err(EngineError::InvalidDisplayMonth { year, month }) => {
                assert_eq!(year, 2025);
                assert_eq!(month, 13);
            }
            other => panic!("Expected InvalidDisplayMonth error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_year_is_rejected() {
        let request = PaydaysRequest {
            year: 250_000,
            month: 12,
            workplaces: None,
        };
        assert!(request.display_month().is_err());
    }
}
