//! HTTP request handlers for the Shift Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_salary_report, paydays_in_month};
use crate::error::EngineResult;
use crate::models::Shift;

use super::request::{PaydaysRequest, SalaryReportRequest};
use super::response::{ApiError, ApiErrorResponse, PaydaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary-report", post(salary_report_handler))
        .route("/paydays", post(paydays_handler))
        .with_state(state)
}

/// Handler for POST /salary-report endpoint.
///
/// Returns the salary report of the requested month.
async fn salary_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryReportRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let display_month = match request.display_month() {
        Ok(month) => month,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };

    let workplaces = state.workplaces_or_configured(request.workplaces.as_deref());
    let shifts = match request
        .shifts
        .into_iter()
        .map(Shift::try_from)
        .collect::<EngineResult<Vec<_>>>()
    {
        Ok(shifts) => shifts,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };

    let start_time = Instant::now();
    match build_salary_report(
        display_month.first_day(),
        &shifts,
        workplaces,
        Some(state.calendar()),
    ) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                display_month = %display_month,
                shifts_count = shifts.len(),
                rows = report.details.len(),
                total_salary = report.total_salary,
                duration_us = duration.as_micros(),
                "Salary report completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => engine_error_response(err.into(), correlation_id),
    }
}

/// Handler for POST /paydays endpoint.
///
/// Returns the paydays falling inside the requested month.
async fn paydays_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaydaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paydays request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let display_month = match request.display_month() {
        Ok(month) => month,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };

    let workplaces = state.workplaces_or_configured(request.workplaces.as_deref());
    match paydays_in_month(display_month, workplaces, state.calendar()) {
        Ok(paydays) => {
            info!(
                correlation_id = %correlation_id,
                display_month = %display_month,
                paydays_count = paydays.len(),
                "Paydays listed successfully"
            );
            json_response(
                StatusCode::OK,
                PaydaysResponse {
                    year: display_month.year(),
                    month: display_month.month(),
                    paydays,
                },
            )
        }
        Err(err) => engine_error_response(err.into(), correlation_id),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(api_error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Request failed"
    );
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );

            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ShiftRequest;
    use crate::config::ConfigLoader;
    use crate::models::SalaryReport;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDateTime;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/sample").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn create_valid_request() -> SalaryReportRequest {
        SalaryReportRequest {
            year: 2025,
            month: 6,
            shifts: vec![ShiftRequest {
                id: "shift_001".to_string(),
                workplace_id: "cafe".to_string(),
                start: make_datetime("2025-06-10", "09:00:00"),
                end: make_datetime("2025-06-10", "17:00:00"),
                break_minutes: 60,
                manual_wage: None,
                workplace: None,
            }],
            workplaces: None,
        }
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = router.oneshot(post("/salary-report", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: SalaryReport = serde_json::from_slice(&body).unwrap();

        // 7 hours at 1100 yen plus a 300 yen transport fee
        assert_eq!(report.total_salary, 8000);
        assert_eq!(report.details[0].period_str, "5月16日〜6月15日");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/salary-report", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_month_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/salary-report", r#"{ "year": 2025, "shifts": [] }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("month"));
    }

    #[tokio::test]
    async fn test_api_004_invalid_month_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/paydays", r#"{ "year": 2025, "month": 13 }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DISPLAY_MONTH");
    }

    #[tokio::test]
    async fn test_api_005_paydays_for_configured_workplaces() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/paydays", r#"{ "year": 2025, "month": 6 }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let paydays: PaydaysResponse = serde_json::from_slice(&body).unwrap();

        // izakaya closes at month end and pays on the 10th, cafe pays on the 25th
        let ids: Vec<&str> = paydays.paydays.iter().map(|p| p.workplace_id.as_str()).collect();
        assert_eq!(ids, vec!["izakaya", "cafe"]);
    }

    #[tokio::test]
    async fn test_api_006_overlong_shift_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.shifts[0].end = make_datetime("2035-06-10", "17:00:00");
        let body = serde_json::to_string(&request).unwrap();

        let response = router.oneshot(post("/salary-report", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.details.unwrap().contains("shift_001"));
    }
}
