//! HTTP API module for the Shift Payroll Engine.
//!
//! This module provides the REST API endpoints for the monthly salary
//! report and the payday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MAX_SHIFT_HOURS, PaydaysRequest, SalaryReportRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse, PaydaysResponse};
pub use state::AppState;
