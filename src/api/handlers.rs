//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::RosterConfig;
use crate::error::EngineError;
use crate::organization::Organization;

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/roster", get(roster_handler))
        .with_state(state)
}

/// Handler for POST /payroll.
///
/// Builds an organization from the submitted staff and returns its report.
async fn payroll_handler(
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let include_breakdown = request.include_breakdown;
    let roster: RosterConfig = request.into();
    respond_with_report(correlation_id, &roster, include_breakdown)
}

/// Handler for GET /roster.
///
/// Returns the report for the roster the server was started with.
async fn roster_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    respond_with_report(correlation_id, state.roster().roster(), false)
}

fn respond_with_report(
    correlation_id: Uuid,
    roster: &RosterConfig,
    include_breakdown: bool,
) -> Response {
    let start_time = Instant::now();
    match build_response(roster, include_breakdown) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                organization = %response.report.organization,
                headcount = response.report.statistics.headcount,
                total_payroll = %response.report.statistics.total_payroll,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll computation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn build_response(
    roster: &RosterConfig,
    include_breakdown: bool,
) -> Result<PayrollResponse, EngineError> {
    let organization: Organization = roster.build_organization()?;

    let breakdowns = if include_breakdown {
        Some(
            organization
                .employees()
                .iter()
                .map(|member| member.salary_breakdown())
                .collect::<Result<Vec<_>, _>>()?,
        )
    } else {
        None
    };

    Ok(PayrollResponse {
        report_id: Uuid::new_v4(),
        report: organization.report()?,
        breakdowns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterLoader;
    use rust_decimal::Decimal;

    #[test]
    fn test_build_response_for_sample_roster() {
        let response = build_response(RosterLoader::sample().roster(), false).unwrap();

        assert_eq!(response.report.statistics.headcount, 3);
        assert_eq!(
            response.report.statistics.total_payroll,
            Decimal::new(25550, 0)
        );
        assert!(response.breakdowns.is_none());
    }

    #[test]
    fn test_build_response_includes_breakdowns_in_roster_order() {
        let response = build_response(RosterLoader::sample().roster(), true).unwrap();
        let breakdowns = response.breakdowns.unwrap();

        assert_eq!(breakdowns.len(), 3);
        assert_eq!(breakdowns[0].audit_trail[0].rule_id, "developer_payroll");
        assert_eq!(breakdowns[2].total, Decimal::new(3750, 0));
    }

    #[test]
    fn test_build_response_propagates_validation_error() {
        let mut roster = RosterLoader::sample().roster().clone();
        roster.staff[0].base_pay = Decimal::new(-1, 0);

        let result = build_response(&roster, false);
        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }

    #[test]
    fn test_build_response_reports_overflow() {
        let mut roster = RosterLoader::sample().roster().clone();
        roster.staff[0].base_pay = Decimal::MAX;

        let result = build_response(&roster, true);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
