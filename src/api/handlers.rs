//! HTTP request handlers for the hours review API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ingest::{EXPORT_FILE_NAME, export_detail_csv};
use crate::pipeline::{load_clean_entries, run_review};

use super::request::{ExportQuery, ReviewQuery};
use super::response::{ApiError, ApiErrorResponse, ReviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/review", post(review_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Turns a query-string rejection into a 400 response.
fn query_rejection(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Invalid query parameters"
    );
    ApiErrorResponse::bad_request(ApiError::invalid_query(body_text)).into_response()
}

/// Handler for POST /review endpoint.
///
/// Accepts a CSV export as the body and returns the daily totals and report.
async fn review_handler(
    State(state): State<AppState>,
    query: Result<Query<ReviewQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        body_bytes = body.len(),
        "Processing review request"
    );

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let outcome = query
        .apply(state.config())
        .and_then(|config| run_review(&body, &config));

    match outcome {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                daily_totals = outcome.daily_totals.len(),
                below_threshold_days = outcome.report.summary.below_threshold_days,
                overtime_days = outcome.report.summary.overtime_days,
                duration_us = start_time.elapsed().as_micros(),
                "Review completed successfully"
            );
            let response = ReviewResponse {
                correlation_id,
                technicians: outcome.entries.technicians(),
                daily_totals: outcome.daily_totals,
                report: outcome.report,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Review failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /export endpoint.
///
/// Accepts a CSV export as the body and returns the cleaned detail rows as a
/// CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        body_bytes = body.len(),
        "Processing export request"
    );

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };

    let config = query.apply(state.config());
    let technicians = query.technician_filter();

    let start_time = Instant::now();
    let export = load_clean_entries(&body, &config)
        .and_then(|entries| export_detail_csv(&entries, technicians.as_deref()));

    match export {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                export_bytes = csv.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
