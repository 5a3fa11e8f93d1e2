//! HTTP API module for the hours review engine.
//!
//! This module provides the REST endpoints that run a review over an
//! uploaded CSV export and return either the report or the cleaned detail
//! rows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportQuery, ReviewQuery};
pub use response::{ApiError, ApiErrorResponse, ReviewResponse};
pub use state::AppState;
