//! Daily hours review engine for payroll time-tracking exports.
//!
//! This crate loads a CSV export of time entries, drops leave rows, optionally
//! drops travel time, totals worked hours per technician and payroll date, and
//! classifies each day against minimum and overtime thresholds.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pipeline;
