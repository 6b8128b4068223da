//! Error types for planner validation and view building.

use chrono::NaiveDate;
use thiserror::Error;

use crate::dataset::Sitting;

/// Errors raised while validating the schedule data or building views.
///
/// Every variant is a data-entry integrity failure: each is detected once at
/// startup, before any rendering, and aborts the run. Partial output would be
/// misleading, so none of these are recoverable.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// An exam record's start is not strictly before its end.
    #[error("exam \"{subject}\" ({paper}): start must be before end")]
    InvertedInterval { subject: String, paper: String },

    /// Two records for the same subject and sitting share a paper label.
    #[error("duplicate paper label \"{paper}\" for \"{subject}\" in the {sitting} sitting")]
    DuplicatePaper {
        subject: String,
        sitting: Sitting,
        paper: String,
    },

    /// One or more subjects in the dataset have no style table entry.
    #[error("no style entry for subject(s): {subjects}")]
    MissingStyle { subjects: String },

    /// A planner range whose start date falls after its end date.
    #[error("planner range start {start} is after end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Convenience alias used throughout planner-core.
pub type Result<T> = std::result::Result<T, PlannerError>;
