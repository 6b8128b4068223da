//! # planner-core
//!
//! Data model and view builders for the exam day planner. The planner turns
//! a fixed exam schedule (trial and final sittings) into two printable views:
//! a per-sitting summary table and a sequence of day-by-day hourly grid
//! pages with exam slots highlighted per subject.
//!
//! This crate is pure: no I/O, no clock reads. The PDF backend lives in
//! `planner-pdf` and consumes the [`summary::TableSpec`] and
//! [`grid::PageSpec`] structures built here.
//!
//! ## Modules
//!
//! - [`dataset`] — validated, immutable exam records grouped by sitting
//! - [`style`] — subject → color/abbreviation mapping with a completeness check
//! - [`lookup`] — half-open interval occupancy lookup per (date, hour) slot
//! - [`summary`] — per-sitting summary tables
//! - [`grid`] — hourly day columns, paired two dates per page
//! - [`data`] — the shipped Grade 12 / 2025 dataset and planner defaults
//! - [`error`] — error types

pub mod data;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod lookup;
pub mod style;
pub mod summary;

pub use dataset::{ExamRecord, ScheduleDataset, Sitting};
pub use error::PlannerError;
pub use grid::{build_pages, DayCell, DayColumn, GridConfig, PageSpec, PlannerRange};
pub use lookup::find_exam;
pub use style::{Color, StyleTable, SubjectStyle};
pub use summary::{summary_table, SummaryRow, TableSpec};
