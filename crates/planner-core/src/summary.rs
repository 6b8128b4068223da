//! Summary table construction — one table per sitting, rows in
//! chronological order.

use serde::{Deserialize, Serialize};

use crate::dataset::{ScheduleDataset, Sitting};
use crate::error::Result;
use crate::style::{Color, StyleTable};

/// One row of a summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Abbreviated subject name.
    pub subject: String,
    pub paper: String,
    /// Formatted exam date, e.g. "Mon, Sep 08".
    pub date: String,
    /// Formatted time range, e.g. "09:00-11:30".
    pub time: String,
    /// Highlight color for the subject cell.
    pub color: Color,
}

/// An ordered summary table ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

/// Build the summary table for one sitting.
///
/// Rows follow the dataset's chronological order for that sitting (ascending
/// start time), one row per record. Pure function of the dataset and style
/// table.
///
/// # Errors
///
/// Returns [`crate::PlannerError::MissingStyle`] if a record's subject has no
/// style entry — callers are expected to have run
/// [`StyleTable::verify_complete`] first.
pub fn summary_table(
    dataset: &ScheduleDataset,
    styles: &StyleTable,
    sitting: Sitting,
    title: impl Into<String>,
) -> Result<TableSpec> {
    let mut rows = Vec::new();
    for record in dataset.records_for(sitting) {
        let style = styles.style_for(&record.subject)?;
        rows.push(SummaryRow {
            subject: style.short_name.clone(),
            paper: record.paper.clone(),
            date: record.start.format("%a, %b %d").to_string(),
            time: format!(
                "{}-{}",
                record.start.format("%H:%M"),
                record.end.format("%H:%M")
            ),
            color: style.color,
        });
    }
    Ok(TableSpec {
        title: title.into(),
        rows,
    })
}
