//! Daily planner grid construction.
//!
//! For each date in the planner range, builds one column of hourly cells
//! annotated via the interval lookup, then pairs two consecutive dates per
//! page. Saturday/Sunday columns carry a weekend flag so the renderer can
//! mute their background. Fully deterministic for fixed inputs: no clock
//! reads, no randomness.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::dataset::ScheduleDataset;
use crate::error::{PlannerError, Result};
use crate::lookup::find_exam;
use crate::style::{Color, StyleTable};

/// First hour row of a planner day (7 AM).
pub const FIRST_HOUR: u32 = 7;
/// Last hour row of a planner day: the 11 PM slot, ending at midnight.
pub const LAST_HOUR: u32 = 23;
/// Calendar dates bundled onto one grid page.
pub const DAYS_PER_PAGE: usize = 2;

/// Inclusive span of calendar dates rendered as daily pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl PlannerRange {
    /// Create a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvertedRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(PlannerError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar dates in the range (at least 1).
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate the dates in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Hour window of a planner day.
///
/// The default covers 7 AM through the 11 PM–midnight slot (17 rows). The
/// window is a parameter rather than an embedded literal so tests can use
/// arbitrary windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub first_hour: u32,
    pub last_hour: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: FIRST_HOUR,
            last_hour: LAST_HOUR,
        }
    }
}

impl GridConfig {
    /// The hour rows of one day, in order.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.first_hour..=self.last_hour
    }
}

/// Exam annotation on an occupied cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellExam {
    /// Abbreviated subject name.
    pub subject: String,
    pub paper: String,
    /// Subject highlight color.
    pub color: Color,
}

/// One hour slot of one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub hour: u32,
    /// 12-hour clock label, e.g. "7:00 AM".
    pub label: String,
    /// Present when an exam interval intersects this slot.
    pub exam: Option<CellExam>,
}

/// One date's column of hourly cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Column heading, e.g. "Tue, Aug 26".
    pub heading: String,
    /// True for Saturday and Sunday; the renderer mutes the whole column.
    pub is_weekend: bool,
    pub cells: Vec<DayCell>,
}

/// One planner page bundling up to [`DAYS_PER_PAGE`] consecutive dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page title spanning the page's dates.
    pub title: String,
    pub days: Vec<DayColumn>,
}

/// 12-hour clock label for an hour row ("7:00 AM", "12:00 PM", "11:00 PM").
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        12 => "12:00 PM".to_string(),
        h if h > 12 => format!("{}:00 PM", h - 12),
        h => format!("{}:00 AM", h),
    }
}

/// Build the full page sequence for a planner range.
///
/// Pages bundle two consecutive dates each; the last page carries a single
/// date when the range has an odd number of days — it is emitted, never
/// silently dropped. For a range of N dates this yields exactly
/// `ceil(N / 2)` pages.
///
/// # Errors
///
/// Returns [`PlannerError::MissingStyle`] if an occupied cell's subject has
/// no style entry.
pub fn build_pages(
    dataset: &ScheduleDataset,
    styles: &StyleTable,
    range: PlannerRange,
    config: GridConfig,
) -> Result<Vec<PageSpec>> {
    let dates: Vec<NaiveDate> = range.dates().collect();
    let mut pages = Vec::with_capacity(dates.len().div_ceil(DAYS_PER_PAGE));
    for pair in dates.chunks(DAYS_PER_PAGE) {
        let days = pair
            .iter()
            .map(|&date| build_day(dataset, styles, date, config))
            .collect::<Result<Vec<_>>>()?;
        pages.push(PageSpec {
            title: page_title(pair),
            days,
        });
    }
    Ok(pages)
}

/// Build the hourly column for a single date.
fn build_day(
    dataset: &ScheduleDataset,
    styles: &StyleTable,
    date: NaiveDate,
    config: GridConfig,
) -> Result<DayColumn> {
    let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    let mut cells = Vec::new();
    for hour in config.hours() {
        let exam = match find_exam(dataset, date, hour) {
            Some(record) => {
                let style = styles.style_for(&record.subject)?;
                Some(CellExam {
                    subject: style.short_name.clone(),
                    paper: record.paper.clone(),
                    color: style.color,
                })
            }
            None => None,
        };
        cells.push(DayCell {
            hour,
            label: hour_label(hour),
            exam,
        });
    }
    Ok(DayColumn {
        date,
        heading: date.format("%a, %b %d").to_string(),
        is_weekend,
        cells,
    })
}

/// Page title spanning the page's dates, e.g.
/// "Tuesday, Aug 26 - Wednesday, Aug 27, 2025".
fn page_title(dates: &[NaiveDate]) -> String {
    match dates {
        [] => String::new(),
        [only] => only.format("%A, %b %d, %Y").to_string(),
        [first, .., last] => format!(
            "{} - {}",
            first.format("%A, %b %d"),
            last.format("%A, %b %d, %Y")
        ),
    }
}
