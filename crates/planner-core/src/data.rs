//! The shipped Grade 12 / 2025 exam schedule, subject styling, and planner
//! defaults.
//!
//! Everything here is static literal data: the two sittings' papers with
//! their timestamps, the per-subject highlight palette and abbreviations,
//! and the planner's date span. The dataset goes through the same
//! [`ScheduleDataset::new`] validation as any other input, so a bad edit
//! here fails fast at startup instead of producing a misleading planner.

use chrono::{NaiveDate, NaiveDateTime};

use crate::dataset::{ExamRecord, ScheduleDataset, Sitting};
use crate::error::Result;
use crate::grid::PlannerRange;
use crate::style::{Color, StyleTable, SubjectStyle};

/// Grade level the shipped planner covers.
pub const GRADE: u32 = 12;
/// Exam year of the shipped dataset.
pub const EXAM_YEAR: i32 = 2025;

/// Heading of the summary overview page.
pub const OVERVIEW_TITLE: &str = "Grade 12 Exam Schedule Overview";
/// Heading of the trial-sitting summary table.
pub const TRIAL_SUMMARY_TITLE: &str = "Trial Exams (September 2025)";
/// Heading of the final-sitting summary table.
pub const FINAL_SUMMARY_TITLE: &str = "Final Exams (October-November 2025)";
/// Default output artifact name, `Grade<N>_Exam_Day_Planner_<year>.pdf`.
pub const DEFAULT_OUTPUT_NAME: &str = "Grade12_Exam_Day_Planner_2025.pdf";

const LIFE_ORIENTATION: &str = "Life Orientation (L.O.)";
const ENGLISH: &str = "English Home Language";
const AFRIKAANS: &str = "Afrikaans First Additional Language";
const MATHEMATICS: &str = "Mathematics";
const LIFE_SCIENCES: &str = "Life Sciences";
const INFORMATION_TECHNOLOGY: &str = "Information Technology";
const PHYSICAL_SCIENCE: &str = "Physical Science";

// Named colors carried over from the original planner palette.
const LIGHT_BLUE: Color = Color::new(0.678, 0.847, 0.902);
const LIGHT_CORAL: Color = Color::new(0.941, 0.502, 0.502);
const LIGHT_GREEN: Color = Color::new(0.565, 0.933, 0.565);
const LIGHT_YELLOW: Color = Color::new(1.0, 1.0, 0.878);
const LIGHT_PINK: Color = Color::new(1.0, 0.714, 0.757);
const LIGHT_CYAN: Color = Color::new(0.878, 1.0, 1.0);
const LAVENDER: Color = Color::new(0.902, 0.902, 0.980);

/// Naive timestamp from literal components.
///
/// Panics on out-of-range components; the literals below are fixed data and
/// an invalid one is a data-entry error caught on first use.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("static exam data uses valid calendar dates")
}

fn exam(
    subject: &str,
    paper: &str,
    sitting: Sitting,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> ExamRecord {
    ExamRecord {
        subject: subject.to_string(),
        paper: paper.to_string(),
        start,
        end,
        sitting,
    }
}

/// The full Grade 12 / 2025 schedule: 15 trial papers and 15 final papers.
///
/// # Errors
///
/// Returns a [`crate::PlannerError`] if the literals ever violate the
/// dataset invariants.
pub fn grade12_dataset() -> Result<ScheduleDataset> {
    use Sitting::{Final, Trial};

    let records = vec![
        // Trial sitting, September 2025.
        exam(LIFE_ORIENTATION, "CAT", Trial, at(2025, 9, 1, 9, 0), at(2025, 9, 1, 11, 30)),
        exam(ENGLISH, "Paper II", Trial, at(2025, 9, 2, 9, 0), at(2025, 9, 2, 11, 30)),
        exam(ENGLISH, "Paper III", Trial, at(2025, 9, 9, 9, 0), at(2025, 9, 9, 12, 0)),
        exam(ENGLISH, "Paper I", Trial, at(2025, 9, 11, 9, 0), at(2025, 9, 11, 11, 0)),
        exam(AFRIKAANS, "Paper III", Trial, at(2025, 9, 4, 9, 0), at(2025, 9, 4, 11, 30)),
        exam(AFRIKAANS, "Paper II", Trial, at(2025, 9, 12, 9, 0), at(2025, 9, 12, 11, 0)),
        exam(AFRIKAANS, "Paper I", Trial, at(2025, 9, 18, 9, 0), at(2025, 9, 18, 11, 0)),
        exam(MATHEMATICS, "Paper I", Trial, at(2025, 9, 8, 9, 0), at(2025, 9, 8, 12, 0)),
        exam(MATHEMATICS, "Paper II", Trial, at(2025, 9, 22, 9, 0), at(2025, 9, 22, 12, 0)),
        exam(LIFE_SCIENCES, "Paper I", Trial, at(2025, 9, 4, 13, 0), at(2025, 9, 4, 15, 30)),
        exam(LIFE_SCIENCES, "Paper II", Trial, at(2025, 9, 17, 9, 0), at(2025, 9, 17, 11, 30)),
        exam(INFORMATION_TECHNOLOGY, "Paper II (Theory)", Trial, at(2025, 9, 9, 13, 30), at(2025, 9, 9, 16, 30)),
        exam(INFORMATION_TECHNOLOGY, "Paper I (Practical)", Trial, at(2025, 9, 10, 9, 0), at(2025, 9, 10, 12, 0)),
        exam(PHYSICAL_SCIENCE, "Paper I (Physics)", Trial, at(2025, 9, 15, 9, 0), at(2025, 9, 15, 12, 0)),
        exam(PHYSICAL_SCIENCE, "Paper II (Chemistry)", Trial, at(2025, 9, 25, 9, 0), at(2025, 9, 25, 12, 0)),
        // Final sitting, October-November 2025.
        exam(ENGLISH, "Paper 3", Final, at(2025, 10, 23, 9, 0), at(2025, 10, 23, 12, 0)),
        exam(ENGLISH, "Paper 1", Final, at(2025, 10, 29, 9, 0), at(2025, 10, 29, 11, 0)),
        exam(ENGLISH, "Paper 2", Final, at(2025, 11, 13, 9, 0), at(2025, 11, 13, 11, 30)),
        exam(AFRIKAANS, "Paper 3", Final, at(2025, 10, 24, 9, 0), at(2025, 10, 24, 11, 30)),
        exam(AFRIKAANS, "Paper 1", Final, at(2025, 11, 11, 9, 0), at(2025, 11, 11, 11, 0)),
        exam(AFRIKAANS, "Paper 2", Final, at(2025, 11, 21, 9, 0), at(2025, 11, 21, 11, 30)),
        exam(MATHEMATICS, "Paper 1", Final, at(2025, 10, 31, 9, 0), at(2025, 10, 31, 12, 0)),
        exam(MATHEMATICS, "Paper 2", Final, at(2025, 11, 3, 9, 0), at(2025, 11, 3, 12, 0)),
        exam(LIFE_SCIENCES, "Paper 1", Final, at(2025, 11, 14, 9, 0), at(2025, 11, 14, 11, 30)),
        exam(LIFE_SCIENCES, "Paper 2", Final, at(2025, 11, 17, 9, 0), at(2025, 11, 17, 11, 30)),
        exam(INFORMATION_TECHNOLOGY, "Paper 1 (Practical)", Final, at(2025, 10, 22, 9, 0), at(2025, 10, 22, 12, 0)),
        exam(INFORMATION_TECHNOLOGY, "Paper 2 (Theory)", Final, at(2025, 11, 13, 14, 0), at(2025, 11, 13, 17, 0)),
        exam(INFORMATION_TECHNOLOGY, "Practical Rewrite", Final, at(2025, 11, 27, 9, 0), at(2025, 11, 27, 12, 0)),
        exam(PHYSICAL_SCIENCE, "Paper 1 (Physics)", Final, at(2025, 11, 7, 9, 0), at(2025, 11, 7, 12, 0)),
        exam(PHYSICAL_SCIENCE, "Paper 2 (Chemistry)", Final, at(2025, 11, 10, 9, 0), at(2025, 11, 10, 12, 0)),
    ];

    ScheduleDataset::new(records)
}

/// Highlight colors and abbreviations for the seven shipped subjects.
pub fn grade12_styles() -> StyleTable {
    let entries = [
        (LIFE_ORIENTATION, "Life Orientation (L.O.)", LIGHT_BLUE),
        (ENGLISH, "Eng. Home Language", LIGHT_CORAL),
        (AFRIKAANS, "Afr. First Additional Language", LIGHT_GREEN),
        (MATHEMATICS, "Mathematics", LIGHT_YELLOW),
        (LIFE_SCIENCES, "Life Sciences", LIGHT_PINK),
        (INFORMATION_TECHNOLOGY, "Information Technology", LIGHT_CYAN),
        (PHYSICAL_SCIENCE, "Physical Science", LAVENDER),
    ];

    let mut table = StyleTable::new();
    for (subject, short_name, color) in entries {
        table.insert(
            subject,
            SubjectStyle {
                color,
                short_name: short_name.to_string(),
            },
        );
    }
    table
}

/// Planner span of the shipped dataset: 2025-08-26 through 2025-11-29.
pub fn default_range() -> PlannerRange {
    PlannerRange::new(day(2025, 8, 26), day(2025, 11, 29))
        .expect("static planner range is ordered")
}

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("static planner range uses valid dates")
}
