//! Tests for hour-slot occupancy lookup, including the half-open boundary
//! convention and the overlap tie-break policy.

use chrono::{NaiveDate, NaiveDateTime};
use planner_core::{find_exam, ExamRecord, ScheduleDataset, Sitting};

fn dt(month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn record(subject: &str, paper: &str, sitting: Sitting, start: NaiveDateTime, end: NaiveDateTime) -> ExamRecord {
    ExamRecord {
        subject: subject.to_string(),
        paper: paper.to_string(),
        start,
        end,
        sitting,
    }
}

fn dataset(records: Vec<ExamRecord>) -> ScheduleDataset {
    ScheduleDataset::new(records).unwrap()
}

#[test]
fn half_open_interval_occupies_each_full_hour() {
    // 09:00-12:00 exam: hours 9, 10, 11 occupied; 8 and 12 free.
    let ds = dataset(vec![record(
        "Mathematics",
        "Paper I",
        Sitting::Trial,
        dt(9, 8, 9, 0),
        dt(9, 8, 12, 0),
    )]);

    assert!(find_exam(&ds, date(9, 8), 8).is_none());
    assert!(find_exam(&ds, date(9, 8), 9).is_some());
    assert!(find_exam(&ds, date(9, 8), 10).is_some());
    assert!(find_exam(&ds, date(9, 8), 11).is_some());
    assert!(find_exam(&ds, date(9, 8), 12).is_none());
}

#[test]
fn exam_on_one_date_never_matches_another_date() {
    // Scenario: Mathematics Paper 1, Sep 8 08:00-11:00.
    let ds = dataset(vec![record(
        "Mathematics",
        "Paper 1",
        Sitting::Trial,
        dt(9, 8, 8, 0),
        dt(9, 8, 11, 0),
    )]);

    assert!(find_exam(&ds, date(9, 8), 8).is_some());
    assert!(find_exam(&ds, date(9, 8), 11).is_none());
    assert!(find_exam(&ds, date(9, 9), 8).is_none());
}

#[test]
fn partial_final_hour_is_occupied() {
    // 09:00-11:30: the 11 o'clock slot intersects [11:00, 11:30), so it is
    // occupied even though the exam does not fill the whole hour.
    let ds = dataset(vec![record(
        "Life Sciences",
        "Paper II",
        Sitting::Trial,
        dt(9, 17, 9, 0),
        dt(9, 17, 11, 30),
    )]);

    assert!(find_exam(&ds, date(9, 17), 11).is_some());
    assert!(find_exam(&ds, date(9, 17), 12).is_none());
}

#[test]
fn end_on_hour_boundary_does_not_occupy_that_hour() {
    let ds = dataset(vec![record(
        "English Home Language",
        "Paper I",
        Sitting::Trial,
        dt(9, 11, 9, 0),
        dt(9, 11, 11, 0),
    )]);

    assert!(find_exam(&ds, date(9, 11), 10).is_some());
    assert!(find_exam(&ds, date(9, 11), 11).is_none());
}

#[test]
fn start_mid_hour_occupies_that_hour() {
    // 13:30-16:30: the 13 o'clock slot intersects [13:30, 14:00).
    let ds = dataset(vec![record(
        "Information Technology",
        "Paper II (Theory)",
        Sitting::Trial,
        dt(9, 9, 13, 30),
        dt(9, 9, 16, 30),
    )]);

    assert!(find_exam(&ds, date(9, 9), 13).is_some());
    assert!(find_exam(&ds, date(9, 9), 16).is_some());
    assert!(find_exam(&ds, date(9, 9), 17).is_none());
}

#[test]
fn overlap_tie_break_prefers_earliest_start() {
    // Cross-sitting overlap (never present in the shipped data): the final
    // exam starts earlier, so it wins the shared 10 o'clock slot even though
    // trial records sort first in the dataset.
    let ds = dataset(vec![
        record("Mathematics", "Paper I", Sitting::Trial, dt(9, 8, 10, 0), dt(9, 8, 13, 0)),
        record("Physical Science", "Paper 1", Sitting::Final, dt(9, 8, 9, 0), dt(9, 8, 12, 0)),
    ]);

    let hit = find_exam(&ds, date(9, 8), 10).unwrap();
    assert_eq!(hit.subject, "Physical Science");

    // The 12 o'clock slot is only covered by the trial exam.
    let hit = find_exam(&ds, date(9, 8), 12).unwrap();
    assert_eq!(hit.subject, "Mathematics");
}

#[test]
fn overlap_tie_break_on_equal_starts_prefers_trial() {
    let ds = dataset(vec![
        record("Mathematics", "Paper I", Sitting::Trial, dt(9, 8, 9, 0), dt(9, 8, 12, 0)),
        record("Physical Science", "Paper 1", Sitting::Final, dt(9, 8, 9, 0), dt(9, 8, 12, 0)),
    ]);

    let hit = find_exam(&ds, date(9, 8), 9).unwrap();
    assert_eq!(hit.sitting, Sitting::Trial);
    assert_eq!(hit.subject, "Mathematics");
}

#[test]
fn midnight_hour_zero_belongs_to_its_own_date() {
    // An exam running over midnight occupies hour 23 of its start date and
    // hour 0 of the following date.
    let ds = dataset(vec![record(
        "Mathematics",
        "Evening Session",
        Sitting::Trial,
        dt(9, 8, 23, 30),
        dt(9, 9, 0, 30),
    )]);

    assert!(find_exam(&ds, date(9, 8), 23).is_some());
    assert!(find_exam(&ds, date(9, 9), 0).is_some());
    assert!(find_exam(&ds, date(9, 9), 1).is_none());
    assert!(find_exam(&ds, date(9, 8), 0).is_none());
}

#[test]
fn out_of_range_hour_returns_none() {
    let ds = dataset(vec![record(
        "Mathematics",
        "Paper I",
        Sitting::Trial,
        dt(9, 8, 9, 0),
        dt(9, 8, 12, 0),
    )]);
    assert!(find_exam(&ds, date(9, 8), 24).is_none());
}

#[test]
fn empty_dataset_matches_nothing() {
    let ds = dataset(vec![]);
    assert!(find_exam(&ds, date(9, 8), 9).is_none());
}
