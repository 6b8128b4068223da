//! Hour-slot occupancy lookup over the exam schedule.
//!
//! An hour slot is the half-open window `[d@h:00, d@h:00 + 1h)`. A record
//! occupies a slot when its own half-open interval `[start, end)` intersects
//! the slot, i.e. `start < slot_end && end > slot_start`. An exam ending
//! exactly on an hour boundary does NOT occupy that boundary hour: a
//! 09:00–12:00 exam fills the 9, 10, and 11 o'clock rows and leaves 12 empty.

use chrono::{Duration, NaiveDate};

use crate::dataset::{ExamRecord, ScheduleDataset};

/// Find the exam occupying the given hour slot, if any.
///
/// When more than one record intersects the slot — which the shipped dataset
/// never produces, but which could arise if the trial and final sittings were
/// ever scheduled to overlap — the record with the earliest start wins; on
/// equal starts, dataset order (trial before final) wins. The policy is
/// pinned by tests precisely because the data never exercises it.
///
/// Hours outside `0..=23` never match. Hour 0 is midnight at the start of
/// `date`.
///
/// Linear scan: the record set is fixed and small, so no index is kept.
pub fn find_exam(dataset: &ScheduleDataset, date: NaiveDate, hour: u32) -> Option<&ExamRecord> {
    let slot_start = date.and_hms_opt(hour, 0, 0)?;
    let slot_end = slot_start + Duration::hours(1);

    let mut best: Option<&ExamRecord> = None;
    for record in dataset.all_records() {
        if record.start < slot_end && record.end > slot_start {
            match best {
                Some(b) if b.start <= record.start => {}
                _ => best = Some(record),
            }
        }
    }
    best
}
