//! The immutable exam schedule dataset.
//!
//! Records are validated and sorted once at construction — trial sitting
//! before final, then by start time — and never mutated afterwards. The two
//! integrity checks (`start < end`, no duplicate paper label within a
//! subject+sitting) run here so that every later stage can assume clean data.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// One of the two exam rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sitting {
    /// The trial (preliminary) sitting.
    Trial,
    /// The final sitting.
    Final,
}

impl fmt::Display for Sitting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sitting::Trial => write!(f, "trial"),
            Sitting::Final => write!(f, "final"),
        }
    }
}

/// A single exam paper with its scheduled time slot.
///
/// Timestamps are naive local times; the planner has no timezone concerns.
/// The occupied interval is half-open: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub subject: String,
    pub paper: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub sitting: Sitting,
}

/// The full exam schedule, validated and ordered.
#[derive(Debug, Clone)]
pub struct ScheduleDataset {
    records: Vec<ExamRecord>,
}

impl ScheduleDataset {
    /// Build a dataset from raw records, enforcing the data-entry invariants:
    /// every record must satisfy `start < end`, and no two records for the
    /// same subject and sitting may share a paper label.
    ///
    /// Records are stored sorted by sitting (trial first), then start time.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvertedInterval`] or
    /// [`PlannerError::DuplicatePaper`] naming the offending record.
    pub fn new(mut records: Vec<ExamRecord>) -> Result<Self> {
        for r in &records {
            if r.start >= r.end {
                return Err(PlannerError::InvertedInterval {
                    subject: r.subject.clone(),
                    paper: r.paper.clone(),
                });
            }
        }

        {
            let mut seen: BTreeSet<(&str, Sitting, &str)> = BTreeSet::new();
            for r in &records {
                if !seen.insert((r.subject.as_str(), r.sitting, r.paper.as_str())) {
                    return Err(PlannerError::DuplicatePaper {
                        subject: r.subject.clone(),
                        sitting: r.sitting,
                        paper: r.paper.clone(),
                    });
                }
            }
        }

        records.sort_by(|a, b| a.sitting.cmp(&b.sitting).then(a.start.cmp(&b.start)));
        Ok(Self { records })
    }

    /// All records, trial sitting first, then ascending by start time.
    pub fn all_records(&self) -> &[ExamRecord] {
        &self.records
    }

    /// Records for one sitting, in ascending start order.
    pub fn records_for(&self, sitting: Sitting) -> impl Iterator<Item = &ExamRecord> {
        self.records.iter().filter(move |r| r.sitting == sitting)
    }

    /// The set of distinct subject names across both sittings.
    pub fn subjects(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.subject.as_str()).collect()
    }

    /// Total number of records across both sittings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
