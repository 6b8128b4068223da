//! Per-subject display styling: highlight color and abbreviated name.
//!
//! The mapping must be total over the dataset's subjects. A lookup miss is a
//! data-entry error, not a runtime condition, so callers run
//! [`StyleTable::verify_complete`] once at startup and get a single error
//! listing every missing subject instead of failing lazily mid-render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::ScheduleDataset;
use crate::error::{PlannerError, Result};

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Display styling for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStyle {
    /// Highlight color for this subject's summary rows and grid cells.
    pub color: Color,
    /// Abbreviated subject name used where the full name will not fit.
    pub short_name: String,
}

/// Mapping from subject name to its display style.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    entries: BTreeMap<String, SubjectStyle>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the style for a subject.
    pub fn insert(&mut self, subject: impl Into<String>, style: SubjectStyle) {
        self.entries.insert(subject.into(), style);
    }

    /// Look up the full style entry for a subject.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::MissingStyle`] naming the subject. Reaching
    /// this after [`verify_complete`](Self::verify_complete) passed would be
    /// a bug.
    pub fn style_for(&self, subject: &str) -> Result<&SubjectStyle> {
        self.entries
            .get(subject)
            .ok_or_else(|| PlannerError::MissingStyle {
                subjects: subject.to_string(),
            })
    }

    /// The highlight color for a subject.
    pub fn color_for(&self, subject: &str) -> Result<Color> {
        Ok(self.style_for(subject)?.color)
    }

    /// Check that the table covers every subject in the dataset.
    ///
    /// # Errors
    ///
    /// Returns a single [`PlannerError::MissingStyle`] listing all missing
    /// subjects, comma-separated, in alphabetical order.
    pub fn verify_complete(&self, dataset: &ScheduleDataset) -> Result<()> {
        let missing: Vec<&str> = dataset
            .subjects()
            .into_iter()
            .filter(|s| !self.entries.contains_key(*s))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PlannerError::MissingStyle {
                subjects: missing.join(", "),
            })
        }
    }
}
