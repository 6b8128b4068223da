//! Error types for PDF assembly and output.

use thiserror::Error;

/// Errors surfaced while assembling or writing the planner PDF.
///
/// These propagate to the caller unmodified; regeneration is always safe
/// since rendering is a pure function of the planner data.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Filesystem failure writing the output artifact.
    #[error("I/O error writing planner output: {0}")]
    Io(#[from] std::io::Error),

    /// Failure inside the PDF backend.
    #[error("PDF backend error: {0}")]
    Pdf(String),
}

/// Convenience alias used throughout planner-pdf.
pub type Result<T> = std::result::Result<T, RenderError>;
