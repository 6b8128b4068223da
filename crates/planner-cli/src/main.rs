//! `exam-planner` CLI — renders the Grade 12 exam day planner PDF.
//!
//! ## Usage
//!
//! ```sh
//! # Write Grade12_Exam_Day_Planner_2025.pdf in the current directory
//! exam-planner
//!
//! # Custom output path
//! exam-planner -o ~/Documents/planner.pdf
//! ```
//!
//! The run is one linear pass: build the dataset, validate it against the
//! style table, build the summary and grid views, assemble the PDF, write it
//! atomically. Any validation or rendering failure aborts with a message on
//! stderr and a non-zero exit code.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use planner_core::{build_pages, data, summary_table, GridConfig, Sitting};
use planner_pdf::PlannerDocument;

#[derive(Parser)]
#[command(
    name = "exam-planner",
    version,
    about = "Grade 12 exam day planner PDF generator"
)]
struct Cli {
    /// Output path for the generated PDF (defaults to
    /// Grade12_Exam_Day_Planner_2025.pdf in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(data::DEFAULT_OUTPUT_NAME));

    // Integrity checks run up front: a bad dataset must never produce a
    // misleading partial planner.
    let dataset = data::grade12_dataset().context("exam schedule failed validation")?;
    let styles = data::grade12_styles();
    styles
        .verify_complete(&dataset)
        .context("subject style table is incomplete")?;

    let trial = summary_table(&dataset, &styles, Sitting::Trial, data::TRIAL_SUMMARY_TITLE)?;
    let finals = summary_table(&dataset, &styles, Sitting::Final, data::FINAL_SUMMARY_TITLE)?;
    let pages = build_pages(
        &dataset,
        &styles,
        data::default_range(),
        GridConfig::default(),
    )?;

    let mut doc = PlannerDocument::new(data::OVERVIEW_TITLE)?;
    doc.render_summary_page(data::OVERVIEW_TITLE, &[trial, finals]);
    for page in &pages {
        doc.render_grid_page(page);
    }
    doc.save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("PDF generated successfully: {}", output.display());
    Ok(())
}
