//! # planner-pdf
//!
//! PDF assembly for the exam day planner. Consumes the [`TableSpec`] and
//! [`PageSpec`] view structures from `planner-core` and lays them out on
//! landscape A4 pages with `printpdf`, using the builtin Helvetica faces so
//! no font files are needed at run time.
//!
//! Output is written atomically: bytes go to a sibling `.tmp` file which is
//! renamed into place, so a failed run never leaves a partial artifact.

pub mod error;
mod layout;

pub use error::RenderError;

use std::fs;
use std::path::{Path, PathBuf};

use planner_core::{Color, PageSpec, TableSpec};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Rect, Rgb,
};

use crate::error::Result;

// Fixed chrome palette, carried over from the original planner.
const DARK_GREY: Color = Color::new(0.3, 0.3, 0.3);
const MUTED_GREY: Color = Color::new(0.9, 0.9, 0.9);
const HEADER_GREY: Color = Color::new(0.5, 0.5, 0.5);
const WHITE_SMOKE: Color = Color::new(0.961, 0.961, 0.961);
const BEIGE: Color = Color::new(0.961, 0.961, 0.863);
const LIGHT_GREY: Color = Color::new(0.827, 0.827, 0.827);
const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// A planner document under assembly.
///
/// Pages are appended in call order: typically one summary page followed by
/// the grid pages, then [`save`](Self::save).
pub struct PlannerDocument {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    // printpdf creates the first page up front; hand it out once.
    first_page: Option<(PdfPageIndex, PdfLayerIndex)>,
}

impl PlannerDocument {
    /// Create an empty document with the builtin Helvetica faces loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Pdf`] if the backend rejects a builtin font,
    /// which would indicate a broken `printpdf` install.
    pub fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(layout::PAGE_W), Mm(layout::PAGE_H), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(Self {
            doc,
            regular,
            bold,
            first_page: Some((page, layer)),
        })
    }

    /// Render the overview page: a centred heading and up to two sitting
    /// tables side by side.
    pub fn render_summary_page(&mut self, heading: &str, tables: &[TableSpec]) {
        let layer = self.next_page();

        let heading_size = 16.0;
        let top = layout::PAGE_H - layout::MARGIN - 8.0;
        let x = layout::centered_x(layout::MARGIN, layout::content_width(), heading, heading_size);
        text(&layer, &self.bold, heading_size, x, top, heading, DARK_GREY);

        let table_w = layout::summary_table_width();
        let tables_top = top - 12.0;
        for (i, table) in tables.iter().take(2).enumerate() {
            let x = layout::MARGIN + i as f32 * (table_w + layout::SUMMARY_GAP);
            self.summary_table_at(&layer, x, tables_top, table_w, table);
        }
    }

    /// Render one grid page: a title band, then a table with a time column
    /// and one column per day. Exam cells get the subject color, weekend
    /// columns a muted grey, remaining rows alternate white and light grey.
    pub fn render_grid_page(&mut self, page: &PageSpec) {
        let layer = self.next_page();

        text(
            &layer,
            &self.bold,
            14.0,
            layout::MARGIN,
            layout::PAGE_H - layout::MARGIN - 6.0,
            &page.title,
            DARK_GREY,
        );

        let num_rows = page.days.first().map(|d| d.cells.len()).unwrap_or(0);
        if num_rows == 0 {
            return;
        }

        let table_top = layout::PAGE_H - layout::MARGIN - 12.0;
        let header_h = 8.0;
        let row_h = layout::row_height(table_top - header_h - layout::MARGIN, num_rows);
        let col_w = layout::grid_col_widths(page.days.len());

        // Header row: "Time" then one heading per day.
        let header_y = table_top - header_h;
        let mut cx = layout::MARGIN;
        cell(&layer, cx, header_y, col_w[0], header_h, HEADER_GREY);
        let tx = layout::centered_x(cx, col_w[0], "Time", 9.0);
        text(&layer, &self.bold, 9.0, tx, header_y + 2.5, "Time", WHITE_SMOKE);
        cx += col_w[0];
        for (day, w) in page.days.iter().zip(col_w.iter().skip(1)) {
            cell(&layer, cx, header_y, *w, header_h, HEADER_GREY);
            let tx = layout::centered_x(cx, *w, &day.heading, 9.0);
            text(&layer, &self.bold, 9.0, tx, header_y + 2.5, &day.heading, WHITE_SMOKE);
            cx += w;
        }

        // Body rows.
        for row in 0..num_rows {
            let y = header_y - (row as f32 + 1.0) * row_h;
            let stripe = if row % 2 == 1 { LIGHT_GREY } else { WHITE };

            let label = &page.days[0].cells[row].label;
            cell(&layer, layout::MARGIN, y, col_w[0], row_h, stripe);
            let tx = layout::centered_x(layout::MARGIN, col_w[0], label, 8.0);
            text(&layer, &self.regular, 8.0, tx, y + row_h / 2.0 - 1.2, label, DARK_GREY);

            let mut cx = layout::MARGIN + col_w[0];
            for (day, w) in page.days.iter().zip(col_w.iter().skip(1)) {
                let day_cell = &day.cells[row];
                let bg = match &day_cell.exam {
                    Some(exam) => exam.color,
                    None if day.is_weekend => MUTED_GREY,
                    None => stripe,
                };
                cell(&layer, cx, y, *w, row_h, bg);
                if let Some(exam) = &day_cell.exam {
                    // Two centred lines: subject, then paper.
                    let mid = y + row_h / 2.0;
                    let tx = layout::centered_x(cx, *w, &exam.subject, 9.0);
                    text(&layer, &self.bold, 9.0, tx, mid + 0.8, &exam.subject, DARK_GREY);
                    let tx = layout::centered_x(cx, *w, &exam.paper, 8.0);
                    text(&layer, &self.regular, 8.0, tx, mid - 3.0, &exam.paper, DARK_GREY);
                }
                cx += w;
            }
        }
    }

    /// Serialize the document to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Pdf`] if the backend fails to serialize.
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }

    /// Write the document to `path`, atomically: bytes land in a sibling
    /// `.tmp` file first and are renamed into place, so an interrupted or
    /// failed write never leaves a partial artifact at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Pdf`] on serialization failure or
    /// [`RenderError::Io`] if the destination is unwritable.
    pub fn save(self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        let tmp = tmp_path(path);
        fs::write(&tmp, &bytes)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn next_page(&mut self) -> PdfLayerReference {
        let (page, layer) = match self.first_page.take() {
            Some(first) => first,
            None => self
                .doc
                .add_page(Mm(layout::PAGE_W), Mm(layout::PAGE_H), "content"),
        };
        let layer = self.doc.get_page(page).get_layer(layer);
        layer.set_outline_color(pdf_color(DARK_GREY));
        layer.set_outline_thickness(0.75);
        layer
    }

    fn summary_table_at(
        &self,
        layer: &PdfLayerReference,
        x: f32,
        top: f32,
        width: f32,
        table: &TableSpec,
    ) {
        let col_w = layout::summary_col_widths(width);
        let header_h = 7.0;
        let row_h = 6.0;

        text(layer, &self.bold, 11.0, x, top, &table.title, DARK_GREY);

        // Header row.
        let mut y = top - 4.0 - header_h;
        let headers = ["Subject", "Paper", "Date", "Time"];
        let mut cx = x;
        for (label, w) in headers.iter().zip(col_w) {
            cell(layer, cx, y, w, header_h, HEADER_GREY);
            let tx = layout::centered_x(cx, w, label, 10.0);
            text(layer, &self.bold, 10.0, tx, y + 2.2, label, WHITE_SMOKE);
            cx += w;
        }

        // Body rows: beige, except the subject cell which takes the
        // subject's highlight color.
        for row in &table.rows {
            y -= row_h;
            let values = [
                row.subject.as_str(),
                row.paper.as_str(),
                row.date.as_str(),
                row.time.as_str(),
            ];
            let mut cx = x;
            for (i, (value, w)) in values.iter().zip(col_w).enumerate() {
                let bg = if i == 0 { row.color } else { BEIGE };
                cell(layer, cx, y, w, row_h, bg);
                let tx = layout::centered_x(cx, w, value, 8.0);
                text(layer, &self.regular, 8.0, tx, y + 1.8, value, DARK_GREY);
                cx += w;
            }
        }
    }
}

fn pdf_color(c: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(c.r, c.g, c.b, None))
}

/// Draw one bordered, filled table cell. `(x, y)` is the lower-left corner.
fn cell(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, fill: Color) {
    layer.set_fill_color(pdf_color(fill));
    let rect = Rect::new(Mm(x), Mm(y), Mm(x + w), Mm(y + h)).with_mode(PaintMode::FillStroke);
    layer.add_rect(rect);
}

/// Place a text run with the given fill color. `y` is the baseline.
fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    x: f32,
    y: f32,
    s: &str,
    color: Color,
) {
    layer.set_fill_color(pdf_color(color));
    layer.use_text(s, size, Mm(x), Mm(y), font);
}

/// Sibling temp path for atomic writes: `planner.pdf` → `planner.pdf.tmp`.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "planner".into());
    name.push(".tmp");
    path.with_file_name(name)
}
