//! Page geometry for the landscape-A4 planner.
//!
//! All lengths are millimetres. The drawing code in `lib.rs` converts to
//! `printpdf::Mm` at the call sites; keeping the math in plain `f32` keeps
//! it testable without a PDF backend.

/// Landscape A4 page width.
pub const PAGE_W: f32 = 297.0;
/// Landscape A4 page height.
pub const PAGE_H: f32 = 210.0;
/// Page margin on all sides (half an inch).
pub const MARGIN: f32 = 12.7;
/// Horizontal gap between the two side-by-side summary tables.
pub const SUMMARY_GAP: f32 = 5.0;
/// Width of the time column on grid pages.
pub const TIME_COL_W: f32 = 22.0;

/// Column width fractions of a summary table: subject, paper, date, time.
pub const SUMMARY_COL_FRACTIONS: [f32; 4] = [0.4, 0.25, 0.2, 0.15];

/// Points-to-millimetres conversion factor.
pub const PT_TO_MM: f32 = 0.352_778;

/// Usable width inside the margins.
pub fn content_width() -> f32 {
    PAGE_W - 2.0 * MARGIN
}

/// Width of one summary table when two sit side by side.
pub fn summary_table_width() -> f32 {
    (content_width() - SUMMARY_GAP) / 2.0
}

/// Absolute column widths for a summary table of the given total width.
pub fn summary_col_widths(table_w: f32) -> [f32; 4] {
    SUMMARY_COL_FRACTIONS.map(|f| f * table_w)
}

/// Column widths for a grid page: the time column plus one equal-width
/// column per day.
pub fn grid_col_widths(num_days: usize) -> Vec<f32> {
    let day_w = (content_width() - TIME_COL_W) / num_days as f32;
    let mut widths = Vec::with_capacity(1 + num_days);
    widths.push(TIME_COL_W);
    widths.resize(1 + num_days, day_w);
    widths
}

/// Height of one body row given the vertical space and row count.
pub fn row_height(available_h: f32, num_rows: usize) -> f32 {
    available_h / num_rows as f32
}

/// Approximate width of a Helvetica string in millimetres.
///
/// `printpdf` exposes no metrics for the Base-14 fonts; an average glyph
/// width of 0.5 em is close enough to centre short table labels.
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    text.chars().count() as f32 * font_size_pt * 0.5 * PT_TO_MM
}

/// X position that approximately centres `text` in a cell, clamped to a
/// 1 mm left padding so long labels never escape leftwards.
pub fn centered_x(cell_x: f32, cell_w: f32, text: &str, font_size_pt: f32) -> f32 {
    let w = text_width_mm(text, font_size_pt);
    (cell_x + (cell_w - w) / 2.0).max(cell_x + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_columns_sum_to_table_width() {
        let table_w = summary_table_width();
        let total: f32 = summary_col_widths(table_w).iter().sum();
        assert!((total - table_w).abs() < 0.01, "columns sum to {total}, want {table_w}");
    }

    #[test]
    fn two_summary_tables_and_gap_fill_the_content_width() {
        let total = 2.0 * summary_table_width() + SUMMARY_GAP;
        assert!((total - content_width()).abs() < 0.01);
    }

    #[test]
    fn grid_columns_fill_the_content_width() {
        for num_days in [1, 2] {
            let total: f32 = grid_col_widths(num_days).iter().sum();
            assert!((total - content_width()).abs() < 0.01);
            assert_eq!(grid_col_widths(num_days).len(), 1 + num_days);
        }
    }

    #[test]
    fn seventeen_rows_fit_in_the_grid_body() {
        // Title band (12 mm) and header row (8 mm) come off the top.
        let available = PAGE_H - 2.0 * MARGIN - 12.0 - 8.0;
        let h = row_height(available, 17);
        assert!(h > 8.0 && h < 11.0, "row height {h} out of expected band");
    }

    #[test]
    fn centering_stays_inside_the_cell() {
        let x = centered_x(10.0, 40.0, "Time", 10.0);
        assert!(x > 10.0);
        assert!(x + text_width_mm("Time", 10.0) < 50.0);
    }

    #[test]
    fn long_text_clamps_to_left_padding() {
        let x = centered_x(10.0, 10.0, "Afr. First Additional Language", 8.0);
        assert!((x - 11.0).abs() < f32::EPSILON);
    }
}
