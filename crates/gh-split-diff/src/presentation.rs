//! Mapping rows to styled cells.
//!
//! Stateless: the same row and theme always give the same cells.

use crate::row::{DiffRow, RowKind};
use crate::theme::DiffTheme;
use ratatui::style::Style;

const TAB: &str = "    ";

/// Text plus the style it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedCell {
    pub text: String,
    pub style: Style,
}

impl PresentedCell {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A renderable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedRow {
    /// A hunk marker, drawn across all four columns.
    Banner(PresentedCell),
    /// Original number, original content, modified number, modified content.
    Cells([PresentedCell; 4]),
}

/// Map one row to its cells.
pub fn present_row(row: &DiffRow, theme: &impl DiffTheme) -> PresentedRow {
    if row.kind == RowKind::HunkHeader {
        return PresentedRow::Banner(PresentedCell::new(
            expand_tabs(&row.modified_content),
            theme.hunk_header(),
        ));
    }

    let style = theme.style_for(row.kind);
    let (original_style, modified_style) = match row.kind {
        RowKind::Removed => (style, theme.empty_side()),
        RowKind::Added => (theme.empty_side(), style),
        RowKind::Other => (theme.empty_side(), style),
        RowKind::Context | RowKind::HunkHeader => (style, style),
    };

    PresentedRow::Cells([
        number_cell(row.original_line, original_style, theme),
        PresentedCell::new(expand_tabs(&row.original_content), original_style),
        number_cell(row.modified_line, modified_style, theme),
        PresentedCell::new(expand_tabs(&row.modified_content), modified_style),
    ])
}

/// Map a whole row sequence.
pub fn present_rows(rows: &[DiffRow], theme: &impl DiffTheme) -> Vec<PresentedRow> {
    rows.iter().map(|row| present_row(row, theme)).collect()
}

/// The `Line | Original | Line | Modified` heading.
pub fn column_headers(theme: &impl DiffTheme) -> [PresentedCell; 4] {
    let style = theme.column_header();
    ["Line", "Original", "Line", "Modified"].map(|title| PresentedCell::new(title, style))
}

fn number_cell(number: Option<u32>, side: Style, theme: &impl DiffTheme) -> PresentedCell {
    match number {
        Some(number) => PresentedCell::new(number.to_string(), side.patch(theme.line_number())),
        None => PresentedCell::new("", side),
    }
}

fn expand_tabs(text: &str) -> String {
    text.replace('\t', TAB)
}
