//! Buffer rendering of presented rows.

use crate::presentation::{PresentedCell, PresentedRow};
use ratatui::prelude::*;

/// Minimum width of each line number column.
pub const NUMBER_WIDTH: u16 = 5;

/// Horizontal positions of the four columns within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    x: u16,
    width: u16,
    number_width: u16,
    original_width: u16,
    modified_width: u16,
}

impl ColumnLayout {
    /// Split `area` into two number columns and two equal content columns,
    /// separated by one blank column each.
    pub fn new(area: Rect) -> Self {
        Self::with_number_width(area, NUMBER_WIDTH)
    }

    /// Like [`ColumnLayout::new`], with number columns of at least
    /// `number_width` cells.
    pub fn with_number_width(area: Rect, number_width: u16) -> Self {
        let number_width = number_width.max(NUMBER_WIDTH);
        let content = area
            .width
            .saturating_sub(number_width.saturating_mul(2).saturating_add(3));
        let original_width = content / 2;
        Self {
            x: area.x,
            width: area.width,
            number_width,
            original_width,
            modified_width: content - original_width,
        }
    }

    /// A layout whose number columns fit every line number in `rows`.
    pub fn for_rows<'a>(area: Rect, rows: impl IntoIterator<Item = &'a PresentedRow>) -> Self {
        Self::with_number_width(area, number_width(rows))
    }

    fn columns(&self) -> [(u16, u16); 4] {
        let original_x = self.x.saturating_add(self.number_width + 1);
        let modified_number_x = original_x.saturating_add(self.original_width + 1);
        let modified_x = modified_number_x.saturating_add(self.number_width + 1);
        [
            (self.x, self.number_width),
            (original_x, self.original_width),
            (modified_number_x, self.number_width),
            (modified_x, self.modified_width),
        ]
    }
}

/// Cells needed by the widest line number in `rows`, never less than
/// [`NUMBER_WIDTH`].
pub fn number_width<'a>(rows: impl IntoIterator<Item = &'a PresentedRow>) -> u16 {
    rows.into_iter()
        .filter_map(|row| match row {
            PresentedRow::Cells([original, _, modified, _]) => {
                Some(original.text.chars().count().max(modified.text.chars().count()))
            }
            PresentedRow::Banner(_) => None,
        })
        .map(|width| u16::try_from(width).unwrap_or(u16::MAX))
        .fold(NUMBER_WIDTH, u16::max)
}

/// Draw a single presented row at line `y`.
pub fn render_row(row: &PresentedRow, layout: &ColumnLayout, y: u16, buf: &mut Buffer) {
    match row {
        PresentedRow::Banner(cell) => {
            buf.set_style(Rect::new(layout.x, y, layout.width, 1), cell.style);
            buf.set_stringn(layout.x, y, &cell.text, usize::from(layout.width), cell.style);
        }
        PresentedRow::Cells(cells) => render_cells(cells, layout, y, buf),
    }
}

/// Draw four cells, right-aligning the number columns.
///
/// A number wider than its column keeps its trailing digits.
pub fn render_cells(cells: &[PresentedCell; 4], layout: &ColumnLayout, y: u16, buf: &mut Buffer) {
    let right = layout.x + layout.width;
    for (index, (cell, (x, width))) in cells.iter().zip(layout.columns()).enumerate() {
        let width = width.min(right.saturating_sub(x));
        if width == 0 {
            continue;
        }
        buf.set_style(Rect::new(x, y, width, 1), cell.style);
        let text = if index % 2 == 0 {
            let width = usize::from(width);
            let overflow = cell.text.chars().count().saturating_sub(width);
            let tail: String = cell.text.chars().skip(overflow).collect();
            format!("{tail:>width$}")
        } else {
            cell.text.clone()
        };
        buf.set_stringn(x, y, text, usize::from(width), cell.style);
    }
}

/// Scrollable side-by-side diff.
pub struct SplitDiffView<'a> {
    rows: &'a [PresentedRow],
    headers: Option<&'a [PresentedCell; 4]>,
    offset: usize,
}

impl<'a> SplitDiffView<'a> {
    pub fn new(rows: &'a [PresentedRow]) -> Self {
        Self {
            rows,
            headers: None,
            offset: 0,
        }
    }

    /// Pin a heading row above the scrolled rows.
    pub fn headers(mut self, headers: &'a [PresentedCell; 4]) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Number of rows scrolled past.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for SplitDiffView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let layout = ColumnLayout::for_rows(area, self.rows);
        let mut y = area.y;

        if let Some(headers) = self.headers {
            render_cells(headers, &layout, y, buf);
            y += 1;
        }

        for row in self.rows.iter().skip(self.offset) {
            if y >= area.bottom() {
                break;
            }
            render_row(row, &layout, y, buf);
            y += 1;
        }
    }
}
