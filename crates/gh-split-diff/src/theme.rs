//! Styling hooks for the split diff.

use crate::row::RowKind;
use ratatui::style::{Color, Modifier, Style};

const SLATE_800: Color = Color::Rgb(0x1f, 0x29, 0x37);

/// Provides the styles used when presenting diff rows.
///
/// Implement this to match the host application's palette; every kind only
/// has to stay visually distinct from the others.
pub trait DiffTheme: Send + Sync {
    /// Style of the content cell of a removed line.
    fn removed(&self) -> Style;

    /// Style of the content cell of an added line.
    fn added(&self) -> Style;

    /// Style of both content cells of a context line.
    fn context(&self) -> Style;

    /// Style of the merged banner used for hunk markers.
    fn hunk_header(&self) -> Style;

    /// Style of rows that are neither marker nor diff line.
    fn other(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Style of the side a removed or added line leaves empty.
    fn empty_side(&self) -> Style {
        Style::default()
    }

    /// Style of line number cells, layered on top of the row style.
    fn line_number(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Style of the column header row.
    fn column_header(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Content style for a given row kind.
    fn style_for(&self, kind: RowKind) -> Style {
        match kind {
            RowKind::HunkHeader => self.hunk_header(),
            RowKind::Removed => self.removed(),
            RowKind::Added => self.added(),
            RowKind::Context => self.context(),
            RowKind::Other => self.other(),
        }
    }
}

/// Red/green on dark slate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDiffTheme;

impl DiffTheme for DefaultDiffTheme {
    fn removed(&self) -> Style {
        Style::default()
            .fg(Color::Rgb(0xef, 0x44, 0x44))
            .bg(Color::Rgb(0x7f, 0x1d, 0x1d))
    }

    fn added(&self) -> Style {
        Style::default()
            .fg(Color::Rgb(0x22, 0xc5, 0x5e))
            .bg(Color::Rgb(0x14, 0x53, 0x2d))
    }

    fn context(&self) -> Style {
        Style::default().fg(Color::White).bg(SLATE_800)
    }

    fn hunk_header(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .bg(SLATE_800)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_distinguishes_every_kind() {
        let kinds = [
            RowKind::HunkHeader,
            RowKind::Removed,
            RowKind::Added,
            RowKind::Context,
            RowKind::Other,
        ];
        let styles = kinds.map(|kind| DefaultDiffTheme.style_for(kind));

        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
