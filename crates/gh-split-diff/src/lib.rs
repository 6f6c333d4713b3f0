//! # gh-split-diff
//!
//! Turns the unified-diff patch of a single file (as returned by the GitHub
//! pull request files endpoint) into a two-column view: original on the left,
//! modified on the right, each side with its own line numbers.
//!
//! The crate is split in three layers:
//!
//! - [`hunk`] recognises `@@ -a,b +c,d @@` markers.
//! - [`generator`] walks the patch line by line and produces [`DiffRow`]s,
//!   advancing an explicit pair of [`LineCounters`].
//! - [`presentation`] maps each row to styled cells, which [`SplitDiffView`]
//!   lays out in a ratatui buffer.
//!
//! Everything here is pure and total: malformed input degrades to plain rows
//! and never produces an error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gh_split_diff::{present_rows, rows_for_patch, DefaultDiffTheme, SplitDiffView};
//!
//! let rows = rows_for_patch(patch);
//! let presented = present_rows(&rows, &DefaultDiffTheme);
//! SplitDiffView::new(&presented).render(area, buf);
//! ```

pub mod generator;
pub mod hunk;
pub mod presentation;
pub mod row;
pub mod theme;
pub mod widget;

pub use generator::{generate_rows, rows_for_patch, LineCounters};
pub use hunk::{parse_hunk_header, HunkHeader};
pub use presentation::{column_headers, present_row, present_rows, PresentedCell, PresentedRow};
pub use row::{DiffRow, RowKind};
pub use theme::{DefaultDiffTheme, DiffTheme};
pub use widget::{number_width, SplitDiffView};
