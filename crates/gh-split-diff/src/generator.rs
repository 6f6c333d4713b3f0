//! Row generation: the line-by-line state machine over one patch.
//!
//! The only state is the pair of [`LineCounters`]. A hunk marker overwrites
//! them, and every consumed line advances the side(s) it occupies by one.
//! Rules are checked in order and the first match wins:
//!
//! 1. `@@` marker: header row, counters reset when the marker parses
//! 2. `---` / `+++` file headers: skipped
//! 3. `-` removed, 4. `+` added, 5. ` ` context
//! 6. any other non-blank line: plain row without numbers
//! 7. blank lines: skipped

use crate::hunk::parse_hunk_header;
use crate::row::DiffRow;

/// Running line numbers for one pass over a patch.
///
/// Zeroed by [`Default`]. Each pass must own its counters; sharing them
/// across patches would carry numbering from one file into the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounters {
    /// Next line number on the original side.
    pub old: u32,
    /// Next line number on the modified side.
    pub new: u32,
}

/// Generate the rows of `patch`, advancing `counters` as lines are consumed.
///
/// Total over all inputs. On return the counters hold the line numbers that
/// would follow the last line of the final hunk.
pub fn generate_rows(patch: &str, counters: &mut LineCounters) -> Vec<DiffRow> {
    let mut rows = Vec::new();

    for raw in patch.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.starts_with("@@") {
            if let Some(header) = parse_hunk_header(line) {
                counters.old = header.old_start;
                counters.new = header.new_start;
            }
            rows.push(DiffRow::hunk_header(line));
        } else if line.starts_with("---") || line.starts_with("+++") {
            continue;
        } else if let Some(content) = line.strip_prefix('-') {
            rows.push(DiffRow::removed(counters.old, content));
            counters.old = counters.old.saturating_add(1);
        } else if let Some(content) = line.strip_prefix('+') {
            rows.push(DiffRow::added(counters.new, content));
            counters.new = counters.new.saturating_add(1);
        } else if let Some(content) = line.strip_prefix(' ') {
            rows.push(DiffRow::context(counters.old, counters.new, content));
            counters.old = counters.old.saturating_add(1);
            counters.new = counters.new.saturating_add(1);
        } else if !line.trim().is_empty() {
            rows.push(DiffRow::other(line));
        }
    }

    rows
}

/// Generate the rows of `patch` with freshly zeroed counters.
pub fn rows_for_patch(patch: &str) -> Vec<DiffRow> {
    let mut counters = LineCounters::default();
    generate_rows(patch, &mut counters)
}
