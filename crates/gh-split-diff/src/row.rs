//! The row model shared by the generator and the presentation layer.

/// Classification of a generated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A `@@ ... @@` marker, shown as a banner.
    HunkHeader,
    /// Line only present in the original file.
    Removed,
    /// Line only present in the modified file.
    Added,
    /// Unchanged line, present on both sides.
    Context,
    /// Anything else the patch contains (e.g. `\ No newline at end of file`).
    Other,
}

/// One line of the side-by-side view.
///
/// The two sides are independent: a removed line fills only the original
/// side, an added line only the modified side, and a context line fills both
/// with the same content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub original_line: Option<u32>,
    pub original_content: String,
    pub modified_line: Option<u32>,
    pub modified_content: String,
    pub kind: RowKind,
}

impl DiffRow {
    pub fn hunk_header(raw: &str) -> Self {
        Self::modified_only(RowKind::HunkHeader, raw)
    }

    pub fn removed(line: u32, content: &str) -> Self {
        Self {
            original_line: Some(line),
            original_content: content.to_string(),
            modified_line: None,
            modified_content: String::new(),
            kind: RowKind::Removed,
        }
    }

    pub fn added(line: u32, content: &str) -> Self {
        Self {
            original_line: None,
            original_content: String::new(),
            modified_line: Some(line),
            modified_content: content.to_string(),
            kind: RowKind::Added,
        }
    }

    pub fn context(old_line: u32, new_line: u32, content: &str) -> Self {
        Self {
            original_line: Some(old_line),
            original_content: content.to_string(),
            modified_line: Some(new_line),
            modified_content: content.to_string(),
            kind: RowKind::Context,
        }
    }

    pub fn other(raw: &str) -> Self {
        Self::modified_only(RowKind::Other, raw)
    }

    fn modified_only(kind: RowKind, raw: &str) -> Self {
        Self {
            original_line: None,
            original_content: String::new(),
            modified_line: None,
            modified_content: raw.to_string(),
            kind,
        }
    }
}
