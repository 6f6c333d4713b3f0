//! Hunk marker recognition.

use regex::Regex;
use std::sync::OnceLock;

/// Starting line numbers announced by a hunk marker.
///
/// The line counts of the marker are accepted but not kept: row generation
/// only needs to know where each side starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    /// First line of the hunk in the original file.
    pub old_start: u32,
    /// First line of the hunk in the modified file.
    pub new_start: u32,
}

/// Parse a `@@ -<old>[,<count>] +<new>[,<count>] @@` line.
///
/// Anything after the closing `@@` (GitHub puts the enclosing function there)
/// is ignored. Returns `None` for any line that does not carry both starts,
/// so a half-formed marker never updates just one side.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    static HUNK_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HUNK_REGEX
        .get_or_init(|| Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap());

    let captures = re.captures(line)?;
    let old_start = captures.get(1)?.as_str().parse().ok()?;
    let new_start = captures.get(3)?.as_str().parse().ok()?;

    Some(HunkHeader {
        old_start,
        new_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(old_start: u32, new_start: u32) -> Option<HunkHeader> {
        Some(HunkHeader {
            old_start,
            new_start,
        })
    }

    #[test]
    fn test_parse_with_counts() {
        assert_eq!(parse_hunk_header("@@ -10,7 +12,9 @@"), header(10, 12));
    }

    #[test]
    fn test_parse_without_counts() {
        assert_eq!(parse_hunk_header("@@ -3 +4 @@"), header(3, 4));
        assert_eq!(parse_hunk_header("@@ -3,2 +4 @@"), header(3, 4));
    }

    #[test]
    fn test_parse_keeps_section_heading_out() {
        assert_eq!(
            parse_hunk_header("@@ -120,6 +121,8 @@ impl Store {"),
            header(120, 121)
        );
    }

    #[test]
    fn test_parse_created_and_deleted_file_markers() {
        assert_eq!(parse_hunk_header("@@ -0,0 +1,3 @@"), header(0, 1));
        assert_eq!(parse_hunk_header("@@ -1,3 +0,0 @@"), header(1, 0));
    }

    #[test]
    fn test_lines_without_marker_prefix_do_not_match() {
        for line in [
            "",
            " @@ -1,2 +1,2 @@",
            "-@@ -1,2 +1,2 @@",
            "+++ b/src/main.rs",
            "diff --git a/x b/x",
            "-1,2 +1,2 @@",
        ] {
            assert_eq!(parse_hunk_header(line), None, "line {line:?}");
        }
    }

    #[test]
    fn test_malformed_markers_do_not_match() {
        for line in [
            "@@",
            "@@ -1,2 @@",
            "@@ +1,2 @@",
            "@@ -a,2 +1,2 @@",
            "@@ -1,2 +1,2",
            "@@ -99999999999,1 +1,1 @@",
        ] {
            assert_eq!(parse_hunk_header(line), None, "line {line:?}");
        }
    }
}
