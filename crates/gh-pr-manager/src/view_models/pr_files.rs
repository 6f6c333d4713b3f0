//! View model for the changed files screen
//!
//! The screen is one scrollable document: a summary header, then per file a
//! small header block followed by its split diff. Diff rows stay structured
//! ([`PresentedRow`]) so the view can draw them in columns.
//!
//! The per-file sections are built once when the files arrive (see
//! [`file_lines`]) and kept in [`PrFilesState`]. Only the summary header is
//! built per frame, since its totals depend on the loaded PR details.

use super::{key_hints, KeyHint};
use crate::domain_models::LoadingState;
use crate::keymap::{CommandId, Keymap};
use crate::state::PrFilesState;
use crate::theme::Theme;
use gh_client::{ChangedFile, FileStatus, PullRequestDetails};
use gh_split_diff::{present_rows, rows_for_patch, PresentedRow};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const FILES_COMMANDS: [CommandId; 5] = [
    CommandId::NavigateNext,
    CommandId::ScrollPageDown,
    CommandId::NavigateToTop,
    CommandId::NavigateToBottom,
    CommandId::GlobalClose,
];

const SEPARATOR_WIDTH: usize = 80;

/// Lines produced by [`header_lines`]
pub const HEADER_HEIGHT: usize = 5;

/// One line of the files document
#[derive(Debug, Clone)]
pub enum DocumentLine {
    Text(Line<'static>),
    /// The `Line | Original | Line | Modified` heading of a diff
    DiffHeader,
    Diff(PresentedRow),
}

/// Totals shown in the summary header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub additions: u64,
    pub deletions: u64,
}

impl Totals {
    /// PR totals when known, otherwise summed over the files
    pub fn new(details: Option<&PullRequestDetails>, files: &[ChangedFile]) -> Self {
        match details {
            Some(details) => Self {
                files: details.changed_files,
                additions: details.additions,
                deletions: details.deletions,
            },
            None => Self {
                files: files.len() as u64,
                additions: files.iter().map(|f| f.additions).sum(),
                deletions: files.iter().map(|f| f.deletions).sum(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrFilesViewModel<'a> {
    /// Summary header, or the loading / error message
    pub header: Vec<DocumentLine>,
    /// Per-file sections, borrowed from the state
    pub body: &'a [DocumentLine],
    /// Width of the line number columns of every diff in `body`
    pub number_width: u16,
    pub scroll: usize,
    pub hints: Vec<KeyHint>,
}

impl<'a> PrFilesViewModel<'a> {
    pub fn from_state(
        state: &'a PrFilesState,
        details: Option<&PullRequestDetails>,
        keymap: &Keymap,
        theme: &Theme,
    ) -> Self {
        let number = state.target.as_ref().map(|key| key.number).unwrap_or_default();

        let nothing: &[DocumentLine] = &[];
        let (header, body) = match &state.loading {
            LoadingState::Error(error) => (
                vec![
                    DocumentLine::Text(Line::from(Span::styled(
                        "Error Loading Files",
                        theme.error(),
                    ))),
                    DocumentLine::Text(Line::from("")),
                    DocumentLine::Text(Line::from(Span::styled(error.clone(), theme.text()))),
                ],
                nothing,
            ),
            LoadingState::Loaded => (
                header_lines(number, Totals::new(details, &state.files), theme),
                state.body.as_slice(),
            ),
            LoadingState::Idle | LoadingState::Loading => (
                vec![DocumentLine::Text(Line::from(Span::styled(
                    "Loading file changes...",
                    theme.muted(),
                )))],
                nothing,
            ),
        };

        Self {
            header,
            body,
            number_width: state.number_width,
            scroll: state.scroll,
            hints: key_hints(keymap, &FILES_COMMANDS),
        }
    }

    /// Every document line, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &DocumentLine> {
        self.header.iter().chain(self.body)
    }
}

/// Title and totals above the files
pub fn header_lines(number: u64, totals: Totals, theme: &Theme) -> Vec<DocumentLine> {
    vec![
        DocumentLine::Text(Line::from(Span::styled(
            format!("File Changes for PR #{number}"),
            theme.panel_title(),
        ))),
        DocumentLine::Text(Line::from("")),
        DocumentLine::Text(Line::from(vec![
            Span::styled("Total Files Changed: ", theme.text()),
            Span::styled(totals.files.to_string(), theme.warning()),
            Span::styled(" | ", theme.muted()),
            Span::styled("Additions: ", theme.text()),
            Span::styled(format!("+{}", totals.additions), theme.success()),
            Span::styled(" | ", theme.muted()),
            Span::styled("Deletions: ", theme.text()),
            Span::styled(format!("-{}", totals.deletions), theme.error()),
        ])),
        DocumentLine::Text(Line::from("")),
        separator(theme),
    ]
}

/// Diff rows of every section in `lines`
pub fn diff_rows(lines: &[DocumentLine]) -> impl Iterator<Item = &PresentedRow> {
    lines.iter().filter_map(|line| match line {
        DocumentLine::Diff(row) => Some(row),
        _ => None,
    })
}

fn separator(theme: &Theme) -> DocumentLine {
    DocumentLine::Text(Line::from(Span::styled(
        "─".repeat(SEPARATOR_WIDTH),
        theme.muted(),
    )))
}

/// One section per file: name, status, then its split diff
pub fn file_lines(files: &[ChangedFile], theme: &Theme) -> Vec<DocumentLine> {
    let text = |line: Line<'static>| DocumentLine::Text(line);
    let blank = || DocumentLine::Text(Line::from(""));
    let mut lines = Vec::new();

    for file in files {
        lines.push(blank());
        lines.push(text(Line::from(vec![
            Span::raw(format!("{} ", status_icon(file.status))),
            Span::styled(
                file.filename.clone(),
                Style::default()
                    .fg(theme.status_warning)
                    .add_modifier(Modifier::BOLD),
            ),
        ])));
        lines.push(text(Line::from(vec![
            Span::styled("Status: ", theme.muted()),
            Span::styled(file.status.as_str().to_uppercase(), status_style(file.status, theme)),
            Span::styled(" | ", theme.muted()),
            Span::styled("Changes: ", theme.muted()),
            Span::styled(format!("+{}", file.additions), theme.success()),
            Span::styled(format!(" -{}", file.deletions), theme.error()),
        ])));
        if file.status == FileStatus::Renamed {
            if let Some(previous) = &file.previous_filename {
                lines.push(text(Line::from(Span::styled(
                    format!("Previous name: {previous}"),
                    theme.muted(),
                ))));
            }
        }
        lines.push(blank());

        match file.patch.as_deref() {
            Some(patch) if !patch.is_empty() => {
                lines.push(DocumentLine::DiffHeader);
                let rows = rows_for_patch(patch);
                lines.extend(present_rows(&rows, theme).into_iter().map(DocumentLine::Diff));
                lines.push(blank());
            }
            _ => lines.push(text(Line::from(Span::styled(
                "No patch available (binary file or too large)",
                theme.muted().add_modifier(Modifier::ITALIC),
            )))),
        }

        lines.push(blank());
        lines.push(separator(theme));
    }

    lines
}

fn status_icon(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Added => "🆕",
        FileStatus::Removed => "🗑️",
        FileStatus::Modified => "✏️",
        FileStatus::Renamed => "📝",
        _ => "📄",
    }
}

fn status_style(status: FileStatus, theme: &Theme) -> Style {
    match status {
        FileStatus::Added => theme.success(),
        FileStatus::Removed => theme.error(),
        FileStatus::Modified => theme.warning(),
        FileStatus::Renamed => theme.info().add_modifier(Modifier::BOLD),
        _ => theme.text(),
    }
}
