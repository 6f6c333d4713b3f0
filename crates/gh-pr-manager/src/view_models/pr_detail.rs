//! View model for the pull request detail screen

use super::{key_hints, KeyHint};
use crate::domain_models::LoadingState;
use crate::keymap::{CommandId, Keymap};
use crate::state::PrDetailState;
use crate::theme::Theme;
use gh_client::PullRequestDetails;
use ratatui::text::{Line, Span};

const DETAIL_COMMANDS: [CommandId; 7] = [
    CommandId::PrViewFiles,
    CommandId::PrApprove,
    CommandId::PrComment,
    CommandId::PrRequestChanges,
    CommandId::PrMerge,
    CommandId::NavigateNext,
    CommandId::GlobalClose,
];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct PrDetailViewModel {
    /// Block title, e.g. "acme/api#12"
    pub title: String,
    pub lines: Vec<Line<'static>>,
    pub scroll: u16,
    pub hints: Vec<KeyHint>,
}

impl PrDetailViewModel {
    pub fn from_state(state: &PrDetailState, keymap: &Keymap, theme: &Theme) -> Self {
        let title = state
            .target
            .as_ref()
            .map(|key| format!(" {key} "))
            .unwrap_or_default();

        let lines = match (&state.loading, &state.details) {
            (LoadingState::Error(error), _) => vec![
                Line::from(Span::styled("Error loading pull request", theme.error())),
                Line::from(""),
                Line::from(Span::styled(error.clone(), theme.text())),
            ],
            (LoadingState::Loaded, Some(details)) => detail_lines(details, theme),
            _ => {
                let what = state
                    .summary
                    .as_ref()
                    .map(|pr| format!("#{} - {}", pr.number, pr.title))
                    .unwrap_or_default();
                vec![Line::from(Span::styled(
                    format!("Loading {what}..."),
                    theme.muted(),
                ))]
            }
        };

        Self {
            title,
            lines,
            scroll: state.scroll,
            hints: key_hints(keymap, &DETAIL_COMMANDS),
        }
    }
}

/// The full detail text of a pull request
pub fn detail_lines(details: &PullRequestDetails, theme: &Theme) -> Vec<Line<'static>> {
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label}: "), theme.label()),
            Span::styled(value, theme.text()),
        ])
    };

    let mergeable = match details.mergeable {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "Checking...",
    };

    let mut lines = vec![
        Line::from(Span::styled(details.title.clone(), theme.panel_title())),
        Line::from(""),
        field("Status", details.state.to_string()),
        field("Number", format!("#{}", details.number)),
        field("Author", details.author.clone()),
        field("Repository", details.repository.clone()),
        field(
            "Branch",
            format!("{} → {}", details.head_branch, details.base_branch),
        ),
        field("Created", details.created_at.format(TIME_FORMAT).to_string()),
        field("Updated", details.updated_at.format(TIME_FORMAT).to_string()),
        field("Mergeable", mergeable.to_string()),
        field("Comments", details.comments.to_string()),
        field("Commits", details.commits.to_string()),
        field("Changed Files", details.changed_files.to_string()),
        Line::from(vec![
            Span::styled("Changes: ", theme.label()),
            Span::styled(format!("+{}", details.additions), theme.success()),
            Span::styled(" ", theme.text()),
            Span::styled(format!("-{}", details.deletions), theme.error()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Description", theme.section_header())),
        Line::from(""),
    ];

    match details.body.as_deref() {
        Some(body) => lines.extend(
            body.lines()
                .map(|line| Line::from(Span::styled(line.to_string(), theme.text()))),
        ),
        None => lines.push(Line::from(Span::styled(
            "No description provided",
            theme.muted(),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(field("URL", details.html_url.clone()));
    lines
}
