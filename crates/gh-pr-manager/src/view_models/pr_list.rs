//! View model for the pull request list

use super::{key_hints, KeyHint};
use crate::domain_models::LoadingState;
use crate::keymap::{CommandId, Keymap};
use crate::state::PrListState;
use gh_client::PullRequest;

const LIST_COMMANDS: [CommandId; 8] = [
    CommandId::NavigateNext,
    CommandId::PrOpenDetails,
    CommandId::PrReload,
    CommandId::PrToggleOrder,
    CommandId::PrFilterRepository,
    CommandId::PrClearFilters,
    CommandId::GlobalClose,
    CommandId::GlobalQuit,
];

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrListBody {
    Loading,
    Error(String),
    Empty,
    Items { labels: Vec<String>, selected: usize },
}

impl PrListBody {
    /// Placeholder text when there are no items
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Loading PRs...".to_string()),
            Self::Error(error) => Some(format!("Error loading PRs: {error}")),
            Self::Empty => Some("No open pull requests found".to_string()),
            Self::Items { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrListViewModel {
    pub title: &'static str,
    pub subtitle: String,
    pub body: PrListBody,
    pub hints: Vec<KeyHint>,
}

impl PrListViewModel {
    pub fn from_state(state: &PrListState, keymap: &Keymap) -> Self {
        let subtitle = format!(
            "Organization: {} | Order: {} | Repo: {}",
            state.organization,
            state.sort_order,
            state.repo_filter.as_deref().unwrap_or("All")
        );

        let body = match &state.loading {
            LoadingState::Idle | LoadingState::Loading => PrListBody::Loading,
            LoadingState::Error(error) => PrListBody::Error(error.clone()),
            LoadingState::Loaded if state.visible.is_empty() => PrListBody::Empty,
            LoadingState::Loaded => PrListBody::Items {
                labels: state.visible.iter().map(pr_label).collect(),
                selected: state.selected,
            },
        };

        Self {
            title: "Pull Requests",
            subtitle,
            body,
            hints: key_hints(keymap, &LIST_COMMANDS),
        }
    }
}

/// `#<n> - <title> (<repo>) by <author>`
pub fn pr_label(pr: &PullRequest) -> String {
    format!("#{} - {} ({}) by {}", pr.number, pr.title, pr.repo, pr.author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::SortOrder;
    use crate::keymap::default_keymap;
    use crate::test_fixtures::pr;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_format() {
        assert_eq!(pr_label(&pr("api", 42, 1)), "#42 - Change 42 (api) by octocat");
    }

    #[test]
    fn test_subtitle_shows_order_and_filter() {
        let mut state = PrListState {
            organization: "acme".to_string(),
            ..Default::default()
        };
        let vm = PrListViewModel::from_state(&state, &default_keymap());
        assert_eq!(
            vm.subtitle,
            "Organization: acme | Order: Newest First | Repo: All"
        );

        state.sort_order = SortOrder::OldestFirst;
        state.repo_filter = Some("api".to_string());
        let vm = PrListViewModel::from_state(&state, &default_keymap());
        assert_eq!(
            vm.subtitle,
            "Organization: acme | Order: Oldest First | Repo: api"
        );
    }

    #[test]
    fn test_body_per_loading_state() {
        let keymap = default_keymap();
        let mut state = PrListState {
            loading: LoadingState::Loading,
            ..Default::default()
        };
        assert_eq!(
            PrListViewModel::from_state(&state, &keymap).body.message(),
            Some("Loading PRs...".to_string())
        );

        state.loading = LoadingState::Error("Bad credentials".to_string());
        assert_eq!(
            PrListViewModel::from_state(&state, &keymap).body.message(),
            Some("Error loading PRs: Bad credentials".to_string())
        );

        state.set_pull_requests(Vec::new());
        assert_eq!(
            PrListViewModel::from_state(&state, &keymap).body,
            PrListBody::Empty
        );

        state.set_pull_requests(vec![pr("api", 7, 1)]);
        assert_eq!(
            PrListViewModel::from_state(&state, &keymap).body,
            PrListBody::Items {
                labels: vec!["#7 - Change 7 (api) by octocat".to_string()],
                selected: 0
            }
        );
    }
}
