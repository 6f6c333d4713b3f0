//! Repository filter popup state

/// How the repository filter popup was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoFilterOutcome {
    /// Show only PRs of this repository
    Selected(String),
    /// Show PRs of every repository
    AllRepositories,
    /// Leave the current filter untouched
    Cancelled,
}

/// One selectable line of the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOption {
    All,
    Repository(String),
}

#[derive(Debug, Clone, Default)]
pub struct RepoFilterState {
    /// Distinct repository names, sorted
    pub repositories: Vec<String>,
    pub query: String,
    /// Index into [`RepoFilterState::options`]
    pub selected: usize,
}

impl RepoFilterState {
    pub fn new(repositories: Vec<String>) -> Self {
        Self {
            repositories,
            ..Default::default()
        }
    }

    /// Repositories whose name contains the query, ignoring case
    pub fn matching_repositories(&self) -> Vec<&str> {
        let query = self.query.to_lowercase();
        self.repositories
            .iter()
            .filter(|repo| repo.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// "All repositories" followed by the matching repositories
    pub fn options(&self) -> Vec<RepoOption> {
        std::iter::once(RepoOption::All)
            .chain(
                self.matching_repositories()
                    .into_iter()
                    .map(|repo| RepoOption::Repository(repo.to_string())),
            )
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options().len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Outcome of confirming the highlighted option
    pub fn outcome(&self) -> RepoFilterOutcome {
        match self.options().into_iter().nth(self.selected) {
            Some(RepoOption::Repository(repo)) => RepoFilterOutcome::Selected(repo),
            Some(RepoOption::All) | None => RepoFilterOutcome::AllRepositories,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.options().len().saturating_sub(1));
    }
}
