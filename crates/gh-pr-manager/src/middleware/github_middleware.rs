//! GitHub Operations Middleware
//!
//! Central middleware for all GitHub API interactions:
//! - Organization-wide PR loading
//! - PR details and changed files
//! - Review, comment and merge operations confirmed in the popup
//!
//! Every call runs on the middleware's tokio runtime; results come back as
//! actions through the dispatcher.

use crate::actions::{
    Action, ConfirmationPopupAction, PrDetailAction, PrFilesAction, PrListAction,
    StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::PrKey;
use crate::middleware::Middleware;
use crate::state::{AppState, ConfirmationIntent, ConfirmationPopupState};
use anyhow::Context;
use gh_client::{fetch_organization_pull_requests, GitHubClient, MergeMethod, ReviewEvent};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn GitHubClient>,
    merge_method: MergeMethod,
}

impl GitHubMiddleware {
    pub fn new(runtime: Runtime, client: Arc<dyn GitHubClient>, merge_method: MergeMethod) -> Self {
        Self {
            runtime,
            client,
            merge_method,
        }
    }

    /// Authenticate against GitHub and build the middleware
    ///
    /// `merge_method` comes from the configuration; an unknown value falls
    /// back to a merge commit.
    pub fn connect(merge_method: &str) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client = runtime.block_on(gh_client::connect(&gh_client::TokenResolver::from_env()))?;

        let merge_method = merge_method.parse().unwrap_or_else(|e| {
            log::warn!("{e:#}, using '{}'", MergeMethod::default());
            MergeMethod::default()
        });

        Ok(Self::new(runtime, Arc::new(client), merge_method))
    }

    fn load_pull_requests(&self, organization: String, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match fetch_organization_pull_requests(client, &organization).await {
                Ok(prs) => dispatcher.dispatch(Action::PrList(PrListAction::Loaded(prs))),
                Err(e) => {
                    log::error!("Failed to load pull requests of {organization}: {e:#}");
                    dispatcher.dispatch(Action::PrList(PrListAction::LoadError(format!("{e:#}"))));
                }
            }
        });
    }

    fn load_details(&self, key: PrKey, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let result = client
                .fetch_pull_request(&key.owner, &key.repo, key.number)
                .await;
            let action = match result {
                Ok(details) => PrDetailAction::Loaded(key, Box::new(details)),
                Err(e) => {
                    log::error!("Failed to load {key}: {e:#}");
                    PrDetailAction::LoadError(key, format!("{e:#}"))
                }
            };
            dispatcher.dispatch(Action::PrDetail(action));
        });
    }

    fn load_files(&self, key: PrKey, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let result = client
                .fetch_pull_request_files(&key.owner, &key.repo, key.number)
                .await;
            let action = match result {
                Ok(files) => PrFilesAction::Loaded(key, files),
                Err(e) => {
                    log::error!("Failed to load files of {key}: {e:#}");
                    PrFilesAction::LoadError(key, format!("{e:#}"))
                }
            };
            dispatcher.dispatch(Action::PrFiles(action));
        });
    }

    /// Run the operation confirmed in the popup
    fn execute(&self, popup: &ConfirmationPopupState, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let intent = popup.intent;
        let key = popup.target.clone();
        let message = popup.message().map(str::to_string);
        let merge_method = self.merge_method;

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::Running(format!(
            "{} {key}...",
            intent.action_verb()
        ))));

        self.runtime.spawn(async move {
            let (owner, repo, number) = (key.owner.as_str(), key.repo.as_str(), key.number);
            let body = message.as_deref().unwrap_or_default();

            let result = match intent {
                ConfirmationIntent::Approve => client
                    .create_review(owner, repo, number, ReviewEvent::Approve, body)
                    .await
                    .map(|()| format!("Approved {key}")),
                ConfirmationIntent::Comment => client
                    .add_comment(owner, repo, number, body)
                    .await
                    .map(|()| format!("Commented on {key}")),
                ConfirmationIntent::RequestChanges => client
                    .create_review(owner, repo, number, ReviewEvent::RequestChanges, body)
                    .await
                    .map(|()| format!("Requested changes on {key}")),
                ConfirmationIntent::Merge => client
                    .merge_pull_request(owner, repo, number, merge_method, message.as_deref())
                    .await
                    .and_then(|result| {
                        if result.merged {
                            Ok(format!("Merged {key}"))
                        } else {
                            Err(anyhow::anyhow!("{}", result.message))
                        }
                    }),
            };

            match result {
                Ok(done) => {
                    log::info!("{done}");
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::Success(done)));
                    if intent == ConfirmationIntent::Merge {
                        dispatcher.dispatch(Action::PrList(PrListAction::Reload));
                    }
                }
                Err(e) => {
                    log::error!("{} {key} failed: {e:#}", intent.action_verb());
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::Error(format!(
                        "{} {key} failed: {e:#}",
                        intent.action_verb()
                    ))));
                }
            }
        });
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::PrList(PrListAction::Reload) => {
                self.load_pull_requests(state.pr_list.organization.clone(), dispatcher);
            }
            Action::PrList(PrListAction::OpenSelected) => {
                if let Some(pr) = state.pr_list.selected_pr() {
                    self.load_details(PrKey::from(pr), dispatcher);
                }
            }
            Action::PrDetail(PrDetailAction::ViewFiles) => {
                if let Some(key) = state.pr_detail.target.clone() {
                    self.load_files(key, dispatcher);
                }
            }
            Action::ConfirmationPopup(ConfirmationPopupAction::Confirm) => {
                if let Some(popup) = state.confirmation_popup.as_ref().filter(|p| p.is_valid()) {
                    self.execute(popup, dispatcher);
                }
            }
            _ => {}
        }

        // The reducer still updates loading flags and views
        true
    }
}
