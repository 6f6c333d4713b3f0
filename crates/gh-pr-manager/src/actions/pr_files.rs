//! Changed files actions

use crate::domain_models::PrKey;
use gh_client::ChangedFile;

#[derive(Debug, Clone)]
pub enum PrFilesAction {
    /// Files for `PrKey` arrived
    Loaded(PrKey, Vec<ChangedFile>),
    /// Files for `PrKey` could not be fetched
    LoadError(PrKey, String),
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollToTop,
    ScrollToBottom,
}
