//! Status bar actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBarAction {
    /// An operation started
    Running(String),
    /// An operation completed
    Success(String),
    /// An operation failed
    Error(String),
}
