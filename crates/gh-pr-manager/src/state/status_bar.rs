//! Status Bar State

use chrono::{DateTime, Local};

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation in progress
    Running,
    /// Operation completed successfully
    Success,
    /// Operation failed
    Error,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
        }
    }
}

/// A single status message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
        }
    }
}

/// Holds the latest status message, if any
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub current: Option<StatusMessage>,
}

impl StatusBarState {
    pub fn set(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.current = Some(StatusMessage::new(kind, message));
    }
}
