//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

const MAX_HISTORY: usize = 50;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Running,
    Success,
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

/// A single status message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Name of the action that produced the message
    pub source_action: String,
}

impl StatusMessage {
    pub fn new(
        kind: StatusKind,
        message: impl Into<String>,
        source_action: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source_action: source_action.into(),
        }
    }
}

/// Bounded history of status messages, newest at the back
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        while self.messages.len() > MAX_HISTORY {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_history_bounded() {
        let mut state = StatusBarState::default();
        for i in 0..(MAX_HISTORY + 5) {
            state.push(StatusMessage::new(StatusKind::Info, format!("m{i}"), "test"));
        }

        assert_eq!(state.messages.len(), MAX_HISTORY);
        assert_eq!(state.messages.front().map(|m| m.message.as_str()), Some("m5"));
        assert_eq!(
            state.latest().map(|m| m.message.clone()),
            Some(format!("m{}", MAX_HISTORY + 4))
        );
    }
}
