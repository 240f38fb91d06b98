use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message reporting the outcome of a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl From<ValidationError> for Notification {
    fn from(error: ValidationError) -> Self {
        Self::error(error.to_string())
    }
}

impl fmt::Display for Notification {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_error_becomes_error_notification() {
        let note = Notification::from(ValidationError::MissingSchedule);

        assert!(note.is_error());
        assert_eq!(note.title, "Error");
        assert_eq!(
            note.message,
            "Please select a date and time for your scheduled ride."
        );
    }

    #[test]
    fn display_joins_title_and_message() {
        let note = Notification::success("Ride Scheduled", "See you soon.");

        assert_eq!(note.to_string(), "Ride Scheduled: See you soon.");
    }
}
