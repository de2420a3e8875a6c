//! Transient notifications
//!
//! The messages shown as toasts after a login attempt or a lecture log.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A titled toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn login_succeeded() -> Self {
        Self::success("Login Successful", "Welcome to SyllabusSync!")
    }

    pub fn login_failed() -> Self {
        Self::error("Login Failed", "Please check your credentials.")
    }

    pub fn lecture_logged(topic: &str) -> Self {
        Self::success(
            "Lecture Logged Successfully!",
            format!("{} has been recorded in under 30 seconds.", topic),
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
