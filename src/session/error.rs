//! Session error types

use thiserror::Error;

/// Errors that can occur while logging in or touching the stored session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Email or password was left empty
    #[error("Email and password are required")]
    EmptyCredentials,

    /// The backing store refused a read or write
    #[error("Session storage error: {0}")]
    Storage(String),

    /// The stored record is not valid session JSON
    #[error("Malformed session record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// I/O operation on the session file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// The login itself was refused, as opposed to a storage failure
    pub fn is_rejection(&self) -> bool {
        matches!(self, SessionError::EmptyCredentials)
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::EmptyCredentials.to_string(),
            "Email and password are required"
        );
        assert_eq!(
            SessionError::Storage("quota exceeded".to_string()).to_string(),
            "Session storage error: quota exceeded"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SessionError = json_err.into();
        assert!(matches!(err, SessionError::MalformedRecord(_)));
        assert!(!err.is_rejection());
        assert!(SessionError::EmptyCredentials.is_rejection());
    }
}
