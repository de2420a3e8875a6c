//! Session record and role derivation
//!
//! Any non-empty email/password pair is accepted. The role is derived from
//! the email alone: an address containing `hod` logs in as head of
//! department, anything else as faculty.

use serde::{Deserialize, Serialize};

use super::error::{SessionError, SessionResult};

/// Dashboard role of the logged-in user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Faculty,
    /// Head of department
    Hod,
}

impl Role {
    /// Case-sensitive substring match on the email
    pub fn for_email(email: &str) -> Self {
        if email.contains("hod") {
            Role::Hod
        } else {
            Role::Faculty
        }
    }

    /// Display name assigned to the demo account of this role
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Hod => "Dr. Admin Kumar",
            Role::Faculty => "Prof. Faculty Singh",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Faculty => write!(f, "faculty"),
            Role::Hod => write!(f, "hod"),
        }
    }
}

/// The single persisted record: `{email, name, role, department}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub department: String,
}

impl SessionRecord {
    /// Simulated authentication: presence checks only, no verification
    pub fn authenticate(email: &str, password: &str, department: &str) -> SessionResult<Self> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::EmptyCredentials);
        }

        let role = Role::for_email(email);
        Ok(Self {
            email: email.to_string(),
            name: role.display_name().to_string(),
            role,
            department: department.to_string(),
        })
    }

    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// "faculty • Computer Science" header subtitle
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.role, self.department)
    }
}
