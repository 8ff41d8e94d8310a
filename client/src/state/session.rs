//! Session record for the signed-in browser user.
//!
//! DESIGN
//! ======
//! A session is either absent or complete. Token, role and email are only
//! ever read and written together, so a token without a role cannot exist
//! in memory even if persisted storage has been tampered with.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Consultant,
    Admin,
}

impl Role {
    /// Every role, in the order the admin role picker lists them.
    pub const ALL: [Self; 3] = [Self::User, Self::Consultant, Self::Admin];

    /// Wire representation (`USER`, `CONSULTANT`, `ADMIN`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Consultant => "CONSULTANT",
            Self::Admin => "ADMIN",
        }
    }

    /// Human-readable label for tables and pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Consultant => "Consultant",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role string that is not one of the three known roles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "USER" => Ok(Self::User),
            "CONSULTANT" => Ok(Self::Consultant),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(UnknownRole(raw.to_owned())),
        }
    }
}

/// The client-held authentication record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        token: String,
        role: Role,
        email: String,
    },
}

impl Session {
    /// Build a session from the three individually persisted fields.
    ///
    /// Anything short of a non-empty token plus a recognized role collapses
    /// to [`Session::LoggedOut`]. A missing email is tolerated and kept empty.
    pub fn from_stored(token: Option<String>, role: Option<String>, email: Option<String>) -> Self {
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            return Self::LoggedOut;
        };
        let Some(role) = role.and_then(|r| r.parse::<Role>().ok()) else {
            return Self::LoggedOut;
        };
        Self::LoggedIn { token, role, email: email.unwrap_or_default() }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { token, .. } => Some(token),
            Self::LoggedOut => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::LoggedIn { role, .. } => Some(*role),
            Self::LoggedOut => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { email, .. } => Some(email),
            Self::LoggedOut => None,
        }
    }
}
