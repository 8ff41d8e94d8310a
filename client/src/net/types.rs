//! Wire DTOs for the QA backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Unknown fields are
//! ignored so backend additions do not break decoding. Passwords only ever
//! appear in outgoing payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::{Role, Session, UnknownRole};

/// `POST /api/auth/login` and `/api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// Turn the response into a session, falling back to the typed email
    /// when the backend does not echo one.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRole`] when the backend issues a role this client
    /// does not know how to route.
    pub fn into_session(self, typed_email: &str) -> Result<Session, UnknownRole> {
        let role = self.role.parse::<Role>()?;
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| typed_email.to_owned());
        Ok(Session::LoggedIn { token: self.token, role, email })
    }
}

/// One answer candidate returned by `POST /api/qa/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// A question routed to a human consultant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consult {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Consult {
    /// Text of the answer, if one has been given.
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.trim().is_empty())
    }

    pub fn is_answered(&self) -> bool {
        self.answer_text().is_some()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Role column of a listed account. A role this client cannot route is kept
/// verbatim so one odd row does not fail the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListedRole {
    Known(Role),
    Other(String),
}

impl ListedRole {
    pub fn known(&self) -> Option<Role> {
        match self {
            Self::Known(role) => Some(*role),
            Self::Other(_) => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Known(role) => role.label().to_owned(),
            Self::Other(raw) => raw.clone(),
        }
    }
}

/// A backend account as listed to admins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: ListedRole,
}

/// Create/update body for `/api/admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

/// Body for both consultant and admin answer endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub consult_id: i64,
    pub answer: String,
    pub email: String,
}

/// Body for `PUT /api/admin/consults/{id}`. An empty answer leaves the
/// consult unanswered and only updates the question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsultUpdate {
    pub question: String,
    pub answer: String,
}

/// Body for `POST /api/qa/consult`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultRequest {
    pub question: String,
    pub user_email: String,
}

/// Body for `POST /api/qa/like`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LikeRequest {
    pub question: String,
    pub answer: String,
}

/// Automatic fine-tuning switch on the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FineTuneStatus {
    Enabled,
    Disabled,
}

impl FineTuneStatus {
    /// Parse the plain-text status body (`enabled` / `disabled`). Tolerates a
    /// JSON-quoted string.
    pub fn parse(body: &str) -> Option<Self> {
        match body.trim().trim_matches('"') {
            "enabled" => Some(Self::Enabled),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}
