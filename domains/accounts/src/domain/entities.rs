//! Domain entities for the Matchday accounts domain

use serde::{Deserialize, Serialize};

/// Application role, stored on the wire as `"ADMIN"` or an empty string.
/// Anything other than `"ADMIN"` deserializes as an ordinary user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    Standard,
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        if raw == "ADMIN" {
            Role::Admin
        } else {
            Role::Standard
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "ADMIN".to_string(),
            Role::Standard => String::new(),
        }
    }
}

/// User entity
///
/// `id` is the identity-service account id; the user document is keyed by
/// it in the `users` collection. `username` is unique across all users,
/// enforced by a pre-write existence query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "rol", default)]
    pub role: Role,
}

impl User {
    /// Create a new ordinary user keyed by an account id
    pub fn new(id: impl Into<String>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            role: Role::Standard,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
