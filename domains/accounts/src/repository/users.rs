//! User repository
//!
//! Layers account registration and profile management over the backend
//! gateway. User documents live in the `users` collection, keyed by the
//! identity-service account id.

use std::sync::Arc;

use matchday_backend::BackendService;
use matchday_common::{AuthError, Error, Result};
use serde_json::Value;

use crate::domain::entities::User;

pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    backend: Arc<dyn BackendService>,
}

impl UserRepository {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self { backend }
    }

    /// Get user by account id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        match self.backend.get_document(USERS_COLLECTION, id).await {
            Ok(doc) => Ok(Some(serde_json::from_value(doc)?)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Every user document, for author lookups on browse screens
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let docs = self.backend.list_all(USERS_COLLECTION).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Error::from))
            .collect()
    }

    /// Whether a username is already held by a user other than `excluding`.
    ///
    /// This is a pre-write existence query, not a store-level constraint:
    /// two concurrent registrations can both pass it. The gateway offers no
    /// conditional write, so the window stays open and is covered by the
    /// ordering of `register` instead.
    pub async fn is_username_taken(&self, username: &str, excluding: Option<&str>) -> Result<bool> {
        let docs = self
            .backend
            .query_equals(USERS_COLLECTION, "username", username)
            .await?;
        Ok(docs.iter().any(|doc| {
            let id = doc.get("id").and_then(Value::as_str).unwrap_or_default();
            excluding != Some(id)
        }))
    }

    /// Register a new user: uniqueness check, then identity account, then
    /// the user document keyed by the new account id. The check runs before
    /// account creation so a taken username never leaves an orphaned
    /// identity account behind.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        if self.is_username_taken(username, None).await? {
            return Err(AuthError::UsernameTaken.into());
        }

        let account_id = self.backend.create_account(email, password).await?;
        let user = User::new(account_id, username, email);
        self.backend
            .create_document(USERS_COLLECTION, Some(&user.id), serde_json::to_value(&user)?)
            .await?;

        tracing::info!(username, "User registered");
        Ok(user)
    }

    /// Profile of the signed-in user, if any
    pub async fn current_profile(&self) -> Result<Option<User>> {
        match self.backend.current_account_id() {
            Some(id) => self.get_by_id(&id).await,
            None => Ok(None),
        }
    }

    /// Update the signed-in user's username and email, in both the
    /// identity service and the user document.
    pub async fn update_profile(&self, username: &str, email: &str) -> Result<User> {
        let id = self
            .backend
            .current_account_id()
            .ok_or(AuthError::NotSignedIn)?;

        if self.is_username_taken(username, Some(&id)).await? {
            return Err(AuthError::UsernameTaken.into());
        }

        self.backend.update_account_email(email).await?;

        let mut user = self
            .get_by_id(&id)
            .await?
            .unwrap_or_else(|| User::new(id.clone(), "", ""));
        user.username = username.to_string();
        user.email = email.to_string();
        self.backend
            .create_document(USERS_COLLECTION, Some(&id), serde_json::to_value(&user)?)
            .await?;

        Ok(user)
    }
}
