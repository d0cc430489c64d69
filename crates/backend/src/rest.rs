//! REST backend implementation
//!
//! HTTP client for the hosted backend: identity endpoints under the auth
//! base URL, document endpoints under the docs base URL, and blob upload
//! under the storage base URL. The current session (account id plus token)
//! lives behind an `RwLock`; there is no token refresh and no retry.

use std::sync::RwLock;

use matchday_common::{AuthError, Error, Result};
use serde_json::{json, Value};

use crate::{BackendConfig, BackendService};

/// Signed-in session state
struct Session {
    account_id: String,
    id_token: String,
}

/// Real HTTP client for the hosted backend service.
pub struct RestBackend {
    http: reqwest::Client,
    config: BackendConfig,
    session: RwLock<Option<Session>>,
}

impl RestBackend {
    /// Create a new REST backend from configuration.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/collections/{}/documents",
            self.config.docs_url.trim_end_matches('/'),
            self.config.project_id,
            collection
        )
    }

    /// Map an identity-service error code onto the auth taxonomy.
    ///
    /// Codes arrive as the leading token of the error message field
    /// (e.g. `WEAK_PASSWORD : Password should be at least 6 characters`).
    fn classify_auth_code(code: &str) -> Error {
        let code = code
            .split([' ', ':'])
            .next()
            .unwrap_or_default();
        match code {
            "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse.into(),
            "EMAIL_NOT_FOUND" => AuthError::AccountNotFound.into(),
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                AuthError::InvalidCredentials.into()
            }
            "INVALID_EMAIL" | "MISSING_EMAIL" => AuthError::MalformedEmail.into(),
            "WEAK_PASSWORD" => AuthError::WeakPassword.into(),
            other => Error::Backend(format!("identity service error: {}", other)),
        }
    }

    /// POST to an identity endpoint and decode the JSON response,
    /// classifying error bodies onto the auth taxonomy.
    async fn auth_request(&self, endpoint: &str, body: Value) -> Result<Value> {
        let url = format!(
            "{}/v1/accounts:{}?key={}",
            self.config.auth_url.trim_end_matches('/'),
            endpoint,
            self.config.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| Error::Backend(e.to_string()));
        }

        let error_body: Value = response.json().await.unwrap_or(Value::Null);
        let code = error_body["error"]["message"].as_str().unwrap_or_default();
        Err(Self::classify_auth_code(code))
    }

    fn current_id_token(&self) -> Result<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.id_token.clone())
            .ok_or_else(|| AuthError::NotSignedIn.into())
    }
}

#[async_trait::async_trait]
impl BackendService for RestBackend {
    async fn create_account(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .auth_request(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        response["localId"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::Backend("signUp response missing account id".to_string()))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .auth_request(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        let account_id = response["localId"]
            .as_str()
            .ok_or_else(|| Error::Backend("signIn response missing account id".to_string()))?;
        let id_token = response["idToken"].as_str().unwrap_or_default();

        *self.session.write().expect("session lock poisoned") = Some(Session {
            account_id: account_id.to_string(),
            id_token: id_token.to_string(),
        });
        tracing::debug!(account_id, "Signed in");
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<()> {
        self.auth_request(
            "sendOobCode",
            json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
        .await?;
        Ok(())
    }

    async fn update_account_email(&self, new_email: &str) -> Result<()> {
        let id_token = self.current_id_token()?;
        let response = self
            .auth_request(
                "update",
                json!({
                    "idToken": id_token,
                    "email": new_email,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        // The identity service rotates the token on email change.
        if let Some(token) = response["idToken"].as_str() {
            if let Some(session) = self.session.write().expect("session lock poisoned").as_mut() {
                session.id_token = token.to_string();
            }
        }
        Ok(())
    }

    fn sign_out(&self) {
        *self.session.write().expect("session lock poisoned") = None;
    }

    fn current_account_id(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.account_id.clone())
    }

    async fn create_document(
        &self,
        collection: &str,
        id: Option<&str>,
        data: Value,
    ) -> Result<String> {
        let response = match id {
            Some(id) => {
                let url = format!("{}/{}", self.documents_url(collection), id);
                self.http.put(&url).json(&data).send().await
            }
            None => {
                self.http
                    .post(&self.documents_url(collection))
                    .json(&data)
                    .send()
                    .await
            }
        }
        .map_err(|e| Error::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Backend(format!(
                "document write to '{}' returned {}",
                collection,
                response.status()
            )));
        }

        match id {
            Some(id) => Ok(id.to_string()),
            None => {
                let body: Value = response
                    .json()
                    .await
                    .map_err(|e| Error::Backend(e.to_string()))?;
                body["id"]
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| Error::Backend("create response missing id".to_string()))
            }
        }
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.documents_url(collection), id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("{}/{}", collection, id)));
        }
        if !response.status().is_success() {
            return Err(Error::Backend(format!(
                "document read from '{}' returned {}",
                collection,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Backend(e.to_string()))
    }

    async fn query_equals(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Value>> {
        let response = self
            .http
            .get(self.documents_url(collection))
            .query(&[("field", field), ("value", value)])
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Backend(format!(
                "query on '{}' returned {}",
                collection,
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;
        Ok(body["documents"]
            .as_array()
            .cloned()
            .unwrap_or_default())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Value>> {
        let response = self
            .http
            .get(self.documents_url(collection))
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Backend(format!(
                "listing '{}' returned {}",
                collection,
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;
        Ok(body["documents"]
            .as_array()
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.documents_url(collection), id);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        // A missing document deletes to the same end state.
        if response.status().is_success() || response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(Error::Backend(format!(
                "delete from '{}' returned {}",
                collection,
                response.status()
            )))
        }
    }

    fn new_document_id(&self, _collection: &str) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    async fn upload_blob(&self, source: &str, folder: &str) -> Result<String> {
        let path = source.strip_prefix("file://").unwrap_or(source);
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::Backend(format!("cannot read image '{}': {}", source, e)))?;

        let filename = format!("{}.jpg", uuid::Uuid::new_v4());
        let url = format!(
            "{}/v1/projects/{}/blobs/{}/{}",
            self.config.storage_url.trim_end_matches('/'),
            self.config.project_id,
            folder,
            filename
        );

        let response = self
            .http
            .put(&url)
            .header("content-type", "image/jpeg")
            .body(bytes)
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Backend(format!(
                "blob upload to '{}' returned {}",
                folder,
                response.status()
            )));
        }

        tracing::debug!(folder, filename = %filename, "Uploaded blob");
        Ok(url)
    }
}
