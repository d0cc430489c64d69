//! Matchday backend gateway
//!
//! Wraps the three capabilities of the hosted backend behind one trait:
//! - Identity: account creation, sign-in, password reset, session lookup
//! - Document store: schema-less documents in named collections
//! - Blob store: image upload returning a public URL
//!
//! Two implementations are provided: a REST client for the hosted service
//! and an in-memory mock for tests and development. Every operation is a
//! single round-trip; there is no retry, batching, or local caching.

pub mod mock;
pub mod rest;

use matchday_common::Result;
use serde_json::Value;

/// Backend gateway trait for different service implementations
#[async_trait::async_trait]
pub trait BackendService: Send + Sync {
    // ----- Identity -----

    /// Create an account and return the backend-assigned account id.
    /// Does not sign the new account in.
    async fn create_account(&self, email: &str, password: &str) -> Result<String>;

    /// Verify credentials and establish the current session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<()>;

    /// Ask the identity service to email a password-reset link.
    async fn send_password_reset(&self, email: &str) -> Result<()>;

    /// Change the signed-in account's email address.
    async fn update_account_email(&self, new_email: &str) -> Result<()>;

    /// Drop the current session.
    fn sign_out(&self);

    /// Account id of the signed-in user, if any.
    fn current_account_id(&self) -> Option<String>;

    // ----- Document store -----

    /// Write a document. With `id` given this is an upsert (overwrite by
    /// id); with `id` omitted the store assigns one. Returns the id the
    /// document was stored under.
    async fn create_document(
        &self,
        collection: &str,
        id: Option<&str>,
        data: Value,
    ) -> Result<String>;

    /// Fetch one document. Missing documents are a `NotFound` error.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Value>;

    /// All documents where `field` equals `value`.
    async fn query_equals(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Value>>;

    /// Every document in a collection.
    async fn list_all(&self, collection: &str) -> Result<Vec<Value>>;

    /// Delete by id. Deleting a missing id is not an error.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<()>;

    /// Allocate a fresh document id without touching the network, so an
    /// id can be embedded in a document before its first write.
    fn new_document_id(&self, collection: &str) -> String;

    // ----- Blob store -----

    /// Upload the image behind a local source reference and return the
    /// public URL it is served from. Blob names follow
    /// `{folder}/{random}.jpg`.
    async fn upload_blob(&self, source: &str, folder: &str) -> Result<String>;
}

/// Backend configuration
#[derive(Clone)]
pub struct BackendConfig {
    /// Backend provider (rest, mock)
    pub provider: String,
    /// Project identifier at the hosted service
    pub project_id: String,
    /// API key for the hosted service
    pub api_key: String,
    /// Identity service base URL
    pub auth_url: String,
    /// Document service base URL
    pub docs_url: String,
    /// Blob service base URL
    pub storage_url: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("provider", &self.provider)
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("docs_url", &self.docs_url)
            .field("storage_url", &self.storage_url)
            .finish()
    }
}

impl BackendConfig {
    /// Create backend config from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let provider = std::env::var("MATCHDAY_BACKEND").unwrap_or_else(|_| "mock".to_string());
        let project_id = std::env::var("MATCHDAY_PROJECT_ID").unwrap_or_default();
        let api_key = std::env::var("MATCHDAY_API_KEY").unwrap_or_default();

        let auth_url = std::env::var("MATCHDAY_AUTH_URL")
            .unwrap_or_else(|_| "https://identity.matchday.app".to_string());
        let docs_url = std::env::var("MATCHDAY_DOCS_URL")
            .unwrap_or_else(|_| "https://docs.matchday.app".to_string());
        let storage_url = std::env::var("MATCHDAY_STORAGE_URL")
            .unwrap_or_else(|_| "https://storage.matchday.app".to_string());

        Self {
            provider,
            project_id,
            api_key,
            auth_url,
            docs_url,
            storage_url,
        }
    }
}

/// Factory for creating BackendService implementations
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend service based on configuration
    pub fn create(config: BackendConfig) -> Result<Box<dyn BackendService>> {
        match config.provider.as_str() {
            "rest" => {
                tracing::info!(project = %config.project_id, "Creating REST backend service");
                Ok(Box::new(rest::RestBackend::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock backend service");
                Ok(Box::new(mock::MockBackend::new()))
            }
            provider => Err(matchday_common::Error::Validation(format!(
                "Unknown backend provider: {}. Supported providers: rest, mock",
                provider
            ))),
        }
    }
}
