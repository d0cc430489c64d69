//! Mock backend implementation
//!
//! In-memory stand-in for the hosted backend, used by tests and local
//! development. Captures every write, delete, upload, and password-reset
//! request for inspection, and exposes per-capability failure switches so
//! error paths can be exercised without a network.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use matchday_common::{AuthError, Error, Result};
use serde_json::Value;
use uuid::Uuid;

use crate::BackendService;

/// Minimum password length enforced by the identity service
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct MockAccount {
    id: String,
    email: String,
    password: String,
}

/// Blob captured by the mock store
#[derive(Debug, Clone)]
pub struct UploadedBlob {
    pub source: String,
    pub folder: String,
    pub url: String,
}

#[derive(Debug, Default)]
struct FailureSwitches {
    identity: bool,
    documents: bool,
    blobs: bool,
}

/// Mock backend service for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    accounts: Arc<Mutex<HashMap<String, MockAccount>>>,
    current: Arc<Mutex<Option<String>>>,
    collections: Arc<Mutex<HashMap<String, BTreeMap<String, Value>>>>,
    blobs: Arc<Mutex<Vec<UploadedBlob>>>,
    deletes: Arc<Mutex<Vec<(String, String)>>>,
    reset_requests: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<FailureSwitches>>,
}

impl MockBackend {
    /// Create a new mock backend with empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every identity operation fail with a generic backend error
    pub fn set_fail_identity(&self, fail: bool) {
        self.failures.lock().unwrap().identity = fail;
    }

    /// Make every document operation fail with a generic backend error
    pub fn set_fail_documents(&self, fail: bool) {
        self.failures.lock().unwrap().documents = fail;
    }

    /// Make every blob upload fail with a generic backend error
    pub fn set_fail_blobs(&self, fail: bool) {
        self.failures.lock().unwrap().blobs = fail;
    }

    /// Establish a session directly, bypassing credential checks
    pub fn set_current_account(&self, account_id: &str) {
        *self.current.lock().unwrap() = Some(account_id.to_string());
    }

    /// The stored document, if present
    pub fn document(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned()
    }

    /// Number of documents currently stored in a collection
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    /// Ids passed to `delete_document` for a collection, in call order
    pub fn delete_calls(&self, collection: &str) -> Vec<String> {
        self.deletes
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, id)| id.clone())
            .collect()
    }

    /// All captured blob uploads
    pub fn uploaded_blobs(&self) -> Vec<UploadedBlob> {
        self.blobs.lock().unwrap().clone()
    }

    /// Emails a password reset was requested for, in call order
    pub fn password_reset_requests(&self) -> Vec<String> {
        self.reset_requests.lock().unwrap().clone()
    }

    fn identity_guard(&self) -> Result<()> {
        if self.failures.lock().unwrap().identity {
            return Err(Error::Backend("mock identity failure".to_string()));
        }
        Ok(())
    }

    fn documents_guard(&self) -> Result<()> {
        if self.failures.lock().unwrap().documents {
            return Err(Error::Backend("mock document store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BackendService for MockBackend {
    async fn create_account(&self, email: &str, password: &str) -> Result<String> {
        self.identity_guard()?;

        if !email.contains('@') {
            return Err(AuthError::MalformedEmail.into());
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword.into());
        }

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AuthError::EmailAlreadyInUse.into());
        }

        let account = MockAccount {
            id: Uuid::new_v4().simple().to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let id = account.id.clone();
        accounts.insert(email.to_string(), account);
        tracing::debug!(email, "Mock account created");
        Ok(id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        self.identity_guard()?;

        let accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get(email)
            .ok_or(AuthError::AccountNotFound)?;
        if account.password != password {
            return Err(AuthError::InvalidCredentials.into());
        }
        *self.current.lock().unwrap() = Some(account.id.clone());
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<()> {
        self.identity_guard()?;

        if !self.accounts.lock().unwrap().contains_key(email) {
            return Err(AuthError::AccountNotFound.into());
        }
        self.reset_requests.lock().unwrap().push(email.to_string());
        Ok(())
    }

    async fn update_account_email(&self, new_email: &str) -> Result<()> {
        self.identity_guard()?;

        let current_id = self
            .current
            .lock()
            .unwrap()
            .clone()
            .ok_or(AuthError::NotSignedIn)?;

        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .get(new_email)
            .is_some_and(|other| other.id != current_id)
        {
            return Err(AuthError::EmailAlreadyInUse.into());
        }

        let old_email = accounts
            .values()
            .find(|a| a.id == current_id)
            .map(|a| a.email.clone())
            .ok_or(AuthError::AccountNotFound)?;

        let mut account = accounts.remove(&old_email).expect("account vanished");
        account.email = new_email.to_string();
        accounts.insert(new_email.to_string(), account);
        Ok(())
    }

    fn sign_out(&self) {
        *self.current.lock().unwrap() = None;
    }

    fn current_account_id(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    async fn create_document(
        &self,
        collection: &str,
        id: Option<&str>,
        data: Value,
    ) -> Result<String> {
        self.documents_guard()?;

        let id = match id {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().simple().to_string(),
        };
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), data);
        Ok(id)
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Value> {
        self.documents_guard()?;

        self.document(collection, id)
            .ok_or_else(|| Error::NotFound(format!("{}/{}", collection, id)))
    }

    async fn query_equals(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Value>> {
        self.documents_guard()?;

        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field).and_then(Value::as_str) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Value>> {
        self.documents_guard()?;

        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        self.documents_guard()?;

        self.deletes
            .lock()
            .unwrap()
            .push((collection.to_string(), id.to_string()));
        if let Some(docs) = self.collections.lock().unwrap().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    fn new_document_id(&self, _collection: &str) -> String {
        Uuid::new_v4().simple().to_string()
    }

    async fn upload_blob(&self, source: &str, folder: &str) -> Result<String> {
        if self.failures.lock().unwrap().blobs {
            return Err(Error::Backend("mock blob store failure".to_string()));
        }

        let url = format!("https://storage.mock/{}/{}.jpg", folder, Uuid::new_v4());
        self.blobs.lock().unwrap().push(UploadedBlob {
            source: source.to_string(),
            folder: folder.to_string(),
            url: url.clone(),
        });
        Ok(url)
    }
}
