//! League repository

use std::sync::Arc;

use matchday_backend::BackendService;
use matchday_common::{Error, Result};

use crate::domain::entities::League;

pub const LEAGUES_COLLECTION: &str = "ligas";
pub const LEAGUES_BLOB_FOLDER: &str = "ligas";

#[derive(Clone)]
pub struct LeagueRepository {
    backend: Arc<dyn BackendService>,
}

impl LeagueRepository {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self { backend }
    }

    /// Every league document. Failures surface as an error; the screens
    /// decide what an unavailable list looks like.
    pub async fn list_all(&self) -> Result<Vec<League>> {
        let docs = self.backend.list_all(LEAGUES_COLLECTION).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Error::from))
            .collect()
    }

    /// Get league by document id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<League>> {
        match self.backend.get_document(LEAGUES_COLLECTION, id).await {
            Ok(doc) => Ok(Some(serde_json::from_value(doc)?)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create or overwrite a league. A blank id means "new": an id is
    /// allocated and copied onto the entity before the single write, so
    /// the stored document always carries its own id.
    pub async fn upsert(&self, mut league: League) -> Result<League> {
        if league.id.trim().is_empty() {
            league.id = self.backend.new_document_id(LEAGUES_COLLECTION);
        }
        self.backend
            .create_document(
                LEAGUES_COLLECTION,
                Some(&league.id),
                serde_json::to_value(&league)?,
            )
            .await?;
        Ok(league)
    }

    /// Delete by id; a missing id deletes to the same end state.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.backend.delete_document(LEAGUES_COLLECTION, id).await
    }
}
