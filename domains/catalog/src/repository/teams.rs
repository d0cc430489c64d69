//! Team repository

use std::sync::Arc;

use matchday_backend::BackendService;
use matchday_common::{Error, Result};

use crate::domain::entities::Team;

pub const TEAMS_COLLECTION: &str = "equipos";
pub const TEAMS_BLOB_FOLDER: &str = "equipos";

#[derive(Clone)]
pub struct TeamRepository {
    backend: Arc<dyn BackendService>,
}

impl TeamRepository {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self { backend }
    }

    /// Allocate an id for a team that has not been written yet, so the id
    /// can be embedded in the document on its first write.
    pub fn new_team_id(&self) -> String {
        self.backend.new_document_id(TEAMS_COLLECTION)
    }

    /// Every team document. Failures surface as an error; the screens
    /// decide what an unavailable list looks like.
    pub async fn list_all(&self) -> Result<Vec<Team>> {
        let docs = self.backend.list_all(TEAMS_COLLECTION).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Error::from))
            .collect()
    }

    /// Get team by document id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Team>> {
        match self.backend.get_document(TEAMS_COLLECTION, id).await {
            Ok(doc) => Ok(Some(serde_json::from_value(doc)?)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create or overwrite a team. Teams normally arrive with a
    /// pre-generated id; a blank id still gets one here so the stored
    /// document always carries its own id.
    pub async fn upsert(&self, mut team: Team) -> Result<Team> {
        if team.id.trim().is_empty() {
            team.id = self.new_team_id();
        }
        self.backend
            .create_document(
                TEAMS_COLLECTION,
                Some(&team.id),
                serde_json::to_value(&team)?,
            )
            .await?;
        Ok(team)
    }

    /// Delete by id; a missing id deletes to the same end state.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.backend.delete_document(TEAMS_COLLECTION, id).await
    }
}
