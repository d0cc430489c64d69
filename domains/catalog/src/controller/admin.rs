//! Admin CRUD controller
//!
//! Owns the in-memory league and team lists the admin screen renders, the
//! panel state (one popup at a time), and the save/delete orchestration:
//! resolve the form image, write through the repository, refresh, close.

use std::sync::Arc;

use chrono::Utc;
use matchday_backend::BackendService;
use matchday_common::{Result, StateError};

use crate::domain::entities::{ImageRef, League, Team, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::domain::state::{AdminEvent, AdminState, AdminStateMachine, CatalogEntry, CatalogKind};
use crate::repository::leagues::{LeagueRepository, LEAGUES_BLOB_FOLDER};
use crate::repository::teams::{TeamRepository, TEAMS_BLOB_FOLDER};

/// Author id stored when no user is signed in
const ANONYMOUS_AUTHOR: &str = "anon";

/// League editor form values
#[derive(Debug, Clone, Default)]
pub struct LeagueForm {
    pub name: String,
    pub description: String,
    /// Remote URL or local image handle
    pub image: String,
}

/// Team editor form values
#[derive(Debug, Clone)]
pub struct TeamForm {
    pub name: String,
    pub description: String,
    /// Remote URL or local image handle
    pub image: String,
    /// League picked in the dropdown; `None` until the user selects one
    pub league_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for TeamForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: String::new(),
            league_id: None,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

pub struct AdminController {
    backend: Arc<dyn BackendService>,
    leagues_repo: LeagueRepository,
    teams_repo: TeamRepository,
    pub leagues: Vec<League>,
    pub teams: Vec<Team>,
    state: AdminState,
}

impl AdminController {
    /// Build the controller and eagerly load both lists.
    pub async fn new(backend: Arc<dyn BackendService>) -> Self {
        let mut controller = Self {
            leagues_repo: LeagueRepository::new(backend.clone()),
            teams_repo: TeamRepository::new(backend.clone()),
            backend,
            leagues: Vec::new(),
            teams: Vec::new(),
            state: AdminState::Idle,
        };
        controller.refresh().await;
        controller
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// Reload both lists from the store. A failed fetch renders as an
    /// empty list; the screen cannot tell the difference.
    pub async fn refresh(&mut self) {
        self.leagues = self.leagues_repo.list_all().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "League refresh failed");
            Vec::new()
        });
        self.teams = self.teams_repo.list_all().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Team refresh failed");
            Vec::new()
        });
    }

    fn apply(&mut self, event: AdminEvent) -> std::result::Result<(), StateError> {
        self.state = AdminStateMachine::transition(&self.state, event)?;
        Ok(())
    }

    /// Open the editor in create mode
    pub fn open_add(&mut self, kind: CatalogKind) -> std::result::Result<(), StateError> {
        self.apply(AdminEvent::OpenAdd(kind))
    }

    /// Open the editor prefilled with an existing entity
    pub fn open_edit(&mut self, entry: CatalogEntry) -> std::result::Result<(), StateError> {
        self.apply(AdminEvent::OpenEdit(entry))
    }

    /// Open the browse-all popup
    pub fn open_list(&mut self, kind: CatalogKind) -> std::result::Result<(), StateError> {
        self.apply(AdminEvent::OpenList(kind))
    }

    /// Dismiss whatever popup is open
    pub fn close(&mut self) -> std::result::Result<(), StateError> {
        self.apply(AdminEvent::Close)
    }

    /// Mark an entity for deletion, pending confirmation
    pub fn request_delete(&mut self, entry: CatalogEntry) -> std::result::Result<(), StateError> {
        self.apply(AdminEvent::RequestDelete(entry))
    }

    /// Drop the pending deletion without touching the store
    pub fn cancel_delete(&mut self) -> std::result::Result<(), StateError> {
        self.apply(AdminEvent::CancelDelete)
    }

    /// Delete the pending entity, clear the confirmation, and refresh.
    /// Store failures are logged, not surfaced; the refresh shows the
    /// authoritative state either way.
    pub async fn confirm_delete(&mut self) -> std::result::Result<(), StateError> {
        let entry = self
            .state
            .pending_delete()
            .cloned()
            .ok_or_else(|| StateError::InvalidTransition {
                state: self.state.to_string(),
                event: AdminEvent::ConfirmDelete.to_string(),
            })?;

        let result = match &entry {
            CatalogEntry::League(league) => self.leagues_repo.delete(&league.id).await,
            CatalogEntry::Team(team) => self.teams_repo.delete(&team.id).await,
        };
        if let Err(err) = result {
            tracing::error!(error = %err, id = entry.id(), "Delete failed");
        }

        self.apply(AdminEvent::ConfirmDelete)?;
        self.refresh().await;
        Ok(())
    }

    /// Save the league editor. A blank required field makes the submit a
    /// silent no-op: nothing is written and the editor stays open.
    pub async fn submit_league(&mut self, form: LeagueForm) -> Result<()> {
        let editing = match &self.state {
            AdminState::Adding(CatalogKind::League) => None,
            AdminState::Editing(CatalogEntry::League(league)) => Some(league.clone()),
            _ => {
                return Err(StateError::InvalidTransition {
                    state: self.state.to_string(),
                    event: "submit_league".to_string(),
                }
                .into());
            }
        };

        if form.name.trim().is_empty()
            || form.description.trim().is_empty()
            || form.image.trim().is_empty()
        {
            tracing::debug!("League form incomplete, submit ignored");
            return Ok(());
        }

        let image_url = self.resolve_image(&form.image, LEAGUES_BLOB_FOLDER).await?;
        let league = match editing {
            Some(mut league) => {
                league.name = form.name;
                league.description = form.description;
                league.image_url = image_url;
                league
            }
            None => League::new(form.name, form.description, image_url),
        };

        self.leagues_repo.upsert(league).await?;
        self.refresh().await;
        self.apply(AdminEvent::Close)?;
        Ok(())
    }

    /// Save the team editor. Required fields include the league selection;
    /// a blank one makes the submit a silent no-op like the other fields.
    pub async fn submit_team(&mut self, form: TeamForm) -> Result<()> {
        let editing = match &self.state {
            AdminState::Adding(CatalogKind::Team) => None,
            AdminState::Editing(CatalogEntry::Team(team)) => Some(team.clone()),
            _ => {
                return Err(StateError::InvalidTransition {
                    state: self.state.to_string(),
                    event: "submit_team".to_string(),
                }
                .into());
            }
        };

        let league_id = form
            .league_id
            .as_deref()
            .filter(|id| !id.trim().is_empty());
        let league_id = match league_id {
            Some(id) => id.to_string(),
            None => {
                tracing::debug!("Team form has no league selected, submit ignored");
                return Ok(());
            }
        };
        if form.name.trim().is_empty()
            || form.description.trim().is_empty()
            || form.image.trim().is_empty()
        {
            tracing::debug!("Team form incomplete, submit ignored");
            return Ok(());
        }

        let image_url = self.resolve_image(&form.image, TEAMS_BLOB_FOLDER).await?;
        let team = match editing {
            Some(mut team) => {
                team.name = form.name;
                team.description = form.description;
                team.image_url = image_url;
                team.league_id = league_id;
                team.latitude = form.latitude;
                team.longitude = form.longitude;
                team
            }
            None => Team {
                id: self.teams_repo.new_team_id(),
                name: form.name,
                description: form.description,
                image_url,
                created_at: Utc::now(),
                author_id: self
                    .backend
                    .current_account_id()
                    .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
                latitude: form.latitude,
                longitude: form.longitude,
                league_id,
            },
        };

        self.teams_repo.upsert(team).await?;
        self.refresh().await;
        self.apply(AdminEvent::Close)?;
        Ok(())
    }

    /// A remote URL passes through; a local handle is uploaded first.
    async fn resolve_image(&self, image: &str, folder: &str) -> Result<String> {
        match ImageRef::parse(image) {
            ImageRef::Remote(url) => Ok(url),
            ImageRef::Local(source) => self.backend.upload_blob(&source, folder).await,
        }
    }
}
