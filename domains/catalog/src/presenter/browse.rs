//! Browse screen presenters
//!
//! Read-only list screens with a name filter. The team screen joins each
//! team against the league and user lists loaded alongside it; dangling
//! references render with fallback labels instead of failing.

use std::collections::HashMap;
use std::sync::Arc;

use matchday_accounts::{User, UserRepository};
use matchday_backend::BackendService;

use crate::domain::entities::{League, Team};
use crate::repository::leagues::LeagueRepository;
use crate::repository::teams::TeamRepository;

pub const UNKNOWN_LEAGUE: &str = "Liga desconocida";
pub const UNKNOWN_AUTHOR: &str = "Desconocido";

/// One rendered row of the team list
#[derive(Debug, Clone, PartialEq)]
pub struct TeamCard {
    pub team: Team,
    pub league_name: String,
    pub author_name: String,
}

pub struct TeamBrowsePresenter {
    teams_repo: TeamRepository,
    leagues_repo: LeagueRepository,
    users_repo: UserRepository,
    teams: Vec<Team>,
    leagues: HashMap<String, League>,
    authors: HashMap<String, User>,
    pub filter: String,
    pub is_loading: bool,
}

impl TeamBrowsePresenter {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self {
            teams_repo: TeamRepository::new(backend.clone()),
            leagues_repo: LeagueRepository::new(backend.clone()),
            users_repo: UserRepository::new(backend),
            teams: Vec::new(),
            leagues: HashMap::new(),
            authors: HashMap::new(),
            filter: String::new(),
            is_loading: false,
        }
    }

    /// Load teams plus the league and user lookups. Any failed fetch
    /// renders as an empty list; the screen cannot tell the difference.
    pub async fn load(&mut self) {
        self.is_loading = true;

        self.teams = self.teams_repo.list_all().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Team list load failed");
            Vec::new()
        });
        self.leagues = self
            .leagues_repo
            .list_all()
            .await
            .map(|leagues| {
                leagues
                    .into_iter()
                    .map(|league| (league.id.clone(), league))
                    .collect()
            })
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "League lookup load failed");
                HashMap::new()
            });
        self.authors = self
            .users_repo
            .list_all()
            .await
            .map(|users| users.into_iter().map(|user| (user.id.clone(), user)).collect())
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Author lookup load failed");
                HashMap::new()
            });

        self.is_loading = false;
    }

    /// Rows matching the current filter, with references resolved
    pub fn visible(&self) -> Vec<TeamCard> {
        let needle = self.filter.to_lowercase();
        self.teams
            .iter()
            .filter(|team| team.name.to_lowercase().contains(&needle))
            .map(|team| TeamCard {
                league_name: self
                    .leagues
                    .get(&team.league_id)
                    .map(|league| league.name.clone())
                    .unwrap_or_else(|| UNKNOWN_LEAGUE.to_string()),
                author_name: self
                    .authors
                    .get(&team.author_id)
                    .map(|user| user.username.clone())
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                team: team.clone(),
            })
            .collect()
    }
}

pub struct LeagueBrowsePresenter {
    leagues_repo: LeagueRepository,
    leagues: Vec<League>,
    pub filter: String,
    pub is_loading: bool,
}

impl LeagueBrowsePresenter {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self {
            leagues_repo: LeagueRepository::new(backend),
            leagues: Vec::new(),
            filter: String::new(),
            is_loading: false,
        }
    }

    /// Load the league list; a failed fetch renders as an empty list.
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.leagues = self.leagues_repo.list_all().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "League list load failed");
            Vec::new()
        });
        self.is_loading = false;
    }

    /// Leagues matching the current filter
    pub fn visible(&self) -> Vec<&League> {
        let needle = self.filter.to_lowercase();
        self.leagues
            .iter()
            .filter(|league| league.name.to_lowercase().contains(&needle))
            .collect()
    }
}
