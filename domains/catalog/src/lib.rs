//! Catalog domain: leagues, teams, and the administration screens

pub mod controller;
pub mod domain;
pub mod presenter;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use controller::admin::{AdminController, LeagueForm, TeamForm};
pub use domain::entities::{
    ImageRef, League, Team, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};
pub use domain::state::{AdminEvent, AdminState, AdminStateMachine, CatalogEntry, CatalogKind};
pub use presenter::browse::{
    LeagueBrowsePresenter, TeamBrowsePresenter, TeamCard, UNKNOWN_AUTHOR, UNKNOWN_LEAGUE,
};
pub use repository::leagues::{LeagueRepository, LEAGUES_BLOB_FOLDER, LEAGUES_COLLECTION};
pub use repository::teams::{TeamRepository, TEAMS_BLOB_FOLDER, TEAMS_COLLECTION};
