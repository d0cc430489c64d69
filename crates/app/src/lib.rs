//! Matchday application composition root
//!
//! Wires configuration to a backend and hands the UI shell one state
//! object with the repositories, presenters, and admin controller hanging
//! off it. Everything here is glue; behavior lives in the domain crates.

pub mod navigation;

use std::sync::Arc;

use matchday_accounts::{
    LoginPresenter, PasswordResetPresenter, ProfilePresenter, RegisterPresenter, UserRepository,
};
use matchday_backend::{BackendConfig, BackendFactory, BackendService};
use matchday_catalog::{
    AdminController, LeagueBrowsePresenter, LeagueRepository, TeamBrowsePresenter, TeamRepository,
};

pub use navigation::Screen;

/// Shared application state the UI shell hangs screens off
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendService>,
    pub users: UserRepository,
    pub leagues: LeagueRepository,
    pub teams: TeamRepository,
}

impl AppState {
    /// Build the application from environment configuration
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = BackendConfig::from_env();
        let backend = BackendFactory::create(config)?;
        Ok(Self::with_backend(Arc::from(backend)))
    }

    /// Build the application around an existing backend
    pub fn with_backend(backend: Arc<dyn BackendService>) -> Self {
        Self {
            users: UserRepository::new(backend.clone()),
            leagues: LeagueRepository::new(backend.clone()),
            teams: TeamRepository::new(backend.clone()),
            backend,
        }
    }

    // Screen factories; each screen owns its presenter for its lifetime.

    pub fn login_screen(&self) -> LoginPresenter {
        LoginPresenter::new(self.backend.clone())
    }

    pub fn register_screen(&self) -> RegisterPresenter {
        RegisterPresenter::new(self.users.clone())
    }

    pub fn password_reset_screen(&self) -> PasswordResetPresenter {
        PasswordResetPresenter::new(self.backend.clone())
    }

    pub fn profile_screen(&self) -> ProfilePresenter {
        ProfilePresenter::new(self.backend.clone())
    }

    pub fn league_browse_screen(&self) -> LeagueBrowsePresenter {
        LeagueBrowsePresenter::new(self.backend.clone())
    }

    pub fn team_browse_screen(&self) -> TeamBrowsePresenter {
        TeamBrowsePresenter::new(self.backend.clone())
    }

    pub async fn admin_screen(&self) -> AdminController {
        AdminController::new(self.backend.clone()).await
    }
}

/// Install the tracing subscriber, honoring `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
