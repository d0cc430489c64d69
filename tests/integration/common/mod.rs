//! Shared fixtures for the integration flows

use std::sync::Arc;

use matchday_accounts::User;
use matchday_app::AppState;
use matchday_backend::mock::MockBackend;
use matchday_catalog::{League, Team};

/// An application wired to a fresh mock backend
pub struct TestApp {
    pub backend: Arc<MockBackend>,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let backend = Arc::new(MockBackend::new());
        let state = AppState::with_backend(backend.clone());
        Self { backend, state }
    }

    pub async fn register_user(&self, username: &str, email: &str, password: &str) -> User {
        self.state
            .users
            .register(username, email, password)
            .await
            .expect("registration failed")
    }

    pub async fn seed_league(&self, name: &str) -> League {
        self.state
            .leagues
            .upsert(League::new(name, "Seeded", "https://img/liga.jpg"))
            .await
            .expect("league seed failed")
    }

    pub async fn seed_team(&self, name: &str, league_id: &str, author_id: &str) -> Team {
        self.state
            .teams
            .upsert(Team {
                id: self.state.teams.new_team_id(),
                name: name.to_string(),
                description: "Seeded".to_string(),
                image_url: "https://img/equipo.jpg".to_string(),
                author_id: author_id.to_string(),
                league_id: league_id.to_string(),
                ..Team::default()
            })
            .await
            .expect("team seed failed")
    }
}
