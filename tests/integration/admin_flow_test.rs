//! Admin and browse flow integration tests
//!
//! Drives the admin controller and browse presenters end to end against
//! the mock backend: create, edit, delete with confirmation, and the
//! reference resolution the team list renders.

mod common;

use common::TestApp;
use matchday_backend::BackendService as _;
use matchday_catalog::{
    AdminState, CatalogEntry, CatalogKind, LeagueForm, TeamForm, UNKNOWN_LEAGUE,
};

#[tokio::test]
async fn test_full_league_and_team_crud() {
    let app = TestApp::new();
    let user = app.register_user("admin", "admin@x.com", "secret1").await;
    app.backend.sign_in("admin@x.com", "secret1").await.unwrap();

    let mut admin = app.state.admin_screen().await;
    assert_eq!(admin.state(), &AdminState::Idle);

    // Create a league
    admin.open_add(CatalogKind::League).unwrap();
    admin
        .submit_league(LeagueForm {
            name: "Liga Norte".to_string(),
            description: "Amateur".to_string(),
            image: "https://img/liga.jpg".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(admin.leagues.len(), 1);
    let league = admin.leagues[0].clone();
    assert!(!league.id.is_empty());

    // Create a team in it
    admin.open_add(CatalogKind::Team).unwrap();
    admin
        .submit_team(TeamForm {
            name: "CD Chamberí".to_string(),
            description: "Barrio".to_string(),
            image: "https://img/equipo.jpg".to_string(),
            league_id: Some(league.id.clone()),
            ..TeamForm::default()
        })
        .await
        .unwrap();
    assert_eq!(admin.teams.len(), 1);
    let team = admin.teams[0].clone();
    assert_eq!(team.author_id, user.id);
    assert_eq!(team.league_id, league.id);

    // Edit the team, preserving identity and creation stamp
    admin.open_edit(CatalogEntry::Team(team.clone())).unwrap();
    admin
        .submit_team(TeamForm {
            name: "CD Chamberí B".to_string(),
            description: "Filial".to_string(),
            image: team.image_url.clone(),
            league_id: Some(league.id.clone()),
            latitude: team.latitude,
            longitude: team.longitude,
        })
        .await
        .unwrap();
    assert_eq!(admin.teams.len(), 1);
    let edited = &admin.teams[0];
    assert_eq!(edited.id, team.id);
    assert_eq!(edited.name, "CD Chamberí B");
    assert_eq!(
        edited.created_at.timestamp_millis(),
        team.created_at.timestamp_millis()
    );
}

#[tokio::test]
async fn test_blank_id_upsert_round_trips_through_store() {
    let app = TestApp::new();
    let league = app.seed_league("Liga Norte").await;

    let stored = app
        .state
        .leagues
        .get_by_id(&league.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, league.id);
    assert_eq!(stored.name, "Liga Norte");
}

#[tokio::test]
async fn test_delete_of_missing_ids_is_quiet() {
    let app = TestApp::new();
    app.state.leagues.delete("never-existed").await.unwrap();
    app.state.teams.delete("never-existed").await.unwrap();
}

#[test_log::test(tokio::test)]
async fn test_failed_refresh_is_indistinguishable_from_empty() {
    let app = TestApp::new();
    app.seed_league("Liga Norte").await;

    // The repository keeps the failure visible...
    app.backend.set_fail_documents(true);
    assert!(app.state.leagues.list_all().await.is_err());

    // ...while the controller renders it as an empty list
    let admin = app.state.admin_screen().await;
    assert!(admin.leagues.is_empty());
    assert!(admin.teams.is_empty());

    app.backend.set_fail_documents(false);
    let admin = app.state.admin_screen().await;
    assert_eq!(admin.leagues.len(), 1);
}

#[tokio::test]
async fn test_delete_confirmation_is_exact_once() {
    let app = TestApp::new();
    let league = app.seed_league("Liga Norte").await;
    let team = app.seed_team("CD Chamberí", &league.id, "u1").await;

    let mut admin = app.state.admin_screen().await;

    admin
        .request_delete(CatalogEntry::Team(team.clone()))
        .unwrap();
    admin.cancel_delete().unwrap();
    assert!(app.backend.delete_calls("equipos").is_empty());

    admin
        .request_delete(CatalogEntry::Team(team.clone()))
        .unwrap();
    admin.confirm_delete().await.unwrap();
    assert_eq!(app.backend.delete_calls("equipos"), vec![team.id.clone()]);
    assert!(admin.teams.is_empty());

    // No pending target remains to confirm again
    assert!(admin.confirm_delete().await.is_err());
    assert_eq!(app.backend.delete_calls("equipos").len(), 1);
}

#[tokio::test]
async fn test_deleting_league_orphans_team_with_fallback_label() {
    let app = TestApp::new();
    let league = app.seed_league("Liga Norte").await;
    app.seed_team("CD Chamberí", &league.id, "u1").await;

    let mut admin = app.state.admin_screen().await;
    admin
        .request_delete(CatalogEntry::League(league))
        .unwrap();
    admin.confirm_delete().await.unwrap();
    assert!(admin.leagues.is_empty());
    assert_eq!(admin.teams.len(), 1);

    // The browse screen tolerates the dangling reference
    let mut browse = app.state.team_browse_screen();
    browse.load().await;
    let rows = browse.visible();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].league_name, UNKNOWN_LEAGUE);
}

#[tokio::test]
async fn test_editor_state_serializes_popups() {
    let app = TestApp::new();
    let mut admin = app.state.admin_screen().await;

    admin.open_add(CatalogKind::League).unwrap();
    assert!(admin.state().is_editor_open());

    // A second popup cannot open over the editor
    assert!(admin.open_list(CatalogKind::Team).is_err());
    assert!(admin.open_add(CatalogKind::Team).is_err());

    admin.close().unwrap();
    admin.open_list(CatalogKind::Team).unwrap();
    assert_eq!(admin.state(), &AdminState::Browsing(CatalogKind::Team));
}

#[tokio::test]
async fn test_local_images_upload_to_entity_folders() {
    let app = TestApp::new();
    let mut admin = app.state.admin_screen().await;

    admin.open_add(CatalogKind::League).unwrap();
    admin
        .submit_league(LeagueForm {
            name: "Liga Norte".to_string(),
            description: "Amateur".to_string(),
            image: "file:///tmp/escudo-liga.jpg".to_string(),
        })
        .await
        .unwrap();
    let league_id = admin.leagues[0].id.clone();

    admin.open_add(CatalogKind::Team).unwrap();
    admin
        .submit_team(TeamForm {
            name: "CD Chamberí".to_string(),
            description: "Barrio".to_string(),
            image: "content://media/external/images/42".to_string(),
            league_id: Some(league_id),
            ..TeamForm::default()
        })
        .await
        .unwrap();

    let blobs = app.backend.uploaded_blobs();
    assert_eq!(blobs.len(), 2);
    assert_eq!(blobs[0].folder, "ligas");
    assert_eq!(blobs[1].folder, "equipos");
    assert!(admin.teams[0].image_url.starts_with("https://storage.mock/equipos/"));
}
