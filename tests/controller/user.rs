use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::{
    controller::{
        user::{get_all_users, get_user, get_user_favorites},
        util::path::ResourceId,
    },
    model::app::AppState,
};

use super::*;

/// Expect 200 with users that never expose their password
#[tokio::test]
async fn lists_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_user("leia@rebellion.org")
        .build()
        .await?;

    let resp = get_all_users(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "luke@rebellion.org");
    assert!(users.iter().all(|user| user.get("password").is_none()));

    Ok(())
}

/// Expect 200 with the requested user
#[tokio::test]
async fn gets_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = get_user(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "id": 1, "email": "luke@rebellion.org", "is_active": true })
    );

    Ok(())
}

/// Expect 404 when the user doesn't exist
#[tokio::test]
async fn user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holonet_tables().build().await?;

    let resp = get_user(State(test.to_app_state::<AppState>()), ResourceId(7))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User not found" })
    );

    Ok(())
}

/// Expect the current user's favorites with full planet and person records
#[tokio::test]
async fn gets_current_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_user("leia@rebellion.org")
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .with_person("Obi-Wan Kenobi", Some(1))
        .with_favorite_planet(1, 1)
        .with_favorite_planet(2, 2)
        .with_favorite_people(1, 1)
        .build()
        .await?;

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let planets = body["favorite_planets"].as_array().unwrap();
    let people = body["favorite_people"].as_array().unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0]["name"], "Tatooine");
    assert_eq!(planets[0]["climate"], "arid");
    assert_eq!(people.len(), 1);
    assert_eq!(people[0]["name"], "Obi-Wan Kenobi");

    Ok(())
}

/// Expect empty lists when the current user has no favorites
#[tokio::test]
async fn gets_empty_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "favorite_people": [], "favorite_planets": [] })
    );

    Ok(())
}

/// Expect 404 when there is no user to stand in as the current user
#[tokio::test]
async fn favorites_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holonet_tables().build().await?;

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User not found" })
    );

    Ok(())
}
