use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::{
    controller::{
        people::{get_all_people, get_person},
        util::path::ResourceId,
    },
    model::app::AppState,
};

use super::*;

/// Expect 200 with every stored person in ID order
#[tokio::test]
async fn lists_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_planet("Tatooine")
        .with_person("Luke Skywalker", Some(1))
        .with_person("C-3PO", None)
        .build()
        .await?;

    let resp = get_all_people(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let people = body.as_array().unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0]["name"], "Luke Skywalker");
    assert_eq!(people[0]["homeworld"], 1);
    assert_eq!(people[1]["homeworld"], serde_json::Value::Null);

    Ok(())
}

/// Expect 200 with an empty array when no people are stored
#[tokio::test]
async fn lists_empty_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holonet_tables().build().await?;

    let resp = get_all_people(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    Ok(())
}

/// Expect 200 with every attribute of the person
#[tokio::test]
async fn gets_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_planet("Tatooine")
        .with_person("Luke Skywalker", Some(1))
        .build()
        .await?;

    let resp = get_person(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Luke Skywalker");
    assert_eq!(body["birth_year"], "19BBY");
    assert_eq!(body["homeworld"], 1);

    Ok(())
}

/// Expect 404 with a JSON error when the person doesn't exist
#[tokio::test]
async fn person_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holonet_tables().build().await?;

    let resp = get_person(State(test.to_app_state::<AppState>()), ResourceId(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Person not found" })
    );

    Ok(())
}

/// Expect 500 when the people table is missing
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_all_people(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Internal server error" })
    );

    Ok(())
}
