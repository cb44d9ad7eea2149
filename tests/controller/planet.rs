use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::{
    controller::{
        planet::{get_all_planets, get_planet},
        util::path::ResourceId,
    },
    model::app::AppState,
};

use super::*;

/// Expect 200 with every stored planet
#[tokio::test]
async fn lists_all_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .build()
        .await?;

    let resp = get_all_planets(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let planets = body.as_array().unwrap();
    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0]["name"], "Tatooine");
    assert_eq!(planets[1]["name"], "Alderaan");

    Ok(())
}

/// Expect 200 with every attribute of the planet
#[tokio::test]
async fn gets_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = get_planet(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "id": 1,
            "name": "Tatooine",
            "diameter": "10465",
            "rotation_period": "23",
            "orbital_period": "304",
            "gravity": "1 standard",
            "population": "200000",
            "climate": "arid",
            "terrain": "desert",
            "surface_water": "1",
        })
    );

    Ok(())
}

/// Expect 404 with a JSON error when the planet doesn't exist
#[tokio::test]
async fn planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holonet_tables().build().await?;

    let resp = get_planet(State(test.to_app_state::<AppState>()), ResourceId(999))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Planet not found" })
    );

    Ok(())
}
