use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holonet::{
    model::favorite::AddFavoriteDto,
    server::{
        controller::{
            favorite::{
                add_favorite_people, add_favorite_planet, delete_favorite_people,
                delete_favorite_planet,
            },
            util::path::ResourceId,
        },
        model::app::AppState,
    },
};

use super::*;

fn body_for(user_id: i32) -> Result<Json<AddFavoriteDto>, axum::extract::rejection::JsonRejection> {
    Ok(Json(AddFavoriteDto {
        user_id: Some(user_id),
    }))
}

/// Expect 201 with the planet and user on the first add
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        body_for(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Planet added to favorites");
    assert_eq!(body["planet"]["id"], 1);
    assert_eq!(body["planet"]["name"], "Tatooine");
    assert_eq!(body["user"]["email"], "luke@rebellion.org");
    assert!(body["user"].get("password").is_none());
    assert_eq!(test.user().count_favorite_planets(1).await?, 1);

    Ok(())
}

/// Expect 200 and no new row when the planet is already a favorite
#[tokio::test]
async fn add_favorite_planet_twice() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .build()
        .await?;

    let first = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        body_for(1),
    )
    .await
    .into_response();
    let second = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        body_for(1),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(
        body_json(second).await,
        serde_json::json!({ "message": "Planet already in favorites" })
    );
    assert_eq!(test.user().count_favorite_planets(1).await?, 1);

    Ok(())
}

/// Expect 404 when the planet doesn't exist
#[tokio::test]
async fn add_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        ResourceId(999),
        body_for(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Planet not found" })
    );

    Ok(())
}

/// Expect 404 when the user in the body doesn't exist
#[tokio::test]
async fn add_planet_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        body_for(5),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User not found" })
    );

    Ok(())
}

/// Expect 400 when the body has no user_id
#[tokio::test]
async fn add_planet_without_user_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        Ok(Json(AddFavoriteDto::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "user_id is required in request body" })
    );
    assert_eq!(test.user().count_favorite_planets(1).await?, 0);

    Ok(())
}

/// Expect 201 with the person and user on the first add
#[tokio::test]
async fn adds_favorite_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_person("Yoda", None)
        .build()
        .await?;

    let resp = add_favorite_people(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        body_for(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "People added to favorites");
    assert_eq!(body["people"]["name"], "Yoda");
    assert_eq!(body["user"]["id"], 1);

    Ok(())
}

/// Expect 200 when the person is already a favorite
#[tokio::test]
async fn add_favorite_people_twice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_person("Yoda", None)
        .with_favorite_people(1, 1)
        .build()
        .await?;

    let resp = add_favorite_people(
        State(test.to_app_state::<AppState>()),
        ResourceId(1),
        body_for(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "People already in favorites" })
    );

    Ok(())
}

/// Expect 404 when the person doesn't exist
#[tokio::test]
async fn add_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = add_favorite_people(
        State(test.to_app_state::<AppState>()),
        ResourceId(3),
        body_for(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "People not found" })
    );

    Ok(())
}

/// Expect 200 and the edge gone after removing a favorite planet
#[tokio::test]
async fn removes_favorite_planet() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .with_favorite_planet(1, 1)
        .build()
        .await?;

    let resp = delete_favorite_planet(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "Planet removed from favorites successfully" })
    );
    assert_eq!(test.user().count_favorite_planets(1).await?, 0);

    Ok(())
}

/// Expect 404 when removing a planet that was never a favorite
#[tokio::test]
async fn remove_never_added_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = delete_favorite_planet(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite planet not found" })
    );

    Ok(())
}

/// Expect only the current user's edge to be removed
#[tokio::test]
async fn remove_planet_keeps_other_users() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_user("leia@rebellion.org")
        .with_planet("Alderaan")
        .with_favorite_planet(1, 1)
        .with_favorite_planet(2, 1)
        .build()
        .await?;

    let resp = delete_favorite_planet(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test.user().count_favorite_planets(1).await?, 0);
    assert_eq!(test.user().count_favorite_planets(2).await?, 1);

    Ok(())
}

/// Expect 200 after removing a favorite person
#[tokio::test]
async fn removes_favorite_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .with_person("Yoda", None)
        .with_favorite_people(1, 1)
        .build()
        .await?;

    let resp = delete_favorite_people(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "Person removed from favorites successfully" })
    );

    Ok(())
}

/// Expect 404 when there is no user to act as the current user
#[tokio::test]
async fn remove_people_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_person("Yoda", None)
        .build()
        .await?;

    let resp = delete_favorite_people(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User not found" })
    );

    Ok(())
}

/// Expect 404 when removing a person who was never a favorite
#[tokio::test]
async fn remove_never_added_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_holonet_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = delete_favorite_people(State(test.to_app_state::<AppState>()), ResourceId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite person not found" })
    );

    Ok(())
}
