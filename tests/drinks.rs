mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_generate_returns_tagged_drink() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let res = app.post("/api/generate", json!({}), None).await?;
    assert_eq!(res.status, StatusCode::OK);

    let drink = &res.body["drink"];
    assert!(drink["id"].as_str().is_some_and(|id| id.starts_with("d_")));
    assert!(drink["ingredients"].as_array().is_some_and(|i| i.len() >= 4));
    assert_eq!(drink["steps"].as_array().map(Vec::len), Some(4));
    assert!(drink["tags"].as_array().is_some_and(|t| !t.is_empty()));

    // generated drinks are not stored
    let id = drink["id"].as_str().unwrap_or_default();
    let res = app.get(&format!("/api/drinks/{id}"), None).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_save_is_idempotent_and_infers_tags() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let first = app
        .save_drink("Velvet Harbor", &["2 oz gin", "4 oz tonic water"])
        .await?;
    let second = app
        .save_drink("Velvet Harbor", &["2 oz gin", "4 oz tonic water"])
        .await?;
    assert_eq!(first, second);

    let res = app.get(&format!("/api/drinks/{first}"), None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["drink"]["name"], "Velvet Harbor");
    assert_eq!(res.body["drink"]["tags"], json!(["gin", "tonic"]));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drink")
        .fetch_one(&app.pool)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
async fn test_save_keeps_given_tags() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let res = app
        .post(
            "/api/drinks",
            json!({"name": "House Punch", "ingredients": ["2 oz rum"], "tags": [" House ", ""]}),
            None,
        )
        .await?;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["drink"]["tags"], json!(["house"]));

    Ok(())
}

#[tokio::test]
async fn test_save_requires_name() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let res = app
        .post("/api/drinks", json!({"name": "   ", "ingredients": []}), None)
        .await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["message"], "Missing drink name");

    Ok(())
}

#[tokio::test]
async fn test_unknown_drink_is_not_found() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let res = app.get("/api/drinks/d_0000000000000000", None).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "drink not found");

    let res = app
        .get("/api/drinks/d_0000000000000000/narration", None)
        .await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_narration_script() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    let res = app
        .post(
            "/api/drinks",
            json!({
                "name": "Golden Lagoon",
                "description": "A tropical drink.",
                "ingredients": ["2 oz dark rum", "4 oz pineapple juice"],
                "steps": ["Fill a shaker with ice.", "Shake."]
            }),
            None,
        )
        .await?;
    let id = res.body["drink"]["id"].as_str().unwrap_or_default().to_owned();

    let res = app.get(&format!("/api/drinks/{id}/narration"), None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body["script"],
        "Golden Lagoon. A tropical drink. Ingredients: 2 oz dark rum, 4 oz pineapple juice. Steps: Fill a shaker with ice. Shake. Cheers."
    );

    Ok(())
}

#[tokio::test]
async fn test_suggestions_default_count() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    let res = app.get("/api/suggestions", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["drinks"].as_array().map(Vec::len), Some(6));
    assert_eq!(res.body["personalized"], false);

    let res = app.get("/api/suggestions?count=3", None).await?;
    assert_eq!(res.body["drinks"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[tokio::test]
async fn test_suggestions_invalid_count() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;

    for count in ["0", "-2", "21", "abc", "2.5"] {
        let res = app
            .get(&format!("/api/suggestions?count={count}"), None)
            .await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "count={count}");
        assert_eq!(res.body["error"], "Bad Request", "count={count}");
        assert!(res.body["message"].is_string(), "count={count}");
    }

    Ok(())
}

#[tokio::test]
async fn test_suggestions_personalized_after_rating() -> anyhow::Result<()> {
    let app = helpers::spawn_app().await?;
    let cookie = app.login_as("ana").await?;

    let res = app.get("/api/suggestions", Some(&cookie)).await?;
    assert_eq!(res.body["personalized"], false);

    let id = app.save_drink("Dark Tide", &["2 oz dark rum"]).await?;
    app.post("/api/likes", json!({"drinkId": id, "value": 1}), Some(&cookie))
        .await?;

    let res = app.get("/api/suggestions?count=20", Some(&cookie)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["personalized"], true);

    // every rum drink outranks every drink without a liked tag
    let has_rum = res.body["drinks"]
        .as_array()
        .map(|drinks| {
            drinks
                .iter()
                .map(|d| {
                    d["tags"]
                        .as_array()
                        .is_some_and(|tags| tags.iter().any(|t| t == "rum"))
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    assert_eq!(has_rum.len(), 20);
    assert!(has_rum.windows(2).all(|w| w[0] || !w[1]));

    Ok(())
}
