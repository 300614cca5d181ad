mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{body_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn empty_journal_lists_nothing() {
    let app = TestApp::new();

    let resp = app.get("/api/mood-entries").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn create_minimal_entry() {
    let app = TestApp::new();
    let before = Utc::now();

    let resp = app
        .post_json("/api/mood-entries", json!({ "mood": "Happy", "emoji": "😊" }))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let entry = body_json(resp).await;
    assert!(!entry["id"].as_str().unwrap().is_empty());
    assert_eq!(entry["mood"], "Happy");
    assert_eq!(entry["emoji"], "😊");
    assert!(entry["note"].is_null());
    assert!(entry["name"].is_null());

    let created_at: DateTime<Utc> = entry["createdAt"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before);
}

#[tokio::test]
async fn created_entry_is_listed_once() {
    let app = TestApp::new();

    let created = app
        .create_entry(json!({
            "name": "Sam",
            "mood": "Grateful",
            "emoji": "🙏",
            "note": "Dinner with family"
        }))
        .await;

    let listed = body_json(app.get("/api/mood-entries").await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0]["name"], "Sam");
    assert_eq!(listed[0]["note"], "Dinner with family");
}

#[tokio::test]
async fn entries_are_listed_newest_first() {
    let app = TestApp::new();

    let mut ids = Vec::new();
    for mood in ["Calm", "Tired", "Happy", "Anxious"] {
        let entry = app.create_entry(json!({ "mood": mood, "emoji": "🙂" })).await;
        ids.push(entry["id"].clone());
    }
    ids.reverse();

    let listed = body_json(app.get("/api/mood-entries").await).await;
    let listed_ids: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].clone())
        .collect();
    assert_eq!(listed_ids, ids);

    // Repeated reads without writes are identical
    let again = body_json(app.get("/api/mood-entries").await).await;
    assert_eq!(listed, again);
}

#[tokio::test]
async fn create_rejects_missing_mood_or_emoji() {
    let app = TestApp::new();

    let resp = app
        .post_json("/api/mood-entries", json!({ "emoji": "😊" }))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Mood is required");
    assert!(body["details"]["mood"].is_array());

    let resp = app
        .post_json("/api/mood-entries", json!({ "mood": "Happy", "emoji": "" }))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["details"]["emoji"].is_array());
    assert!(body["details"].get("mood").is_none());

    // Nothing reached the store
    let listed = body_json(app.get("/api/mood-entries").await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn create_rejects_wrong_shape() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/api/mood-entries",
            json!({ "mood": "Happy", "emoji": "😊", "note": 42 }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());

    let resp = app.post_raw("/api/mood-entries", "not json").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_fields_are_ignored() {
    let app = TestApp::new();

    let entry = app
        .create_entry(json!({
            "mood": "Love",
            "emoji": "🥰",
            "id": "client-chosen",
            "color": "pink"
        }))
        .await;

    assert_ne!(entry["id"], "client-chosen");
    assert!(entry.get("color").is_none());
}

#[tokio::test]
async fn stats_summarize_the_journal() {
    let app = TestApp::new();

    let empty = body_json(app.get("/api/mood-entries/stats").await).await;
    assert_eq!(empty["totalEntries"], 0);
    assert!(empty["mostCommonMood"].is_null());
    assert!(empty["latestEmoji"].is_null());

    for (mood, emoji) in [("Sad", "😢"), ("Happy", "😊"), ("Happy", "😊"), ("Calm", "😌")] {
        app.create_entry(json!({ "mood": mood, "emoji": emoji })).await;
    }

    let resp = app.get("/api/mood-entries/stats").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let stats = body_json(resp).await;
    assert_eq!(stats["totalEntries"], 4);
    assert_eq!(stats["entriesThisWeek"], 4);
    assert_eq!(stats["mostCommonMood"]["mood"], "Happy");
    assert_eq!(stats["mostCommonMood"]["count"], 2);
    assert_eq!(stats["latestEmoji"], "😌");
}

#[tokio::test]
async fn canonical_moods_and_health() {
    let app = TestApp::new();

    let moods = body_json(app.get("/api/moods").await).await;
    let moods = moods.as_array().unwrap();
    assert_eq!(moods.len(), 12);
    assert_eq!(moods[0], json!({ "id": "happy", "name": "Happy", "emoji": "😊" }));

    let health = body_json(app.get("/health").await).await;
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn store_failure_is_an_internal_error() {
    let app = TestApp::with_broken_store();

    for uri in ["/api/mood-entries", "/api/mood-entries/stats"] {
        let resp = app.get(uri).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(
            body_json(resp).await,
            json!({ "message": "Internal server error" })
        );
    }

    let resp = app
        .post_json("/api/mood-entries", json!({ "mood": "Happy", "emoji": "😊" }))
        .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Internal server error" })
    );
}
