use serde_json::json;

use crate::support::{TestApp, routes};

#[tokio::test]
async fn no_custom_question_by_default() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::RECRUITER).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["has_custom"], false);
    assert!(res.body["input"].is_null());
}

#[tokio::test]
async fn stored_question_is_returned() {
    let app = TestApp::spawn().await;

    let created = app.set_custom_question("C").await;
    assert_eq!(created["mcq_correct"], "c");
    assert!(created["id"].as_str().is_some());

    let res = app.get(routes::RECRUITER).await;

    assert_eq!(res.body["has_custom"], true);
    assert_eq!(res.body["input"]["id"], created["id"]);
    assert_eq!(res.body["input"]["mcq_options"][0], "tokio");
}

#[tokio::test]
async fn latest_question_wins() {
    let app = TestApp::spawn().await;

    app.set_custom_question("a").await;
    let latest = app.set_custom_question("d").await;

    let res = app.get(routes::RECRUITER).await;

    assert_eq!(res.body["input"]["id"], latest["id"]);
}

#[tokio::test]
async fn invalid_question_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::RECRUITER,
            &json!({
                "custom_question": "Why Rust?",
                "mcq_question": "Pick one",
                "mcq_options": ["one", "two", "three"],
                "mcq_correct": "a",
            }),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    let res = app.get(routes::RECRUITER).await;
    assert_eq!(res.body["has_custom"], false);
}
