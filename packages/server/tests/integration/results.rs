use common::Language;

use crate::support::{Behavior, FakeSandbox, TestApp, routes};

#[tokio::test]
async fn empty_dashboard_is_all_zero() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::RESULTS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["total_submissions"], 0);
    assert_eq!(res.body["rust_success_rate"], 0.0);
    assert_eq!(res.body["avg_typescript_time"], 0.0);
    assert_eq!(res.body["submissions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dashboard_aggregates_recorded_submissions() {
    let sandbox = FakeSandbox::printing("6");
    sandbox.set(Language::Rust, Behavior::Prints("7"));
    let app = TestApp::spawn_with(sandbox).await;

    app.submit("b").await;
    app.submit("a").await;

    let res = app.get(routes::RESULTS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["total_submissions"], 2);
    assert_eq!(res.body["rust_success_rate"], 0.0);
    assert_eq!(res.body["typescript_success_rate"], 100.0);
    assert_eq!(res.body["quiz_success_rate"], 50.0);
    assert_eq!(res.body["total_rust_wrong"], 2);
    assert_eq!(res.body["total_typescript_wrong"], 0);
    assert_eq!(res.body["avg_rust_time"], 150.0);
    assert_eq!(res.body["submissions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn recent_submissions_are_newest_first() {
    let app = TestApp::spawn().await;

    let first = app.submit("b").await;
    let second = app.submit("b").await;

    let res = app.get(routes::RESULTS).await;

    let submissions = res.body["submissions"].as_array().unwrap();
    assert_eq!(submissions[0]["id"], second["id"]);
    assert_eq!(submissions[1]["id"], first["id"]);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/v1/leaderboard").await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
