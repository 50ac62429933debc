use common::Language;
use serde_json::json;

use std::sync::Arc;

use crate::support::{
    Behavior, FakeSandbox, QuestionUnreadableStore, RUST_CODE, TS_CODE, TestApp, routes,
    submission_body,
};

mod evaluation {
    use super::*;

    #[tokio::test]
    async fn correct_submission_gets_success_scores() {
        let app = TestApp::spawn().await;

        let body = app.submit("b").await;

        assert_eq!(body["rust"]["outcome"]["status"], "evaluated");
        assert_eq!(body["rust"]["outcome"]["verdict"]["score"], 92.0);
        assert_eq!(body["typescript"]["outcome"]["verdict"]["score"], 88.0);
        assert_eq!(body["quiz"]["verdict"]["score"], 92.0);
        assert_eq!(body["rust"]["outcome"]["output"], "6");
        assert!(body["id"].as_str().is_some());
        assert!(body["custom"].is_null());
        assert_eq!(app.sandbox.calls(), 2);
    }

    #[tokio::test]
    async fn wrong_output_gets_failure_score() {
        let app = TestApp::spawn_with(FakeSandbox::printing("5")).await;

        let body = app.submit("c").await;

        assert_eq!(body["rust"]["outcome"]["verdict"]["score"], 50.0);
        assert_eq!(body["rust"]["outcome"]["verdict"]["wrong"], 1);
        assert_eq!(body["typescript"]["outcome"]["verdict"]["correct"], false);
        assert_eq!(body["quiz"]["verdict"]["score"], 50.0);
    }

    #[tokio::test]
    async fn quiz_answer_ignores_case_and_whitespace() {
        let app = TestApp::spawn().await;

        let body = app.submit("  B ").await;

        assert_eq!(body["quiz"]["verdict"]["correct"], true);
    }

    #[tokio::test]
    async fn unavailable_sandbox_degrades_one_language_only() {
        let sandbox = FakeSandbox::printing("6");
        sandbox.set(Language::TypeScript, Behavior::RateLimited);
        let app = TestApp::spawn_with(sandbox).await;

        let body = app.submit("b").await;

        let ts = &body["typescript"];
        assert_eq!(ts["outcome"]["status"], "degraded");
        assert_eq!(ts["outcome"]["verdict"]["score"], 50.0);
        assert_eq!(ts["outcome"]["verdict"]["wrong"], 1);
        assert_eq!(ts["outcome"]["reason"]["kind"], "sandbox_unavailable");
        assert_eq!(ts["outcome"]["reason"]["attempts"], 3);
        assert_eq!(ts["time_ms"], 0.0);

        assert_eq!(body["rust"]["outcome"]["status"], "evaluated");
        assert_eq!(body["rust"]["outcome"]["verdict"]["score"], 92.0);
        // One Rust call, three TypeScript attempts.
        assert_eq!(app.sandbox.calls(), 4);
    }

    #[tokio::test]
    async fn short_field_names_are_accepted() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SUBMISSIONS,
                &json!({"rust_code": RUST_CODE, "ts_code": TS_CODE, "ai_answer": "b"}),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["typescript"]["outcome"]["verdict"]["score"], 88.0);
    }
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn missing_code_is_rejected_without_sandbox_calls() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SUBMISSIONS,
                &json!({"rust_code": "  ", "typescript_code": TS_CODE, "quiz_answer": "b"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "rust code is required");
        assert_eq!(app.sandbox.calls(), 0);
    }

    #[tokio::test]
    async fn missing_quiz_answer_is_rejected() {
        let app = TestApp::spawn().await;

        let mut body = submission_body("b");
        body.as_object_mut().unwrap().remove("quiz_answer");
        let res = app.post(routes::SUBMISSIONS, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["message"], "Quiz answer is required");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::SUBMISSIONS, "{not json").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod custom_question {
    use super::*;

    #[tokio::test]
    async fn custom_answer_is_scored_against_current_question() {
        let app = TestApp::spawn().await;
        app.set_custom_question("a").await;

        let mut body = submission_body("b");
        body["custom_answer"] = json!("A");
        let res = app.post(routes::SUBMISSIONS, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["custom"]["answer"], "A");
        assert_eq!(res.body["custom"]["verdict"]["score"], 92.0);
    }

    #[tokio::test]
    async fn custom_answer_without_question_is_ignored() {
        let app = TestApp::spawn().await;

        let mut body = submission_body("b");
        body["custom_answer"] = json!("a");
        let res = app.post(routes::SUBMISSIONS, &body).await;

        assert_eq!(res.status, 201);
        assert!(res.body["custom"].is_null());
    }

    #[tokio::test]
    async fn unreadable_custom_question_is_skipped() {
        let app = TestApp::spawn_with_store(
            FakeSandbox::printing("6"),
            Arc::new(QuestionUnreadableStore::default()),
        )
        .await;

        let mut body = submission_body("b");
        body["custom_answer"] = json!("a");
        let res = app.post(routes::SUBMISSIONS, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["custom"].is_null());
        assert_eq!(res.body["quiz"]["verdict"]["score"], 92.0);

        let results = app.get(routes::RESULTS).await;
        assert_eq!(results.body["total_submissions"], 1);
    }
}
