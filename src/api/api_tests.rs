#[cfg(test)]
mod router_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::config::AppConfig;

    fn app() -> Router {
        let config = AppConfig::development();
        create_router(AppState::development(), &config.server)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn concept(app: &Router, name: &str, description: &str) {
        let (status, _) = send(
            app,
            "POST",
            "/knowledge",
            Some(json!({"name": name, "description": description})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn link(app: &Router, source: &str, target: &str) {
        let (status, _) = send(
            app,
            "POST",
            "/relationships",
            Some(json!({"source": source, "target": target})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_upsert_returns_201_then_200_and_keeps_prerequisites() {
        let app = app();
        concept(&app, "Algebra", "").await;
        concept(&app, "Calculus", "Rates of change").await;
        link(&app, "Calculus", "Algebra").await;

        let (status, body) = send(
            &app,
            "POST",
            "/knowledge",
            Some(json!({"name": "Calculus", "tags": "Math, ANALYSIS"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "Rates of change");
        assert_eq!(body["tags"], json!(["analysis", "math"]));
        assert_eq!(body["prerequisites"], json!(["Algebra"]));
    }

    #[tokio::test]
    async fn test_blank_name_is_422() {
        let app = app();
        let (status, body) = send(&app, "POST", "/knowledge", Some(json!({"name": "   "}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn test_concept_detail_includes_dependents_and_chain() {
        let app = app();
        for name in ["A", "B", "C"] {
            concept(&app, name, "").await;
        }
        link(&app, "B", "A").await;
        link(&app, "C", "B").await;

        let (status, body) = send(&app, "GET", "/knowledge/B", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "B");
        assert_eq!(body["dependents"], json!(["C"]));

        let (_, body) = send(&app, "GET", "/knowledge/C", None).await;
        assert_eq!(body["prerequisite_chain"], json!(["B", "A"]));

        let (status, body) = send(&app, "GET", "/knowledge/Z", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_cascades_relationships() {
        let app = app();
        concept(&app, "A", "").await;
        concept(&app, "B", "").await;
        link(&app, "B", "A").await;

        let (status, _) = send(&app, "DELETE", "/knowledge/A", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, relationships) = send(&app, "GET", "/relationships", None).await;
        assert_eq!(relationships, json!([]));
        let (_, b) = send(&app, "GET", "/knowledge/B", None).await;
        assert_eq!(b["prerequisites"], json!([]));

        let (status, _) = send(&app, "DELETE", "/knowledge/A", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_relationship_and_path_names_are_trimmed() {
        let app = app();
        concept(&app, "FastAPI", "").await;
        concept(&app, "Python", "").await;

        let (status, body) = send(
            &app,
            "POST",
            "/relationships",
            Some(json!({"source": " FastAPI ", "target": "Python\t"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"source": "FastAPI", "target": "Python"}));

        let (status, body) = send(
            &app,
            "GET",
            "/learning-path?start=%20Python%20&goal=FastAPI%20",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["steps"], 1);

        let (status, body) = send(
            &app,
            "POST",
            "/relationships",
            Some(json!({"source": "   ", "target": "Python"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_FAILED");

        let (status, _) = send(&app, "GET", "/learning-path?start=%20&goal=Python", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_relationship_errors_and_unlink() {
        let app = app();
        concept(&app, "A", "").await;
        concept(&app, "B", "").await;

        let (status, _) = send(
            &app,
            "POST",
            "/relationships",
            Some(json!({"source": "A", "target": "A"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            "POST",
            "/relationships",
            Some(json!({"source": "A", "target": "Z"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        link(&app, "A", "B").await;
        link(&app, "A", "B").await;
        let (_, relationships) = send(&app, "GET", "/relationships", None).await;
        assert_eq!(relationships, json!([{"source": "A", "target": "B"}]));

        let (status, _) = send(
            &app,
            "DELETE",
            "/relationships",
            Some(json!({"source": "A", "target": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(
            &app,
            "DELETE",
            "/relationships",
            Some(json!({"source": "A", "target": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_learning_path_and_no_path() {
        let app = app();
        for name in ["A", "B", "C", "D"] {
            concept(&app, name, "").await;
        }
        link(&app, "B", "A").await;
        link(&app, "C", "B").await;

        let (status, body) = send(&app, "GET", "/learning-path?start=A&goal=C", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["path"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(body["steps"], 2);

        let (status, body) = send(&app, "GET", "/learning-path?start=A&goal=D", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NO_PATH");

        let (_, body) = send(&app, "GET", "/learning-path?start=A&goal=Nope", None).await;
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_share_visibility_and_authorize() {
        let app = app();
        let (status, share) = send(
            &app,
            "POST",
            "/shares",
            Some(json!({
                "author": "alice",
                "title": "Graph notes",
                "tags": ["graphs"],
                "visibility": "private",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = share["id"].as_str().unwrap().to_string();

        let (_, visible) = send(&app, "GET", "/shares?viewer=bob", None).await;
        assert_eq!(visible, json!([]));

        let (status, updated) = send(
            &app,
            "POST",
            &format!("/shares/{}/authorize", id),
            Some(json!({"handles": "bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["authorized_handles"], json!(["bob"]));

        let (_, visible) = send(&app, "GET", "/shares?viewer=bob", None).await;
        assert_eq!(visible[0]["id"], id.as_str());

        let (status, _) = send(
            &app,
            "POST",
            "/shares/missing/authorize",
            Some(json!({"handles": ["bob"]})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bad_visibility_is_422() {
        let app = app();
        let (status, _) = send(
            &app,
            "POST",
            "/shares",
            Some(json!({"author": "alice", "title": "x", "visibility": "everyone"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_matchups_and_compare() {
        let app = app();
        for (author, tags) in [
            ("alice", json!(["python", "ml"])),
            ("bob", json!(["python", "web"])),
            ("carol", json!(["cooking"])),
        ] {
            let (status, _) = send(
                &app,
                "POST",
                "/shares",
                Some(json!({"author": author, "title": "t", "tags": tags})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, matches) = send(&app, "GET", "/shares/matchups?viewer=alice", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(matches[0]["share"]["author"], "bob");
        assert_eq!(matches[0]["affinity"], json!(0.333));
        assert_eq!(matches[0]["shared_tags"], json!(["python"]));
        assert_eq!(matches[0]["complementary_tags"], json!(["web"]));
        assert_eq!(matches[1]["affinity"], json!(0.0));

        let (_, limited) = send(&app, "GET", "/shares/matchups?viewer=alice&limit=1", None).await;
        assert_eq!(limited.as_array().unwrap().len(), 1);

        let (_, comparison) = send(
            &app,
            "GET",
            "/shares/compare?handle_a=alice&handle_b=bob",
            None,
        )
        .await;
        assert_eq!(comparison["shared_tags"], json!(["python"]));
        assert_eq!(comparison["divergent_tags"], json!(["ml", "web"]));
    }

    #[tokio::test]
    async fn test_quiz_generate_and_attempt() {
        let app = app();
        concept(&app, "A", "Alpha foundations").await;
        concept(&app, "B", "Beta concept").await;
        link(&app, "B", "A").await;

        let (status, body) = send(
            &app,
            "POST",
            "/quiz/generate",
            Some(json!({"concept": "B", "difficulty": "beginner", "count": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0]["choices"].as_array().unwrap().len(), 3);
        assert!(questions[0].get("correct_index").is_none());

        let id = questions[0]["id"].as_str().unwrap();
        let (status, outcome) = send(
            &app,
            "POST",
            "/quizzes/attempt",
            Some(json!({"question_id": id, "choice": "Beta concept"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["correct"], true);

        let (status, _) = send(
            &app,
            "POST",
            "/quizzes/attempt",
            Some(json!({"question_id": id, "selected_index": 9})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            "POST",
            "/quizzes/generate",
            Some(json!({"concept": "Nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "POST",
            "/quizzes/generate",
            Some(json!({"concept": "A", "count": 11})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sessions_and_curricula() {
        let app = app();
        concept(&app, "Python", "").await;

        let (status, session) = send(
            &app,
            "POST",
            "/sessions",
            Some(json!({"name": "Sprint", "focus_tags": "python, web", "linked_concepts": ["Python"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(session["status"], "active");
        let id = session["id"].as_str().unwrap();

        let (status, updated) = send(
            &app,
            "PATCH",
            &format!("/sessions/{}", id),
            Some(json!({"status": "paused", "current_focus": "Decorators"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "paused");
        assert_eq!(updated["current_focus"], "Decorators");

        let (status, _) = send(
            &app,
            "POST",
            "/sessions",
            Some(json!({"name": "Broken", "linked_concepts": ["Rust"]})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            "POST",
            "/curricula",
            Some(json!({"title": "Syllabus", "source_url": "ftp://example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            "POST",
            "/curricula",
            Some(json!({"title": "Syllabus", "source_url": "https://example.com", "linked_concepts": "Python"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, curricula) = send(&app, "GET", "/curricula", None).await;
        assert_eq!(curricula.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_manifest_lists_actions() {
        let app = app();
        let (status, manifest) = send(&app, "GET", "/.well-known/mcp/manifest.json", None).await;
        assert_eq!(status, StatusCode::OK);
        let actions: Vec<&str> = manifest["actions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(actions, vec!["create_concept", "publish_share", "suggest_matches"]);
    }
}
