use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn json_request_as(method: &str, uri: &str, body: &str, user_id: u64) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header("X-USER-ID", user_id.to_string())
        .body(body.to_string())
        .unwrap()
}

const KIM: &str =
    r#"{"name":"Kim","password":"pw","address":"Seoul","email":"a@b.com","age":30}"#;

// --- users ---

#[tokio::test]
async fn create_user_returns_success_envelope_with_name() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/users", KIM))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["code"], "COMMON200");
    assert_eq!(body["result"]["name"], "Kim");
}

#[tokio::test]
async fn update_unknown_user_returns_404_failure_envelope() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/api/users/99", KIM))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["code"], "USER4004");
    assert_eq!(body["message"], "사용자를 찾을 수 없습니다.");
    assert_eq!(body["result"], serde_json::Value::Null);
}

#[tokio::test]
async fn delete_unknown_user_returns_404() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/users/99")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- posts ---

#[tokio::test]
async fn list_posts_starts_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/api/post").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["result"]["postList"], serde_json::json!([]));
}

#[tokio::test]
async fn create_post_for_unknown_user_is_a_business_failure() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/post",
            r#"{"userId":42,"title":"T","category":"C","content":"b"}"#,
        ))
        .await
        .unwrap();

    // Declined but processed: envelope failure with a 200 status.
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["code"], "POST4001");
}

#[tokio::test]
async fn update_post_without_actor_header_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/post/1",
            r#"{"title":"T","category":"C","content":"b"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["code"], "HEADER4000");
}

// --- full lifecycle ---

#[tokio::test]
async fn post_lifecycle_with_ownership_checks() {
    use tower::Service;

    let mut app = app().into_service();

    // Two users; ids are allocated sequentially from 1.
    for body in [
        KIM,
        r#"{"name":"Lee","password":"pw","address":"Busan","email":"c@d.com","age":25}"#,
    ] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/api/users", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Kim (user 1) writes a post.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/post",
            r#"{"userId":1,"title":"T","category":"C","content":"b"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["isSuccess"], true);
    let post_id = body["result"]["id"].as_u64().unwrap();

    // The list row carries the author's name and a LocalDateTime stamp.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/api/post").body(String::new()).unwrap())
        .await
        .unwrap();
    let body = body_json(resp).await;
    let rows = body["result"]["postList"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["username"], "Kim");
    assert_eq!(rows[0]["postId"].as_u64(), Some(post_id));
    assert!(rows[0]["createdDate"].as_str().unwrap().contains('T'));

    // Lee (user 2) may not touch Kim's post.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request_as(
            "PUT",
            &format!("/api/post/{post_id}"),
            r#"{"title":"X","category":"C","content":"b"}"#,
            2,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["code"], "AUTH4003");

    // Kim may.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request_as(
            "PUT",
            &format!("/api/post/{post_id}"),
            r#"{"title":"X","category":"C","content":"b"}"#,
            1,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Anyone may comment.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request_as(
            "POST",
            &format!("/api/post/{post_id}/comment"),
            r#"{"content":"hi"}"#,
            2,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["content"], "hi");

    // Delete, then delete again — the second is an independent 404.
    for expected in [StatusCode::OK, StatusCode::NOT_FOUND] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(
                Request::builder()
                    .method("DELETE")
                    .uri(&format!("/api/post/{post_id}"))
                    .header("X-USER-ID", "1")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), expected);
    }
}
