mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

use civicos_server::router;
use common::TestApp;

#[tokio::test]
async fn health_pings_the_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "civicos");
}

#[tokio::test]
async fn preflight_reflects_origin() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/auth/login")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = router(app.state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert!(response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .contains("Authorization"));
}

#[tokio::test]
async fn unknown_route_uses_error_shape() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "not_found");
}
