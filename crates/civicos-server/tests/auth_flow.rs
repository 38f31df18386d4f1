mod common;

use axum::http::{Method, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use civicos_server::account::{register_account, AccountKind};
use civicos_server::error::ApiError;
use civicos_server::jwt;
use civicos_server::util::now_ts;
use common::{TestApp, TEST_JWT_SECRET};
use entity::{account, citizen, mla, organization};

#[tokio::test]
async fn signup_with_missing_field_creates_nothing() {
    let app = TestApp::new().await;

    let payloads = [
        json!({ "email": "a@example.com", "password": "x", "constituency": "Kukatpally" }),
        json!({ "name": "A", "password": "x", "constituency": "Kukatpally" }),
        json!({ "name": "A", "email": "a@example.com", "constituency": "Kukatpally" }),
        json!({ "name": "A", "email": "a@example.com", "password": "x" }),
        json!({ "name": "  ", "email": "a@mla.com", "password": "x", "constituency": "Kukatpally" }),
    ];

    for payload in payloads {
        let (status, body) = app.post("/api/v1/auth/signUp", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "bad_request");
    }

    assert_eq!(citizen::Entity::find().count(&app.state.db).await.unwrap(), 0);
    assert_eq!(mla::Entity::find().count(&app.state.db).await.unwrap(), 0);
    assert_eq!(account::Entity::find().count(&app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn signup_rejects_malformed_json() {
    let app = TestApp::new().await;

    let (status, body) = app
        .call(Method::POST, "/api/v1/auth/signUp", Some(json!("not an object")), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_json");
}

#[tokio::test]
async fn mla_suffix_signup_creates_mla_without_password() {
    let app = TestApp::new().await;

    let body = app.signup("A", "a@mla.com", "x", "Kukatpally").await;
    assert_eq!(body["userType"], "MLA");
    assert_eq!(body["message"], "MLA registered successfully");
    assert_eq!(body["data"]["email"], "a@mla.com");
    assert!(body["data"].get("password").is_none());

    let stored = mla::Entity::find().all(&app.state.db).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "a@mla.com");
    assert_eq!(stored[0].constituency, "Kukatpally");
    assert_eq!(citizen::Entity::find().count(&app.state.db).await.unwrap(), 0);

    let entry = account::Entity::find_by_id("a@mla.com".to_string())
        .one(&app.state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.kind, AccountKind::Mla);
    assert_eq!(entry.subject_id, stored[0].id);
}

#[tokio::test]
async fn organization_suffixes_create_organizations() {
    let app = TestApp::new().await;

    let body = app.signup("Water Board", "water@org.com", "x", "Kukatpally").await;
    assert_eq!(body["userType"], "Organization");
    assert_eq!(body["data"]["category"], "General");
    assert_eq!(body["data"]["contactEmail"], "water@org.com");
    assert_eq!(body["data"]["totalComplaints"], 0);
    assert!(body["data"]["createdAt"].is_i64());
    assert!(body["data"].get("contact_email").is_none());

    app.signup("Roads Dept", "roads@authority.com", "x", "Kukatpally").await;
    assert_eq!(organization::Entity::find().count(&app.state.db).await.unwrap(), 2);
}

#[tokio::test]
async fn citizen_links_are_a_snapshot_of_signup_time() {
    let app = TestApp::new().await;

    app.signup("Zed Rao", "zed@mla.com", "x", "Kukatpally").await;
    app.signup("Anil Kumar", "anil@mla.com", "x", "Kukatpally").await;
    app.signup("Other Mla", "other@mla.com", "x", "Secunderabad").await;
    app.signup("Water Board", "water@org.com", "x", "Kukatpally").await;

    let body = app
        .signup("Asha", "Asha@Example.com ", "s3cret!", "Kukatpally")
        .await;
    assert_eq!(body["userType"], "Citizen");
    assert_eq!(body["data"]["email"], "asha@example.com");
    assert_eq!(
        body["data"]["linked_MLAs"],
        json!([{ "name": "Anil Kumar" }, { "name": "Zed Rao" }])
    );
    assert_eq!(
        body["data"]["linked_Organizations"],
        json!([{ "name": "Water Board" }])
    );

    // Joins after the citizen exist are not picked up.
    app.signup("Late Comer", "late@mla.com", "x", "Kukatpally").await;

    let (status, login) = app.login("asha@example.com", Some("s3cret!")).await;
    assert_eq!(status, StatusCode::OK);
    let linked = login["citizen"]["linked_MLAs"].as_array().unwrap();
    assert_eq!(linked.len(), 2);
    assert!(linked.iter().all(|m| m["name"] != "Late Comer"));
}

#[tokio::test]
async fn citizen_login_token_carries_citizen_role() {
    let app = TestApp::new().await;
    app.signup("Asha", "asha@example.com", "s3cret!", "Kukatpally").await;

    let (status, body) = app.login("asha@example.com", Some("s3cret!")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["role"], "citizen");

    let token = body["token"].as_str().unwrap();
    let claims = jwt::verify_token(TEST_JWT_SECRET.as_bytes(), token, now_ts()).unwrap();
    assert_eq!(claims.role, AccountKind::Citizen);
    assert_eq!(claims.email, "asha@example.com");
    assert_eq!(claims.user_id, body["citizen"]["id"].as_str().unwrap());
    assert_eq!(claims.exp - claims.iat, jwt::TOKEN_TTL_SECS);
}

#[tokio::test]
async fn login_with_wrong_or_missing_password() {
    let app = TestApp::new().await;
    app.signup("Asha", "asha@example.com", "s3cret!", "Kukatpally").await;

    let (status, body) = app.login("asha@example.com", Some("nope")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid password");

    let (status, _) = app.login("asha@example.com", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/v1/auth/login", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_unknown_email_is_not_found_for_every_suffix() {
    let app = TestApp::new().await;

    for email in ["ghost@mla.com", "ghost@org.com", "ghost@authority.com", "ghost@example.com"] {
        let (status, body) = app.login(email, Some("whatever")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{email}");
        assert_eq!(body["error"]["code"], "not_found");
    }
}

#[tokio::test]
async fn mla_and_authority_login_need_no_password() {
    let app = TestApp::new().await;
    app.signup("A", "a@mla.com", "x", "Kukatpally").await;
    app.signup("Water Board", "water@org.com", "x", "Kukatpally").await;

    let (status, body) = app.login("a@mla.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "mla");
    assert_eq!(body["message"], "MLA login successful");
    assert_eq!(body["user"]["totalComplaints"], 0);

    let (status, body) = app.login("water@org.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "authority");
    assert_eq!(body["user"]["category"], "General");

    let claims = jwt::verify_token(
        TEST_JWT_SECRET.as_bytes(),
        body["token"].as_str().unwrap(),
        now_ts(),
    )
    .unwrap();
    assert_eq!(claims.role, AccountKind::Organization);
}

#[tokio::test]
async fn duplicate_signup_is_a_conflict() {
    let app = TestApp::new().await;
    app.signup("Asha", "asha@example.com", "s3cret!", "Kukatpally").await;

    let (status, body) = app
        .post(
            "/api/v1/auth/signUp",
            json!({
                "name": "Asha Again",
                "email": "ASHA@example.com",
                "password": "other",
                "constituency": "Kukatpally",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Citizen already exists");
    assert_eq!(citizen::Entity::find().count(&app.state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn auth_health_route() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/auth/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Auth route up and running");
}

#[tokio::test]
async fn authority_suffix_account_logs_in_as_authority() {
    let app = TestApp::new().await;
    let signup = app
        .signup("Roads Dept", "roads@authority.com", "x", "Kukatpally")
        .await;
    assert_eq!(signup["userType"], "Organization");

    let (status, body) = app.login("roads@authority.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Authority login successful");
    assert_eq!(body["role"], "authority");
    assert_eq!(body["user"]["email"], "roads@authority.com");
    assert_eq!(body["user"]["name"], "Roads Dept");
}

#[tokio::test]
async fn duplicate_directory_insert_maps_to_conflict() {
    let app = TestApp::new().await;

    register_account(&app.state.db, "dup@example.com", AccountKind::Citizen, "c1", now_ts())
        .await
        .unwrap();
    let err = register_account(&app.state.db, "dup@example.com", AccountKind::Mla, "m1", now_ts())
        .await
        .unwrap_err();

    let api_err = ApiError::from(err);
    assert!(matches!(api_err, ApiError::Conflict(_)), "{api_err:?}");
    assert_eq!(api_err.status_code(), StatusCode::CONFLICT);
    assert_eq!(api_err.code(), "conflict");
}
