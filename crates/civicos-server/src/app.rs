use axum::extract::State;
use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::error::ApiError;
use crate::handlers::{accounts, citizen, identity, issues, mla};
use crate::http;
use crate::state::AppState;

/// Build the full HTTP surface over a shared state.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/health", get(accounts::handle_health))
        .route("/signUp", post(accounts::handle_signup))
        .route("/login", post(identity::handle_login));

    let mla_routes = Router::new()
        .route("/addMla", post(mla::handle_add_mla))
        .route("/fetchMlas", get(mla::handle_fetch_mlas));

    let citizen_routes = Router::new()
        .route("/details", get(citizen::handle_details))
        .route(
            "/issue",
            get(issues::handle_list_issues).post(issues::handle_create_issue),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/mla", mla_routes)
        .nest("/api/v1/citizen", citizen_routes)
        .fallback(http::not_found)
        .layer(middleware::from_fn(http::cors))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| ApiError::internal("Database is unreachable", &e))?;

    Ok(Json(serde_json::json!({
        "ok": true,
        "service": "civicos",
    })))
}
