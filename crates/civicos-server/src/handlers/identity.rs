use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use sea_orm::EntityTrait;
use serde::Deserialize;
use serde_json::Value;

use entity::{account, citizen, mla, organization};

use crate::account::{find_account, normalize_email, AccountKind};
use crate::crypto;
use crate::error::ApiError;
use crate::handlers::auth::sign_session;
use crate::handlers::citizen::linked_representatives;
use crate::state::AppState;
use crate::util::non_blank;

#[derive(Debug, Deserialize)]
pub struct LoginData {
    email: Option<String>,
    password: Option<String>,
}

/// Resolve the stored account kind for `email` and log in through that branch.
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginData>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;

    let Some(email) = non_blank(payload.email) else {
        return Err(ApiError::BadRequest("Email is required".to_string()));
    };
    let email = normalize_email(&email);

    let Some(account) = find_account(&state.db, &email).await? else {
        return Err(ApiError::NotFound("Account not found".to_string()));
    };

    let body = match account.kind {
        AccountKind::Mla => mla_login(&state, &account).await?,
        AccountKind::Organization => authority_login(&state, &account).await?,
        AccountKind::Citizen => citizen_login(&state, &account, payload.password).await?,
    };

    tracing::info!(role = ?account.kind, "login successful");
    Ok(Json(body))
}

// MLA and authority accounts carry no credential: knowing the email is enough.
async fn mla_login(state: &AppState, account: &account::Model) -> Result<Value, ApiError> {
    let Some(mla) = mla::Entity::find_by_id(account.subject_id.clone())
        .one(&state.db)
        .await?
    else {
        return Err(ApiError::NotFound("MLA not found".to_string()));
    };

    let token = sign_session(state, AccountKind::Mla, &mla.id, &mla.email)?;

    Ok(serde_json::json!({
        "message": "MLA login successful",
        "token": token,
        "role": AccountKind::Mla,
        "user": {
            "id": mla.id,
            "name": mla.name,
            "email": mla.email,
            "constituency": mla.constituency,
            "party": mla.party,
            "phone": mla.phone,
            "rating": mla.rating,
            "totalComplaints": mla.total_complaints,
            "resolvedComplaints": mla.resolved_complaints,
        },
    }))
}

async fn authority_login(state: &AppState, account: &account::Model) -> Result<Value, ApiError> {
    let Some(org) = organization::Entity::find_by_id(account.subject_id.clone())
        .one(&state.db)
        .await?
    else {
        return Err(ApiError::NotFound("Authority not found".to_string()));
    };

    let token = sign_session(state, AccountKind::Organization, &org.id, &org.contact_email)?;

    Ok(serde_json::json!({
        "message": "Authority login successful",
        "token": token,
        "role": AccountKind::Organization,
        "user": {
            "id": org.id,
            "name": org.name,
            "email": org.contact_email,
            "constituency": org.constituency,
            "category": org.category,
            "phone": org.contact_phone,
            "address": org.address,
            "totalComplaints": org.total_complaints,
            "resolvedComplaints": org.resolved_complaints,
        },
    }))
}

async fn citizen_login(
    state: &AppState,
    account: &account::Model,
    password: Option<String>,
) -> Result<Value, ApiError> {
    let Some(password) = password.filter(|p| !p.is_empty()) else {
        return Err(ApiError::BadRequest("Password is required".to_string()));
    };

    let Some(citizen) = citizen::Entity::find_by_id(account.subject_id.clone())
        .one(&state.db)
        .await?
    else {
        return Err(ApiError::NotFound("Citizen not found".to_string()));
    };

    let valid = crypto::verify_password(password, citizen.password.clone())
        .await
        .map_err(|e| ApiError::internal("Failed to verify password", &e))?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    let (mlas, orgs) = linked_representatives(&state.db, &citizen).await?;
    let token = sign_session(state, AccountKind::Citizen, &citizen.id, &citizen.email)?;

    Ok(serde_json::json!({
        "message": "Login successful",
        "token": token,
        "role": AccountKind::Citizen,
        "citizen": {
            "id": citizen.id,
            "name": citizen.name,
            "email": citizen.email,
            "constituency": citizen.constituency,
            "linked_MLAs": mlas
                .iter()
                .map(|m| serde_json::json!({ "id": m.id, "name": m.name, "party": m.party }))
                .collect::<Vec<_>>(),
            "linked_Organizations": orgs
                .iter()
                .map(|o| serde_json::json!({ "id": o.id, "name": o.name, "category": o.category }))
                .collect::<Vec<_>>(),
        },
    }))
}
