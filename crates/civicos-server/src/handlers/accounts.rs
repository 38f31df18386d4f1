use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use serde_json::Value;

use entity::{citizen, citizen_mla, citizen_organization, mla, organization};

use crate::account::{
    classify_signup_email, find_account, normalize_email, register_account, user_type_label,
    AccountKind,
};
use crate::crypto;
use crate::error::ApiError;
use crate::state::AppState;
use crate::util::{non_blank, now_ts, uuid_v4};

/// Category given to organizations that register themselves.
pub const DEFAULT_ORGANIZATION_CATEGORY: &str = "General";

#[derive(Debug, Deserialize)]
pub struct SignupData {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    constituency: Option<String>,
}

struct NewAccount {
    name: String,
    email: String,
    constituency: String,
}

pub async fn handle_health() -> Json<Value> {
    Json(serde_json::json!({ "message": "Auth route up and running" }))
}

pub async fn handle_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupData>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(payload) = payload?;

    let name = non_blank(payload.name);
    let email = non_blank(payload.email);
    let password = payload.password.filter(|p| !p.is_empty());
    let constituency = non_blank(payload.constituency);

    let (Some(name), Some(email), Some(password), Some(constituency)) =
        (name, email, password, constituency)
    else {
        return Err(ApiError::BadRequest(
            "All fields (name, email, password, constituency) are required".to_string(),
        ));
    };

    let email = normalize_email(&email);
    let kind = classify_signup_email(&email);
    let account = NewAccount {
        name,
        email,
        constituency,
    };

    let data = match kind {
        // MLAs and organizations have no credential; the password is dropped.
        AccountKind::Mla => register_mla(&state.db, account).await?,
        AccountKind::Organization => register_organization(&state.db, account).await?,
        AccountKind::Citizen => {
            let hashed = crypto::hash_password(password)
                .await
                .map_err(|e| ApiError::internal("Failed to hash password", &e))?;
            register_citizen(&state.db, account, hashed).await?
        }
    };

    let label = user_type_label(kind);
    tracing::info!(user_type = label, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("{label} registered successfully"),
            "userType": label,
            "data": data,
        })),
    ))
}

async fn register_mla(db: &DatabaseConnection, account: NewAccount) -> Result<Value, ApiError> {
    let now = now_ts();
    let txn = db.begin().await?;

    let existing = mla::Entity::find()
        .filter(mla::Column::Email.eq(&account.email))
        .one(&txn)
        .await?;
    if existing.is_some() || find_account(&txn, &account.email).await?.is_some() {
        return Err(ApiError::Conflict("MLA already exists".to_string()));
    }

    let created = mla::ActiveModel {
        id: Set(uuid_v4()),
        name: Set(account.name),
        email: Set(account.email.clone()),
        constituency: Set(account.constituency),
        total_complaints: Set(0),
        resolved_complaints: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    register_account(&txn, &account.email, AccountKind::Mla, &created.id, now).await?;
    txn.commit().await?;

    Ok(serde_json::json!(created))
}

async fn register_organization(
    db: &DatabaseConnection,
    account: NewAccount,
) -> Result<Value, ApiError> {
    let now = now_ts();
    let txn = db.begin().await?;

    let existing = organization::Entity::find()
        .filter(organization::Column::ContactEmail.eq(&account.email))
        .one(&txn)
        .await?;
    if existing.is_some() || find_account(&txn, &account.email).await?.is_some() {
        return Err(ApiError::Conflict("Organization already exists".to_string()));
    }

    let created = organization::ActiveModel {
        id: Set(uuid_v4()),
        name: Set(account.name),
        category: Set(DEFAULT_ORGANIZATION_CATEGORY.to_string()),
        contact_email: Set(account.email.clone()),
        constituency: Set(account.constituency),
        total_complaints: Set(0),
        resolved_complaints: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    register_account(
        &txn,
        &account.email,
        AccountKind::Organization,
        &created.id,
        now,
    )
    .await?;
    txn.commit().await?;

    Ok(serde_json::json!(created))
}

/// Create a citizen and record its links to the constituency's MLAs and organizations.
///
/// The links are a snapshot taken here; later MLAs in the same constituency are not added.
async fn register_citizen(
    db: &DatabaseConnection,
    account: NewAccount,
    hashed_password: String,
) -> Result<Value, ApiError> {
    let now = now_ts();
    let txn = db.begin().await?;

    let existing = citizen::Entity::find()
        .filter(citizen::Column::Email.eq(&account.email))
        .one(&txn)
        .await?;
    if existing.is_some() || find_account(&txn, &account.email).await?.is_some() {
        return Err(ApiError::Conflict("Citizen already exists".to_string()));
    }

    let mlas = mla::Entity::find()
        .filter(mla::Column::Constituency.eq(&account.constituency))
        .order_by_asc(mla::Column::Name)
        .all(&txn)
        .await?;
    let orgs = organization::Entity::find()
        .filter(organization::Column::Constituency.eq(&account.constituency))
        .order_by_asc(organization::Column::Name)
        .all(&txn)
        .await?;

    let created = citizen::ActiveModel {
        id: Set(uuid_v4()),
        name: Set(account.name),
        email: Set(account.email.clone()),
        password: Set(hashed_password),
        constituency: Set(account.constituency),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    if !mlas.is_empty() {
        citizen_mla::Entity::insert_many(mlas.iter().map(|m| citizen_mla::ActiveModel {
            citizen_id: Set(created.id.clone()),
            mla_id: Set(m.id.clone()),
        }))
        .exec_without_returning(&txn)
        .await?;
    }
    if !orgs.is_empty() {
        citizen_organization::Entity::insert_many(orgs.iter().map(|o| {
            citizen_organization::ActiveModel {
                citizen_id: Set(created.id.clone()),
                organization_id: Set(o.id.clone()),
            }
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    register_account(&txn, &created.email, AccountKind::Citizen, &created.id, now).await?;
    txn.commit().await?;

    tracing::debug!(
        citizen_id = %created.id,
        mlas = mlas.len(),
        organizations = orgs.len(),
        "linked citizen to constituency"
    );

    Ok(serde_json::json!({
        "id": created.id,
        "name": created.name,
        "email": created.email,
        "constituency": created.constituency,
        "linked_MLAs": mlas.iter().map(|m| serde_json::json!({ "name": m.name })).collect::<Vec<_>>(),
        "linked_Organizations": orgs.iter().map(|o| serde_json::json!({ "name": o.name })).collect::<Vec<_>>(),
    }))
}
