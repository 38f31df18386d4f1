use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use serde_json::Value;

use entity::{citizen, issue, mla, organization};

use crate::account::AccountKind;
use crate::error::ApiError;
use crate::handlers::auth::Authenticated;
use crate::mail::issue_created_email;
use crate::state::AppState;
use crate::util::{non_blank, now_ts, uuid_v4};

pub const STATUS_PENDING: &str = "PENDING";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueData {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    #[serde(alias = "priority")]
    severity: Option<String>,
    location: Option<String>,
    citizen_id: Option<String>,
    mla_id: Option<String>,
    organization_id: Option<String>,
    media_url: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ApiError> {
    if latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        return Err(ApiError::BadRequest("latitude must be between -90 and 90".to_string()));
    }
    if longitude.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
        return Err(ApiError::BadRequest("longitude must be between -180 and 180".to_string()));
    }
    Ok(())
}

pub async fn handle_create_issue(
    State(state): State<AppState>,
    auth: Authenticated,
    payload: Result<Json<IssueData>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let claims = auth.require(AccountKind::Citizen)?;
    let Json(data) = payload?;

    let (Some(title), Some(description), Some(category), Some(severity), Some(location)) = (
        non_blank(data.title),
        non_blank(data.description),
        non_blank(data.category),
        non_blank(data.severity),
        non_blank(data.location),
    ) else {
        return Err(ApiError::BadRequest(
            "title, description, category, severity and location are required".to_string(),
        ));
    };
    check_coordinates(data.latitude, data.longitude)?;

    if let Some(citizen_id) = non_blank(data.citizen_id) {
        if citizen_id != claims.user_id {
            return Err(ApiError::Forbidden(
                "Cannot report an issue on behalf of another citizen".to_string(),
            ));
        }
    }

    let Some(citizen) = citizen::Entity::find_by_id(claims.user_id.clone())
        .one(&state.db)
        .await?
    else {
        return Err(ApiError::NotFound("Citizen not found".to_string()));
    };

    let mla_id = non_blank(data.mla_id);
    if let Some(id) = &mla_id {
        if mla::Entity::find_by_id(id.clone()).one(&state.db).await?.is_none() {
            return Err(ApiError::NotFound("MLA not found".to_string()));
        }
    }

    let organization_id = non_blank(data.organization_id);
    if let Some(id) = &organization_id {
        if organization::Entity::find_by_id(id.clone())
            .one(&state.db)
            .await?
            .is_none()
        {
            return Err(ApiError::NotFound("Organization not found".to_string()));
        }
    }

    let now = now_ts();
    let created = issue::ActiveModel {
        id: Set(uuid_v4()),
        title: Set(title),
        description: Set(description),
        category: Set(category),
        severity: Set(severity),
        status: Set(STATUS_PENDING.to_string()),
        location: Set(location),
        latitude: Set(data.latitude),
        longitude: Set(data.longitude),
        media_url: Set(non_blank(data.media_url)),
        citizen_id: Set(citizen.id.clone()),
        mla_id: Set(mla_id),
        organization_id: Set(organization_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    tracing::info!(issue_id = %created.id, citizen_id = %citizen.id, "issue created");

    notify_citizen(&state, &citizen, &created).await;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Issue created successfully",
            "issue": created,
        })),
    ))
}

/// Best-effort confirmation mail; failures never reach the client.
async fn notify_citizen(state: &AppState, citizen: &citizen::Model, issue: &issue::Model) {
    let Some(mailer) = state.mailer.as_ref() else {
        tracing::info!(issue_id = %issue.id, "mailer not configured, skipping issue email");
        return;
    };

    let message = issue_created_email(citizen, issue, &state.config.frontend_url);
    match mailer.send(&message).await {
        Ok(()) => tracing::info!(issue_id = %issue.id, "issue email sent"),
        Err(err) => tracing::warn!(issue_id = %issue.id, error = %err, "failed to send issue email"),
    }
}

pub async fn handle_list_issues(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<Value>, ApiError> {
    let claims = auth.require(AccountKind::Citizen)?;

    let issues = issue::Entity::find()
        .filter(issue::Column::CitizenId.eq(&claims.user_id))
        .order_by_desc(issue::Column::CreatedAt)
        .order_by_desc(issue::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(serde_json::json!({
        "count": issues.len(),
        "issues": issues,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_out_of_range_are_rejected() {
        assert!(check_coordinates(Some(12.9), Some(77.6)).is_ok());
        assert!(check_coordinates(None, None).is_ok());
        assert!(matches!(
            check_coordinates(Some(91.0), None),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            check_coordinates(None, Some(-180.5)),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn priority_is_accepted_for_severity() {
        let data: IssueData = serde_json::from_value(serde_json::json!({
            "title": "Pothole",
            "priority": "HIGH",
            "mlaId": "m1",
        }))
        .unwrap();
        assert_eq!(data.severity.as_deref(), Some("HIGH"));
        assert_eq!(data.mla_id.as_deref(), Some("m1"));
    }
}
