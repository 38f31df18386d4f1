use axum::extract::State;
use axum::Json;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryOrder};
use serde_json::Value;

use entity::{citizen, mla, organization};

use crate::account::AccountKind;
use crate::error::ApiError;
use crate::handlers::auth::Authenticated;
use crate::state::AppState;

/// MLAs and organizations recorded for `citizen` at signup, ordered by name.
pub async fn linked_representatives<C: ConnectionTrait>(
    conn: &C,
    citizen: &citizen::Model,
) -> Result<(Vec<mla::Model>, Vec<organization::Model>), DbErr> {
    let mlas = citizen
        .find_related(mla::Entity)
        .order_by_asc(mla::Column::Name)
        .all(conn)
        .await?;
    let orgs = citizen
        .find_related(organization::Entity)
        .order_by_asc(organization::Column::Name)
        .all(conn)
        .await?;
    Ok((mlas, orgs))
}

pub async fn handle_details(
    State(state): State<AppState>,
    auth: Authenticated,
) -> Result<Json<Value>, ApiError> {
    let claims = auth.require(AccountKind::Citizen)?;

    let Some(citizen) = citizen::Entity::find_by_id(claims.user_id.clone())
        .one(&state.db)
        .await?
    else {
        return Err(ApiError::NotFound("Citizen not found".to_string()));
    };

    let (mlas, orgs) = linked_representatives(&state.db, &citizen).await?;

    Ok(Json(serde_json::json!({
        "citizen": {
            "id": citizen.id,
            "name": citizen.name,
            "email": citizen.email,
            "constituency": citizen.constituency,
            "linked_MLAs": mlas.iter().map(|m| serde_json::json!({
                "id": m.id,
                "name": m.name,
                "party": m.party,
                "email": m.email,
                "phone": m.phone,
                "rating": m.rating,
            })).collect::<Vec<_>>(),
            "linked_Organizations": orgs.iter().map(|o| serde_json::json!({
                "id": o.id,
                "name": o.name,
                "category": o.category,
                "contact_email": o.contact_email,
                "contact_phone": o.contact_phone,
                "address": o.address,
            })).collect::<Vec<_>>(),
        }
    })))
}
