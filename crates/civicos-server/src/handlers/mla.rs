use std::collections::HashSet;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use serde_json::Value;

use entity::mla;

use crate::account::{find_account, normalize_email, register_account, AccountKind};
use crate::error::ApiError;
use crate::state::AppState;
use crate::util::{non_blank, now_ts, uuid_v4};

const MLA_SIGNUP_DOMAIN: &str = "mla.com";

/// Bulk-import record for one MLA.
#[derive(Debug, Deserialize)]
pub struct MlaData {
    name: Option<String>,
    constituency: Option<String>,
    party: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    image: Option<String>,
    criminal_cases_count: Option<i32>,
    education: Option<String>,
    total_assets_in_rupees: Option<i64>,
    liabilities_in_rupees: Option<i64>,
    election_year: Option<i32>,
    data_source: Option<String>,
    mock_history: Option<Value>,
    rating: Option<f64>,
}

fn squash(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `<name>.<constituency>@<domain>`, lower-cased with all whitespace removed.
pub fn derive_mla_email(name: &str, constituency: &str, domain: &str) -> String {
    format!("{}.{}@{}", squash(name), squash(constituency), domain)
}

/// Pick `firstname@mla.com`, then `firstname1@mla.com`, ... skipping anything in `taken`.
///
/// The chosen address is recorded into `taken`.
pub fn unique_mla_email(full_name: &str, taken: &mut HashSet<String>) -> String {
    let first = full_name
        .split_whitespace()
        .next()
        .map(|part| {
            part.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|part| !part.is_empty())
        .unwrap_or_else(|| "mla".to_string());

    let mut candidate = format!("{first}@{MLA_SIGNUP_DOMAIN}");
    let mut counter = 1u32;
    while taken.contains(&candidate) {
        candidate = format!("{first}{counter}@{MLA_SIGNUP_DOMAIN}");
        counter += 1;
    }

    taken.insert(candidate.clone());
    candidate
}

pub async fn handle_add_mla(
    State(state): State<AppState>,
    payload: Result<Json<MlaData>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let invalid = || ApiError::BadRequest("Request body must be a valid MLA object".to_string());

    let Json(data) = payload.map_err(|_| invalid())?;
    let (Some(name), Some(constituency), Some(party)) = (
        non_blank(data.name),
        non_blank(data.constituency),
        non_blank(data.party),
    ) else {
        return Err(invalid());
    };

    let email = match non_blank(data.email) {
        Some(email) => normalize_email(&email),
        None => derive_mla_email(&name, &constituency, &state.config.mla_email_domain),
    };

    let txn = state.db.begin().await?;

    let existing = mla::Entity::find()
        .filter(mla::Column::Email.eq(&email))
        .one(&txn)
        .await?;

    let stored = match existing {
        // Present rows are left untouched.
        Some(row) => {
            tracing::debug!(mla_id = %row.id, "mla already present, nothing updated");
            row
        }
        None => {
            if find_account(&txn, &email).await?.is_some() {
                return Err(ApiError::Conflict(
                    "Email already registered to another account".to_string(),
                ));
            }

            let mock_history = data
                .mock_history
                .map(|v| serde_json::to_string(&v))
                .transpose()
                .map_err(|e| ApiError::internal("Failed to encode mock history", &e))?;

            let now = now_ts();
            let created = mla::ActiveModel {
                id: Set(uuid_v4()),
                name: Set(name),
                email: Set(email.clone()),
                constituency: Set(constituency),
                party: Set(Some(party)),
                phone: Set(non_blank(data.phone)),
                image: Set(non_blank(data.image)),
                rating: Set(data.rating),
                criminal_cases_count: Set(data.criminal_cases_count),
                education: Set(non_blank(data.education)),
                total_assets_in_rupees: Set(data.total_assets_in_rupees),
                liabilities_in_rupees: Set(data.liabilities_in_rupees),
                election_year: Set(data.election_year),
                data_source: Set(non_blank(data.data_source)),
                mock_history: Set(mock_history),
                total_complaints: Set(0),
                resolved_complaints: Set(0),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&txn)
            .await?;

            register_account(&txn, &email, AccountKind::Mla, &created.id, now).await?;
            tracing::info!(mla_id = %created.id, "mla added");
            created
        }
    };

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "MLA added successfully",
            "mla": stored,
        })),
    ))
}

pub async fn handle_fetch_mlas(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let mlas = mla::Entity::find()
        .order_by_asc(mla::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(serde_json::json!({
        "count": mlas.len(),
        "mlas": mlas,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_email_strips_whitespace_and_case() {
        assert_eq!(
            derive_mla_email("Madhavaram  Krishna Rao", "Kukat pally", "civicos.in"),
            "madhavaramkrishnarao.kukatpally@civicos.in"
        );
    }

    #[test]
    fn unique_email_counts_up_on_collision() {
        let mut taken = HashSet::new();
        assert_eq!(unique_mla_email("Ravi Kumar", &mut taken), "ravi@mla.com");
        assert_eq!(unique_mla_email("Ravi Teja", &mut taken), "ravi1@mla.com");
        assert_eq!(unique_mla_email("ravi", &mut taken), "ravi2@mla.com");
        assert!(taken.contains("ravi1@mla.com"));
    }

    #[test]
    fn unique_email_falls_back_for_blank_names() {
        let mut taken = HashSet::new();
        assert_eq!(unique_mla_email("   ", &mut taken), "mla@mla.com");
        assert_eq!(unique_mla_email("", &mut taken), "mla1@mla.com");
    }
}
