use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Civic issue reported by a citizen.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "issues")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,
    pub description: String,
    pub category: String,
    pub severity: String,

    /// PENDING, IN_PROGRESS or RESOLVED.
    pub status: String,

    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub media_url: Option<String>,

    pub citizen_id: String,
    pub mla_id: Option<String>,
    pub organization_id: Option<String>,

    /// Unix timestamp (seconds).
    pub created_at: i64,

    /// Unix timestamp (seconds).
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
