use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member of Legislative Assembly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mlas")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub constituency: String,
    pub party: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,

    pub criminal_cases_count: Option<i32>,
    pub education: Option<String>,
    pub total_assets_in_rupees: Option<i64>,
    pub liabilities_in_rupees: Option<i64>,
    pub election_year: Option<i32>,
    pub data_source: Option<String>,

    /// Free-form history blob, stored as JSON text.
    pub mock_history: Option<String>,

    pub total_complaints: i32,
    pub resolved_complaints: i32,

    /// Unix timestamp (seconds).
    pub created_at: i64,

    /// Unix timestamp (seconds).
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::citizen::Entity> for Entity {
    fn to() -> RelationDef {
        super::citizen_mla::Relation::Citizen.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::citizen_mla::Relation::Mla.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
