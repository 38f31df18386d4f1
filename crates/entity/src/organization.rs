use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Civic organization or authority (municipal body, utility, ...).
///
/// Serialized with camelCase keys, like the other entities.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    pub category: String,

    #[sea_orm(unique)]
    pub contact_email: String,

    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub constituency: String,

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
        super::citizen_organization::Relation::Citizen.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::citizen_organization::Relation::Organization.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
