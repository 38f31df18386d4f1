use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Citizen account.
///
/// The password column holds a bcrypt hash and is never serialized.
/// Keys are camelCase, like the other entities.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "citizens")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    #[serde(skip_serializing)]
    pub password: String,

    pub constituency: String,

    /// Unix timestamp (seconds).
    pub created_at: i64,

    /// Unix timestamp (seconds).
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::mla::Entity> for Entity {
    fn to() -> RelationDef {
        super::citizen_mla::Relation::Mla.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::citizen_mla::Relation::Citizen.def().rev())
    }
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        super::citizen_organization::Relation::Organization.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::citizen_organization::Relation::Citizen.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
