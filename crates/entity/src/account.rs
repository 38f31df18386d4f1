use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account directory: one row per login email, tagged with the kind decided at creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,

    pub kind: AccountKind,

    /// Id of the citizens / mlas / organizations row this account logs into.
    pub subject_id: String,

    /// Unix timestamp (seconds).
    pub created_at: i64,
}

/// Account kind; the stored value doubles as the token role claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[sea_orm(string_value = "citizen")]
    Citizen,
    #[sea_orm(string_value = "mla")]
    Mla,
    #[sea_orm(string_value = "authority")]
    #[serde(rename = "authority")]
    Organization,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
