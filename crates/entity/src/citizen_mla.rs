use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Citizen to MLA link (citizens_mlas), recorded once at signup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "citizens_mlas")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub citizen_id: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub mla_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::citizen::Entity",
        from = "Column::CitizenId",
        to = "super::citizen::Column::Id",
        on_delete = "Cascade"
    )]
    Citizen,
    #[sea_orm(
        belongs_to = "super::mla::Entity",
        from = "Column::MlaId",
        to = "super::mla::Column::Id",
        on_delete = "Cascade"
    )]
    Mla,
}

impl ActiveModelBehavior for ActiveModel {}
