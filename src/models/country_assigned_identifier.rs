use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "country_assigned_identifiers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub country_alpha2_code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_identifier_id: i32, // UniqueIdentifierId
    pub bpdm_identifier_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryAlpha2Code",
        to = "super::country::Column::Alpha2Code",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Country,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
