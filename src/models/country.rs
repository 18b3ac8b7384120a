use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub alpha2_code: String, // ISO 3166-1 alpha-2, upper case
    pub alpha3_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::country_assigned_identifier::Entity")]
    CountryAssignedIdentifiers,
}

impl Related<super::country_assigned_identifier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CountryAssignedIdentifiers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
