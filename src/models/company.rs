use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub country_alpha2_code: Option<String>,
    pub date_created: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_ssi_detail::Entity")]
    CompanySsiDetails,
}

impl Related<super::company_ssi_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanySsiDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
