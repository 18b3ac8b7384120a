use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub short_name: String, // e.g. "de", "en"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::language_long_name::Entity")]
    LongNames,
}

impl Related<super::language_long_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LongNames.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
