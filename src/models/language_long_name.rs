use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Name of `short_name` written in `language_short_name`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "language_long_names")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub short_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub language_short_name: String,
    pub long_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::ShortName",
        to = "super::language::Column::ShortName",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Language,
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
