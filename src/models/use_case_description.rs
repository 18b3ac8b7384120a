use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "use_case_descriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub use_case_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub language_short_name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::use_case::Entity",
        from = "Column::UseCaseId",
        to = "super::use_case::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UseCase,
}

impl Related<super::use_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UseCase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
