use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::ProcessTypeId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "processes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub process_type_id: ProcessTypeId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::process_step::Entity")]
    ProcessSteps,
}

impl Related<super::process_step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcessSteps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
