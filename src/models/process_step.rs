use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{ProcessStepStatusId, ProcessStepTypeId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "process_steps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub process_step_type_id: ProcessStepTypeId,
    pub process_step_status_id: ProcessStepStatusId,
    pub process_id: Uuid,
    pub date_created: String,
    pub date_last_changed: Option<String>,
    pub message: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::process::Entity",
        from = "Column::ProcessId",
        to = "super::process::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Process,
}

impl Related<super::process::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Process.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
