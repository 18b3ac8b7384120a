use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_instances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub app_id: Uuid,
    pub iam_client_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app::Entity",
        from = "Column::AppId",
        to = "super::app::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    App,
    #[sea_orm(
        belongs_to = "super::iam_client::Entity",
        from = "Column::IamClientId",
        to = "super::iam_client::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    IamClient,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl Related<super::iam_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IamClient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
