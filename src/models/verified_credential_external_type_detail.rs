use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One published version of a use case credential (template, validity window).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "verified_credential_external_type_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub verified_credential_type_id: i32,
    pub version: String,
    pub template: Option<String>,
    pub valid_from: String,
    pub expiry: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::verified_credential_type::Entity",
        from = "Column::VerifiedCredentialTypeId",
        to = "super::verified_credential_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    VerifiedCredentialType,
}

impl Related<super::verified_credential_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VerifiedCredentialType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
