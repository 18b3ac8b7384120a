use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::VerifiedCredentialTypeKindId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "verified_credential_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32, // VerifiedCredentialTypeId
    pub label: String,
    pub kind: VerifiedCredentialTypeKindId,
    pub use_case_id: Option<Uuid>, // only set for use case credentials
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::use_case::Entity",
        from = "Column::UseCaseId",
        to = "super::use_case::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    UseCase,
    #[sea_orm(has_many = "super::verified_credential_external_type_detail::Entity")]
    ExternalTypeDetails,
}

impl Related<super::use_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UseCase.def()
    }
}

impl Related<super::verified_credential_external_type_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExternalTypeDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
