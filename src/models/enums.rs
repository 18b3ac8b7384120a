//! Closed id enumerations shared by the entities.
//!
//! Each enum is stored as its integer id; the serde names match the labels the
//! portal exposes over its APIs.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessTypeId {
    #[sea_orm(num_value = 1)]
    ApplicationChecklist,
    #[sea_orm(num_value = 3)]
    OfferSubscription,
    #[sea_orm(num_value = 4)]
    PartnerRegistration,
    #[sea_orm(num_value = 5)]
    IdentityProviderProvisioning,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStepTypeId {
    // application checklist
    #[sea_orm(num_value = 1)]
    VerifyRegistration,
    #[sea_orm(num_value = 2)]
    CreateBusinessPartnerNumberPush,
    #[sea_orm(num_value = 8)]
    StartClearingHouse,
    #[sea_orm(num_value = 12)]
    CreateIdentityWallet,
    // offer subscription
    #[sea_orm(num_value = 100)]
    TriggerProvider,
    #[sea_orm(num_value = 101)]
    SingleInstanceSubscriptionDetailsCreation,
    #[sea_orm(num_value = 102)]
    OfferSubscriptionClientCreation,
    #[sea_orm(num_value = 104)]
    ActivateSubscription,
    // partner registration
    #[sea_orm(num_value = 200)]
    SyncUserProvider,
    // identity provider provisioning
    #[sea_orm(num_value = 300)]
    DeleteCentralIdentityProvider,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStepStatusId {
    #[sea_orm(num_value = 1)]
    Todo,
    #[sea_orm(num_value = 2)]
    Done,
    #[sea_orm(num_value = 3)]
    Skipped,
    #[sea_orm(num_value = 4)]
    Failed,
    #[sea_orm(num_value = 5)]
    Duplicate,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UniqueIdentifierId {
    #[sea_orm(num_value = 1)]
    CommercialRegNumber,
    #[sea_orm(num_value = 2)]
    VatId,
    #[sea_orm(num_value = 3)]
    LeiCode,
    #[sea_orm(num_value = 4)]
    Viesid,
    #[sea_orm(num_value = 5)]
    Eori,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifiedCredentialTypeId {
    #[sea_orm(num_value = 1)]
    TraceabilityFramework,
    #[sea_orm(num_value = 2)]
    PcfFramework,
    #[sea_orm(num_value = 3)]
    BehaviorTwinFramework,
    #[sea_orm(num_value = 4)]
    DismantlerCertificate,
    #[sea_orm(num_value = 5)]
    CircularEconomy,
    #[sea_orm(num_value = 6)]
    QualityFramework,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifiedCredentialTypeKindId {
    #[sea_orm(num_value = 1)]
    UseCase,
    #[sea_orm(num_value = 2)]
    Certificate,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySsiDetailStatusId {
    #[sea_orm(num_value = 1)]
    Pending,
    #[sea_orm(num_value = 2)]
    Active,
    #[sea_orm(num_value = 3)]
    Inactive,
}
