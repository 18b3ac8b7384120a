pub mod app;
pub mod app_instance;
pub mod company;
pub mod company_ssi_detail;
pub mod country;
pub mod country_assigned_identifier;
pub mod enums;
pub mod iam_client;
pub mod language;
pub mod language_long_name;
pub mod process;
pub mod process_step;
pub mod unique_identifier;
pub mod use_case;
pub mod use_case_description;
pub mod verified_credential_external_type_detail;
pub mod verified_credential_type;

pub use enums::{
    CompanySsiDetailStatusId, ProcessStepStatusId, ProcessStepTypeId, ProcessTypeId,
    UniqueIdentifierId, VerifiedCredentialTypeId, VerifiedCredentialTypeKindId,
};
