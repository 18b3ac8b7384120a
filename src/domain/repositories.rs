//! Repository trait definitions
//!
//! These traits define the contract for data access. Every call receives the
//! unit of work explicitly: `&mut PortalDbContext` for staging operations,
//! `&PortalDbContext` for reads. Staging never touches the database; nothing
//! is durable until [`PortalDbContext::save_changes`] runs.
//!
//! Streaming reads return a [`BoxStream`] that issues one query per pulled
//! element, so it is forward-only, consumed once, and sees store changes made
//! while it is being drained.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::Serialize;
use uuid::Uuid;

use super::DomainError;
use crate::infrastructure::context::PortalDbContext;
use crate::models::enums::{
    CompanySsiDetailStatusId, ProcessStepStatusId, ProcessStepTypeId, ProcessTypeId,
    UniqueIdentifierId, VerifiedCredentialTypeId,
};

/// A staged or loaded app instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInstance {
    pub id: Uuid,
    pub app_id: Uuid,
    pub iam_client_id: Uuid,
}

/// Identity-provider client registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IamClient {
    pub id: Uuid,
    pub client_client_id: String,
}

/// Repository trait for AppInstance entity
#[async_trait]
pub trait AppInstanceRepository: Send + Sync {
    /// Stage a new app instance linking an app to an identity-provider client.
    /// Neither id is checked; the database enforces them on commit.
    fn create_app_instance(
        &self,
        context: &mut PortalDbContext,
        app_id: Uuid,
        iam_client_id: Uuid,
    ) -> AppInstance;

    /// Stage removal of an app instance by id
    fn remove_app_instance(&self, context: &mut PortalDbContext, app_instance_id: Uuid);

    /// Whether any committed instance exists for the app
    async fn check_instance_exists_for_app(
        &self,
        context: &PortalDbContext,
        app_id: Uuid,
    ) -> Result<bool, DomainError>;
}

/// Repository trait for IamClient entity
pub trait ClientRepository: Send + Sync {
    /// Stage a new client carrying the external `client_id`
    fn create_client(&self, context: &mut PortalDbContext, client_id: &str) -> IamClient;

    /// Stage removal of a client by id without loading it first
    fn remove_client(&self, context: &mut PortalDbContext, id: Uuid);
}

/// SSI detail of a company for one credential (version)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySsiDetailTransferData {
    pub id: Uuid,
    pub status: CompanySsiDetailStatusId,
    pub expiry_date: Option<String>,
}

/// Published version of a use case credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalTypeDetailData {
    pub id: Uuid,
    pub version: String,
    pub template: Option<String>,
    pub valid_from: String,
    pub expiry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySsiExternalTypeDetailTransferData {
    pub external_detail: ExternalTypeDetailData,
    pub ssi_details: Vec<CompanySsiDetailTransferData>,
}

/// Participation of a company in one use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseParticipationTransferData {
    pub use_case: String,
    /// Description in the requested language, if one exists
    pub description: Option<String>,
    pub credential_type: VerifiedCredentialTypeId,
    pub verified_credentials: Vec<CompanySsiExternalTypeDetailTransferData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsiCertificateTransferData {
    pub credential_type: VerifiedCredentialTypeId,
    pub ssi_details: Vec<CompanySsiDetailTransferData>,
}

/// Read-only repository over a company's SSI credentials
pub trait CompanySsiDetailsRepository: Send + Sync {
    /// One element per use case credential type, with the company's details
    /// nested under each published version
    fn get_use_case_participation_for_company<'a>(
        &self,
        context: &'a PortalDbContext,
        company_id: Uuid,
        language: &str,
    ) -> BoxStream<'a, Result<UseCaseParticipationTransferData, DomainError>>;

    /// One element per certificate credential type
    fn get_ssi_certificates<'a>(
        &self,
        context: &'a PortalDbContext,
        company_id: Uuid,
    ) -> BoxStream<'a, Result<SsiCertificateTransferData, DomainError>>;
}

/// Outcome of a country / identifier lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryAssignedIdentifiers {
    pub is_valid_country: bool,
    /// Requested kinds the country actually assigns; empty for unknown countries
    pub identifiers: Vec<UniqueIdentifierId>,
}

/// Repository trait for Country reference data
///
/// Alpha-2 codes are trimmed and upper-cased before lookup. Input that is not
/// two ASCII letters is an unknown country.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn check_country_exists_by_alpha2_code(
        &self,
        context: &PortalDbContext,
        alpha2_code: &str,
    ) -> Result<bool, DomainError>;

    async fn get_country_assigned_identifiers(
        &self,
        context: &PortalDbContext,
        alpha2_code: &str,
        unique_identifiers: &[UniqueIdentifierId],
    ) -> Result<CountryAssignedIdentifiers, DomainError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseData {
    pub id: Uuid,
    pub name: String,
    pub shortname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLongName {
    /// Language the name is written in
    pub language: String,
    pub long_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageData {
    pub short_name: String,
    pub long_names: Vec<LanguageLongName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniqueIdentifierData {
    pub id: i32,
    pub label: UniqueIdentifierId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyIdentifiers {
    pub identifier_data: Vec<UniqueIdentifierData>,
    pub country_exists: bool,
}

/// Repository trait for static reference tables
#[async_trait]
pub trait StaticDataRepository: Send + Sync {
    fn get_all_use_cases<'a>(
        &self,
        context: &'a PortalDbContext,
    ) -> BoxStream<'a, Result<UseCaseData, DomainError>>;

    fn get_all_languages<'a>(
        &self,
        context: &'a PortalDbContext,
    ) -> BoxStream<'a, Result<LanguageData, DomainError>>;

    /// All identifier kinds assigned to the country, plus whether it exists
    async fn get_company_identifiers(
        &self,
        context: &PortalDbContext,
        alpha2_code: &str,
    ) -> Result<CompanyIdentifiers, DomainError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pub id: Uuid,
    pub process_type_id: ProcessTypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub id: Uuid,
    pub process_step_type_id: ProcessStepTypeId,
    pub process_step_status_id: ProcessStepStatusId,
    pub process_id: Uuid,
    pub date_created: String,
    pub date_last_changed: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStepData {
    pub id: Uuid,
    pub process_step_type_id: ProcessStepTypeId,
}

/// Repository trait for processes and their steps
///
/// Bookkeeping only: callers decide which status a step moves to.
pub trait ProcessStepRepository: Send + Sync {
    fn create_process(
        &self,
        context: &mut PortalDbContext,
        process_type_id: ProcessTypeId,
    ) -> Process;

    /// Enqueue a step on a process
    fn create_process_step(
        &self,
        context: &mut PortalDbContext,
        process_id: Uuid,
        process_step_type_id: ProcessStepTypeId,
        process_step_status_id: ProcessStepStatusId,
    ) -> ProcessStep;

    fn create_process_step_range(
        &self,
        context: &mut PortalDbContext,
        process_id: Uuid,
        steps: &[(ProcessStepTypeId, ProcessStepStatusId)],
    ) -> Vec<ProcessStep>;

    /// Stage a status change for a step without loading it first
    fn modify_process_step(
        &self,
        context: &mut PortalDbContext,
        process_step_id: Uuid,
        process_step_status_id: ProcessStepStatusId,
        message: Option<String>,
    );

    /// Processes of one of `process_types` with a `Todo` step of one of `step_types`
    fn get_active_processes<'a>(
        &self,
        context: &'a PortalDbContext,
        process_types: &[ProcessTypeId],
        step_types: &[ProcessStepTypeId],
    ) -> BoxStream<'a, Result<Process, DomainError>>;

    /// The `Todo` steps of a process
    fn get_process_step_data<'a>(
        &self,
        context: &'a PortalDbContext,
        process_id: Uuid,
    ) -> BoxStream<'a, Result<ProcessStepData, DomainError>>;
}
