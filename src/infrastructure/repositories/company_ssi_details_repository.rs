//! SeaORM implementation of CompanySsiDetailsRepository

use futures::stream::BoxStream;
use sea_orm::{
    ActiveEnum, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::keyset::keyset_stream;
use crate::domain::{
    CompanySsiDetailTransferData, CompanySsiDetailsRepository,
    CompanySsiExternalTypeDetailTransferData, DomainError, ExternalTypeDetailData,
    SsiCertificateTransferData, UseCaseParticipationTransferData,
};
use crate::infrastructure::context::PortalDbContext;
use crate::models::company_ssi_detail::{self, Entity as CompanySsiDetailEntity};
use crate::models::enums::{VerifiedCredentialTypeId, VerifiedCredentialTypeKindId};
use crate::models::use_case::Entity as UseCaseEntity;
use crate::models::use_case_description::Entity as UseCaseDescriptionEntity;
use crate::models::verified_credential_external_type_detail::{
    self as external_type_detail, Entity as ExternalTypeDetailEntity,
};
use crate::models::verified_credential_type::{self, Entity as VerifiedCredentialTypeEntity};

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmCompanySsiDetailsRepository;

impl SeaOrmCompanySsiDetailsRepository {
    pub fn new() -> Self {
        Self
    }
}

fn ssi_detail_data(row: company_ssi_detail::Model) -> CompanySsiDetailTransferData {
    CompanySsiDetailTransferData {
        id: row.id,
        status: row.status,
        expiry_date: row.expiry_date,
    }
}

/// Next credential type of `kind` after `after`, in id order
async fn next_credential_type(
    db: &DatabaseConnection,
    kind: VerifiedCredentialTypeKindId,
    after: Option<i32>,
) -> Result<Option<verified_credential_type::Model>, DomainError> {
    let mut query = VerifiedCredentialTypeEntity::find()
        .filter(verified_credential_type::Column::Kind.eq(kind))
        .order_by_asc(verified_credential_type::Column::Id);
    if let Some(after) = after {
        query = query.filter(verified_credential_type::Column::Id.gt(after));
    }

    Ok(query.one(db).await?)
}

async fn use_case_participation(
    db: &DatabaseConnection,
    credential_type: verified_credential_type::Model,
    company_id: Uuid,
    language: &str,
) -> Result<UseCaseParticipationTransferData, DomainError> {
    let (use_case, description) = match credential_type.use_case_id {
        Some(use_case_id) => {
            let name = UseCaseEntity::find_by_id(use_case_id)
                .one(db)
                .await?
                .map(|uc| uc.name)
                .unwrap_or_else(|| credential_type.label.clone());
            let description =
                UseCaseDescriptionEntity::find_by_id((use_case_id, language.to_string()))
                    .one(db)
                    .await?
                    .map(|d| d.description);
            (name, description)
        }
        None => (credential_type.label.clone(), None),
    };

    let details = ExternalTypeDetailEntity::find()
        .filter(external_type_detail::Column::VerifiedCredentialTypeId.eq(credential_type.id))
        .order_by_asc(external_type_detail::Column::Version)
        .all(db)
        .await?;

    let mut verified_credentials = Vec::with_capacity(details.len());
    for detail in details {
        let ssi_details = CompanySsiDetailEntity::find()
            .filter(company_ssi_detail::Column::CompanyId.eq(company_id))
            .filter(company_ssi_detail::Column::ExternalTypeDetailId.eq(detail.id))
            .order_by_asc(company_ssi_detail::Column::DateCreated)
            .all(db)
            .await?
            .into_iter()
            .map(ssi_detail_data)
            .collect();

        verified_credentials.push(CompanySsiExternalTypeDetailTransferData {
            external_detail: ExternalTypeDetailData {
                id: detail.id,
                version: detail.version,
                template: detail.template,
                valid_from: detail.valid_from,
                expiry: detail.expiry,
            },
            ssi_details,
        });
    }

    Ok(UseCaseParticipationTransferData {
        use_case,
        description,
        credential_type: VerifiedCredentialTypeId::try_from_value(&credential_type.id)?,
        verified_credentials,
    })
}

async fn ssi_certificate(
    db: &DatabaseConnection,
    credential_type: verified_credential_type::Model,
    company_id: Uuid,
) -> Result<SsiCertificateTransferData, DomainError> {
    let ssi_details = CompanySsiDetailEntity::find()
        .filter(company_ssi_detail::Column::CompanyId.eq(company_id))
        .filter(company_ssi_detail::Column::VerifiedCredentialTypeId.eq(credential_type.id))
        .order_by_asc(company_ssi_detail::Column::DateCreated)
        .all(db)
        .await?
        .into_iter()
        .map(ssi_detail_data)
        .collect();

    Ok(SsiCertificateTransferData {
        credential_type: VerifiedCredentialTypeId::try_from_value(&credential_type.id)?,
        ssi_details,
    })
}

impl CompanySsiDetailsRepository for SeaOrmCompanySsiDetailsRepository {
    fn get_use_case_participation_for_company<'a>(
        &self,
        context: &'a PortalDbContext,
        company_id: Uuid,
        language: &str,
    ) -> BoxStream<'a, Result<UseCaseParticipationTransferData, DomainError>> {
        let db = context.connection();
        let language = language.to_string();

        keyset_stream(move |after: Option<i32>| {
            let language = language.clone();
            async move {
                let Some(credential_type) =
                    next_credential_type(db, VerifiedCredentialTypeKindId::UseCase, after).await?
                else {
                    return Ok(None);
                };

                let key = credential_type.id;
                let participation =
                    use_case_participation(db, credential_type, company_id, &language).await?;
                Ok::<_, DomainError>(Some((key, participation)))
            }
        })
    }

    fn get_ssi_certificates<'a>(
        &self,
        context: &'a PortalDbContext,
        company_id: Uuid,
    ) -> BoxStream<'a, Result<SsiCertificateTransferData, DomainError>> {
        let db = context.connection();

        keyset_stream(move |after: Option<i32>| async move {
            let Some(credential_type) =
                next_credential_type(db, VerifiedCredentialTypeKindId::Certificate, after).await?
            else {
                return Ok(None);
            };

            let key = credential_type.id;
            let certificate = ssi_certificate(db, credential_type, company_id).await?;
            Ok::<_, DomainError>(Some((key, certificate)))
        })
    }
}
