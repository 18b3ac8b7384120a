//! SeaORM implementation of CountryRepository

use async_trait::async_trait;
use sea_orm::{ActiveEnum, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{CountryAssignedIdentifiers, CountryRepository, DomainError};
use crate::infrastructure::context::PortalDbContext;
use crate::models::country::Entity as CountryEntity;
use crate::models::country_assigned_identifier::{self, Entity as AssignedIdentifierEntity};
use crate::models::enums::UniqueIdentifierId;

/// Canonical form of an alpha-2 code, or `None` when it cannot be one.
pub(crate) fn normalize_alpha2(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

/// Identifier kinds assigned to an existing country, in id order
pub(crate) async fn assigned_identifiers(
    context: &PortalDbContext,
    alpha2_code: &str,
) -> Result<Vec<UniqueIdentifierId>, DomainError> {
    let rows = AssignedIdentifierEntity::find()
        .filter(country_assigned_identifier::Column::CountryAlpha2Code.eq(alpha2_code))
        .order_by_asc(country_assigned_identifier::Column::UniqueIdentifierId)
        .all(context.connection())
        .await?;

    let mut identifiers = Vec::with_capacity(rows.len());
    for row in rows {
        identifiers.push(UniqueIdentifierId::try_from_value(&row.unique_identifier_id)?);
    }
    Ok(identifiers)
}

pub(crate) async fn country_exists(
    context: &PortalDbContext,
    alpha2_code: &str,
) -> Result<bool, DomainError> {
    Ok(CountryEntity::find_by_id(alpha2_code.to_string())
        .one(context.connection())
        .await?
        .is_some())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmCountryRepository;

impl SeaOrmCountryRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CountryRepository for SeaOrmCountryRepository {
    async fn check_country_exists_by_alpha2_code(
        &self,
        context: &PortalDbContext,
        alpha2_code: &str,
    ) -> Result<bool, DomainError> {
        match normalize_alpha2(alpha2_code) {
            Some(code) => country_exists(context, &code).await,
            None => Ok(false),
        }
    }

    async fn get_country_assigned_identifiers(
        &self,
        context: &PortalDbContext,
        alpha2_code: &str,
        unique_identifiers: &[UniqueIdentifierId],
    ) -> Result<CountryAssignedIdentifiers, DomainError> {
        let Some(code) = normalize_alpha2(alpha2_code) else {
            return Ok(CountryAssignedIdentifiers::default());
        };
        if !country_exists(context, &code).await? {
            tracing::debug!("Unknown country {}", code);
            return Ok(CountryAssignedIdentifiers::default());
        }

        let identifiers = assigned_identifiers(context, &code)
            .await?
            .into_iter()
            .filter(|id| unique_identifiers.contains(id))
            .collect();

        Ok(CountryAssignedIdentifiers {
            is_valid_country: true,
            identifiers,
        })
    }
}
