//! SeaORM implementation of StaticDataRepository

use async_trait::async_trait;
use futures::stream::BoxStream;
use sea_orm::{ActiveEnum, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::country_repository::{assigned_identifiers, country_exists, normalize_alpha2};
use super::keyset::keyset_stream;
use crate::domain::{
    CompanyIdentifiers, DomainError, LanguageData, LanguageLongName, StaticDataRepository,
    UniqueIdentifierData, UseCaseData,
};
use crate::infrastructure::context::PortalDbContext;
use crate::models::language::{self, Entity as LanguageEntity};
use crate::models::language_long_name::{self, Entity as LanguageLongNameEntity};
use crate::models::use_case::{self, Entity as UseCaseEntity};

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmStaticDataRepository;

impl SeaOrmStaticDataRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StaticDataRepository for SeaOrmStaticDataRepository {
    fn get_all_use_cases<'a>(
        &self,
        context: &'a PortalDbContext,
    ) -> BoxStream<'a, Result<UseCaseData, DomainError>> {
        let db = context.connection();

        keyset_stream(move |after: Option<Uuid>| async move {
            let mut query = UseCaseEntity::find().order_by_asc(use_case::Column::Id);
            if let Some(after) = after {
                query = query.filter(use_case::Column::Id.gt(after));
            }

            let next = query.one(db).await?.map(|uc| {
                let data = UseCaseData {
                    id: uc.id,
                    name: uc.name,
                    shortname: uc.shortname,
                };
                (uc.id, data)
            });
            Ok::<_, DomainError>(next)
        })
    }

    fn get_all_languages<'a>(
        &self,
        context: &'a PortalDbContext,
    ) -> BoxStream<'a, Result<LanguageData, DomainError>> {
        let db = context.connection();

        keyset_stream(move |after: Option<String>| async move {
            let mut query = LanguageEntity::find().order_by_asc(language::Column::ShortName);
            if let Some(after) = after {
                query = query.filter(language::Column::ShortName.gt(after));
            }

            let Some(lang) = query.one(db).await? else {
                return Ok(None);
            };

            let long_names = LanguageLongNameEntity::find()
                .filter(language_long_name::Column::ShortName.eq(lang.short_name.clone()))
                .order_by_asc(language_long_name::Column::LanguageShortName)
                .all(db)
                .await?
                .into_iter()
                .map(|n| LanguageLongName {
                    language: n.language_short_name,
                    long_name: n.long_name,
                })
                .collect();

            let data = LanguageData {
                short_name: lang.short_name.clone(),
                long_names,
            };
            Ok::<_, DomainError>(Some((lang.short_name, data)))
        })
    }

    async fn get_company_identifiers(
        &self,
        context: &PortalDbContext,
        alpha2_code: &str,
    ) -> Result<CompanyIdentifiers, DomainError> {
        let Some(code) = normalize_alpha2(alpha2_code) else {
            return Ok(CompanyIdentifiers::default());
        };
        if !country_exists(context, &code).await? {
            return Ok(CompanyIdentifiers::default());
        }

        let identifier_data = assigned_identifiers(context, &code)
            .await?
            .into_iter()
            .map(|label| UniqueIdentifierData {
                id: label.to_value(),
                label,
            })
            .collect();

        Ok(CompanyIdentifiers {
            identifier_data,
            country_exists: true,
        })
    }
}
