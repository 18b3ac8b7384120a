//! Reference data: countries, identifier kinds, languages, use cases and
//! verified credential types. Safe to run repeatedly.

use sea_orm::*;
use uuid::{Uuid, uuid};

use crate::models::enums::{
    UniqueIdentifierId, VerifiedCredentialTypeId, VerifiedCredentialTypeKindId,
};
use crate::models::{
    country, country_assigned_identifier, language, language_long_name, unique_identifier,
    use_case, use_case_description, verified_credential_external_type_detail,
    verified_credential_type,
};

const UNIQUE_IDENTIFIERS: &[(UniqueIdentifierId, &str)] = &[
    (UniqueIdentifierId::CommercialRegNumber, "COMMERCIAL_REG_NUMBER"),
    (UniqueIdentifierId::VatId, "VAT_ID"),
    (UniqueIdentifierId::LeiCode, "LEI_CODE"),
    (UniqueIdentifierId::Viesid, "VIESID"),
    (UniqueIdentifierId::Eori, "EORI"),
];

const COUNTRIES: &[(&str, &str, &[UniqueIdentifierId])] = &[
    (
        "DE",
        "DEU",
        &[
            UniqueIdentifierId::CommercialRegNumber,
            UniqueIdentifierId::VatId,
            UniqueIdentifierId::LeiCode,
            UniqueIdentifierId::Viesid,
            UniqueIdentifierId::Eori,
        ],
    ),
    (
        "FR",
        "FRA",
        &[
            UniqueIdentifierId::CommercialRegNumber,
            UniqueIdentifierId::VatId,
            UniqueIdentifierId::LeiCode,
            UniqueIdentifierId::Viesid,
            UniqueIdentifierId::Eori,
        ],
    ),
    (
        "AT",
        "AUT",
        &[
            UniqueIdentifierId::CommercialRegNumber,
            UniqueIdentifierId::VatId,
            UniqueIdentifierId::Viesid,
        ],
    ),
    ("US", "USA", &[UniqueIdentifierId::VatId, UniqueIdentifierId::LeiCode]),
    ("MX", "MEX", &[UniqueIdentifierId::VatId]),
];

// (short name, [(written in, long name)])
const LANGUAGES: &[(&str, &[(&str, &str)])] = &[
    ("de", &[("de", "Deutsch"), ("en", "German")]),
    ("en", &[("de", "Englisch"), ("en", "English")]),
];

pub const TRACEABILITY_USE_CASE_ID: Uuid = uuid!("06b243a4-ba51-4bf3-bc40-5d79a2231b86");
pub const SUSTAINABILITY_USE_CASE_ID: Uuid = uuid!("06b243a4-ba51-4bf3-bc40-5d79a2231b88");
pub const QUALITY_USE_CASE_ID: Uuid = uuid!("06b243a4-ba51-4bf3-bc40-5d79a2231b89");
pub const CIRCULAR_ECONOMY_USE_CASE_ID: Uuid = uuid!("06b243a4-ba51-4bf3-bc40-5d79a2231b90");

// (id, name, shortname, de, en)
const USE_CASES: &[(Uuid, &str, &str, &str, &str)] = &[
    (
        TRACEABILITY_USE_CASE_ID,
        "Traceability",
        "T",
        "Rückverfolgbarkeit von Teilen entlang der Lieferkette",
        "Tracing parts along the supply chain",
    ),
    (
        SUSTAINABILITY_USE_CASE_ID,
        "Sustainability & CO2-Footprint",
        "CO2",
        "Austausch von Product Carbon Footprints",
        "Exchange of product carbon footprints",
    ),
    (
        QUALITY_USE_CASE_ID,
        "Quality Management",
        "QM",
        "Qualitätsdaten zwischen Partnern teilen",
        "Share quality data between partners",
    ),
    (
        CIRCULAR_ECONOMY_USE_CASE_ID,
        "Circular Economy",
        "CE",
        "Wiederverwendung und Recycling von Komponenten",
        "Reuse and recycling of components",
    ),
];

// (type, label, kind, use case, external detail id)
const CREDENTIAL_TYPES: &[(
    VerifiedCredentialTypeId,
    &str,
    VerifiedCredentialTypeKindId,
    Option<Uuid>,
    Option<Uuid>,
)] = &[
    (
        VerifiedCredentialTypeId::TraceabilityFramework,
        "TRACEABILITY_FRAMEWORK",
        VerifiedCredentialTypeKindId::UseCase,
        Some(TRACEABILITY_USE_CASE_ID),
        Some(uuid!("1268a76a-ca19-4dd8-b932-01f24071d560")),
    ),
    (
        VerifiedCredentialTypeId::PcfFramework,
        "PCF_FRAMEWORK",
        VerifiedCredentialTypeKindId::UseCase,
        Some(SUSTAINABILITY_USE_CASE_ID),
        Some(uuid!("1268a76a-ca19-4dd8-b932-01f24071d561")),
    ),
    (
        VerifiedCredentialTypeId::DismantlerCertificate,
        "DISMANTLER_CERTIFICATE",
        VerifiedCredentialTypeKindId::Certificate,
        None,
        None,
    ),
    (
        VerifiedCredentialTypeId::CircularEconomy,
        "CIRCULAR_ECONOMY",
        VerifiedCredentialTypeKindId::UseCase,
        Some(CIRCULAR_ECONOMY_USE_CASE_ID),
        Some(uuid!("1268a76a-ca19-4dd8-b932-01f24071d562")),
    ),
    (
        VerifiedCredentialTypeId::QualityFramework,
        "QUALITY_FRAMEWORK",
        VerifiedCredentialTypeKindId::UseCase,
        Some(QUALITY_USE_CASE_ID),
        Some(uuid!("1268a76a-ca19-4dd8-b932-01f24071d563")),
    ),
];

/// Rows that already exist are left untouched.
fn ignore_existing<T>(result: Result<T, DbErr>) -> Result<(), DbErr> {
    match result {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e),
    }
}

pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Identifier kinds
    for &(id, label) in UNIQUE_IDENTIFIERS {
        let row = unique_identifier::ActiveModel {
            id: Set(id.to_value()),
            label: Set(label.to_owned()),
        };
        ignore_existing(
            unique_identifier::Entity::insert(row)
                .on_conflict(
                    sea_query::OnConflict::column(unique_identifier::Column::Id)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(db)
                .await,
        )?;
    }

    // 2. Countries and the identifiers each one assigns
    for &(alpha2, alpha3, identifiers) in COUNTRIES {
        let row = country::ActiveModel {
            alpha2_code: Set(alpha2.to_owned()),
            alpha3_code: Set(Some(alpha3.to_owned())),
        };
        ignore_existing(
            country::Entity::insert(row)
                .on_conflict(
                    sea_query::OnConflict::column(country::Column::Alpha2Code)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(db)
                .await,
        )?;

        for identifier in identifiers {
            let row = country_assigned_identifier::ActiveModel {
                country_alpha2_code: Set(alpha2.to_owned()),
                unique_identifier_id: Set(identifier.to_value()),
                bpdm_identifier_code: Set(None),
            };
            ignore_existing(
                country_assigned_identifier::Entity::insert(row)
                    .on_conflict(
                        sea_query::OnConflict::columns([
                            country_assigned_identifier::Column::CountryAlpha2Code,
                            country_assigned_identifier::Column::UniqueIdentifierId,
                        ])
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec(db)
                    .await,
            )?;
        }
    }

    // 3. Languages; every language row must exist before the long names
    for &(short_name, _) in LANGUAGES {
        let row = language::ActiveModel {
            short_name: Set(short_name.to_owned()),
        };
        ignore_existing(
            language::Entity::insert(row)
                .on_conflict(
                    sea_query::OnConflict::column(language::Column::ShortName)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(db)
                .await,
        )?;
    }
    for &(short_name, long_names) in LANGUAGES {
        for &(written_in, long_name) in long_names {
            let row = language_long_name::ActiveModel {
                short_name: Set(short_name.to_owned()),
                language_short_name: Set(written_in.to_owned()),
                long_name: Set(long_name.to_owned()),
            };
            ignore_existing(
                language_long_name::Entity::insert(row)
                    .on_conflict(
                        sea_query::OnConflict::columns([
                            language_long_name::Column::ShortName,
                            language_long_name::Column::LanguageShortName,
                        ])
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec(db)
                    .await,
            )?;
        }
    }

    // 4. Use cases with German and English descriptions
    for &(id, name, shortname, de, en) in USE_CASES {
        let row = use_case::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            shortname: Set(shortname.to_owned()),
        };
        ignore_existing(
            use_case::Entity::insert(row)
                .on_conflict(
                    sea_query::OnConflict::column(use_case::Column::Id)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(db)
                .await,
        )?;

        for (lang, description) in [("de", de), ("en", en)] {
            let row = use_case_description::ActiveModel {
                use_case_id: Set(id),
                language_short_name: Set(lang.to_owned()),
                description: Set(description.to_owned()),
            };
            ignore_existing(
                use_case_description::Entity::insert(row)
                    .on_conflict(
                        sea_query::OnConflict::columns([
                            use_case_description::Column::UseCaseId,
                            use_case_description::Column::LanguageShortName,
                        ])
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec(db)
                    .await,
            )?;
        }
    }

    // 5. Credential types and their first published version
    let now = chrono::Utc::now();
    for &(type_id, label, kind, use_case_id, detail_id) in CREDENTIAL_TYPES {
        let row = verified_credential_type::ActiveModel {
            id: Set(type_id.to_value()),
            label: Set(label.to_owned()),
            kind: Set(kind),
            use_case_id: Set(use_case_id),
        };
        ignore_existing(
            verified_credential_type::Entity::insert(row)
                .on_conflict(
                    sea_query::OnConflict::column(verified_credential_type::Column::Id)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(db)
                .await,
        )?;

        if let Some(detail_id) = detail_id {
            let row = verified_credential_external_type_detail::ActiveModel {
                id: Set(detail_id),
                verified_credential_type_id: Set(type_id.to_value()),
                version: Set("1.0".to_owned()),
                template: Set(None),
                valid_from: Set(now.to_rfc3339()),
                expiry: Set((now + chrono::Duration::days(365)).to_rfc3339()),
            };
            ignore_existing(
                verified_credential_external_type_detail::Entity::insert(row)
                    .on_conflict(
                        sea_query::OnConflict::column(
                            verified_credential_external_type_detail::Column::Id,
                        )
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec(db)
                    .await,
            )?;
        }
    }

    tracing::info!(
        "Reference data seeded: {} countries, {} languages, {} use cases",
        COUNTRIES.len(),
        LANGUAGES.len(),
        USE_CASES.len()
    );

    Ok(())
}
