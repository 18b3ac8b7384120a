use futures::{StreamExt, TryStreamExt};
use portal_repositories::domain::{LanguageData, UseCaseData};
use portal_repositories::models::{UniqueIdentifierId, use_case};
use portal_repositories::seed::{self, TRACEABILITY_USE_CASE_ID};
use portal_repositories::{PortalRepositories, db};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

async fn setup_seeded() -> PortalRepositories {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_reference_data(&db)
        .await
        .expect("Failed to seed reference data");
    PortalRepositories::new(db)
}

async fn create_test_use_case(db: &DatabaseConnection, id: Uuid, name: &str) {
    use_case::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        shortname: Set(name.chars().take(3).collect()),
    }
    .insert(db)
    .await
    .expect("Failed to create use case");
}

#[tokio::test]
async fn test_seed_is_repeatable() {
    let repos = setup_seeded().await;
    let ctx = repos.context();
    seed::seed_reference_data(ctx.connection())
        .await
        .expect("Second seed must not fail");

    let use_cases: Vec<UseCaseData> = repos
        .static_data
        .get_all_use_cases(&ctx)
        .try_collect()
        .await
        .expect("Stream failed");
    assert_eq!(use_cases.len(), 4);
}

#[tokio::test]
async fn test_check_country_exists() {
    let repos = setup_seeded().await;
    let ctx = repos.context();

    for (code, expected) in [
        ("DE", true),
        ("US", true),
        ("XX", false),
        (" de ", true),
        ("fr", true),
        ("DEU", false),
        ("", false),
    ] {
        let exists = repos
            .countries
            .check_country_exists_by_alpha2_code(&ctx, code)
            .await
            .expect("Query failed");
        assert_eq!(exists, expected, "country {:?}", code);
    }
}

#[tokio::test]
async fn test_country_assigned_identifiers_is_intersection() {
    let repos = setup_seeded().await;
    let ctx = repos.context();

    // MX only assigns a VAT id
    let result = repos
        .countries
        .get_country_assigned_identifiers(
            &ctx,
            "MX",
            &[UniqueIdentifierId::VatId, UniqueIdentifierId::LeiCode],
        )
        .await
        .expect("Query failed");
    assert!(result.is_valid_country);
    assert_eq!(result.identifiers, vec![UniqueIdentifierId::VatId]);

    // Every returned kind was both requested and assigned
    let requested = [
        UniqueIdentifierId::Eori,
        UniqueIdentifierId::Viesid,
        UniqueIdentifierId::LeiCode,
    ];
    let result = repos
        .countries
        .get_country_assigned_identifiers(&ctx, "at", &requested)
        .await
        .expect("Query failed");
    assert!(result.is_valid_country);
    assert_eq!(result.identifiers, vec![UniqueIdentifierId::Viesid]);

    let result = repos
        .countries
        .get_country_assigned_identifiers(&ctx, "DE", &[])
        .await
        .expect("Query failed");
    assert!(result.is_valid_country);
    assert!(result.identifiers.is_empty());
}

#[tokio::test]
async fn test_unknown_country_has_no_identifiers() {
    let repos = setup_seeded().await;
    let ctx = repos.context();

    let result = repos
        .countries
        .get_country_assigned_identifiers(&ctx, "XX", &[UniqueIdentifierId::VatId])
        .await
        .expect("Query failed");
    assert!(!result.is_valid_country);
    assert!(result.identifiers.is_empty());
}

#[tokio::test]
async fn test_get_company_identifiers() {
    let repos = setup_seeded().await;
    let ctx = repos.context();

    let result = repos
        .static_data
        .get_company_identifiers(&ctx, "US")
        .await
        .expect("Query failed");
    assert!(result.country_exists);
    let labels: Vec<_> = result.identifier_data.iter().map(|d| d.label).collect();
    assert_eq!(
        labels,
        vec![UniqueIdentifierId::VatId, UniqueIdentifierId::LeiCode]
    );
    assert_eq!(result.identifier_data[0].id, 2);

    let result = repos
        .static_data
        .get_company_identifiers(&ctx, "XX")
        .await
        .expect("Query failed");
    assert!(!result.country_exists);
    assert!(result.identifier_data.is_empty());
}

#[tokio::test]
async fn test_get_all_use_cases() {
    let repos = setup_seeded().await;
    let ctx = repos.context();

    let use_cases: Vec<UseCaseData> = repos
        .static_data
        .get_all_use_cases(&ctx)
        .try_collect()
        .await
        .expect("Stream failed");

    let traceability = use_cases
        .iter()
        .find(|uc| uc.id == TRACEABILITY_USE_CASE_ID)
        .expect("Traceability use case missing");
    assert_eq!(traceability.name, "Traceability");
    assert_eq!(traceability.shortname, "T");
}

#[tokio::test]
async fn test_get_all_languages_with_long_names() {
    let repos = setup_seeded().await;
    let ctx = repos.context();

    let languages: Vec<LanguageData> = repos
        .static_data
        .get_all_languages(&ctx)
        .try_collect()
        .await
        .expect("Stream failed");

    let short_names: Vec<_> = languages.iter().map(|l| l.short_name.as_str()).collect();
    assert_eq!(short_names, vec!["de", "en"]);

    let german = &languages[0];
    assert_eq!(german.long_names.len(), 2);
    assert_eq!(german.long_names[0].language, "de");
    assert_eq!(german.long_names[0].long_name, "Deutsch");
    assert_eq!(german.long_names[1].language, "en");
    assert_eq!(german.long_names[1].long_name, "German");
}

#[tokio::test]
async fn test_empty_reference_tables_give_empty_streams() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let repos = PortalRepositories::new(db);
    let ctx = repos.context();

    let mut use_cases = repos.static_data.get_all_use_cases(&ctx);
    assert!(use_cases.next().await.is_none());

    let mut languages = repos.static_data.get_all_languages(&ctx);
    assert!(languages.next().await.is_none());
}

#[tokio::test]
async fn test_use_case_stream_sees_rows_added_while_draining() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    create_test_use_case(&db, Uuid::from_u128(1), "First").await;
    create_test_use_case(&db, Uuid::from_u128(3), "Third").await;
    let repos = PortalRepositories::new(db.clone());
    let ctx = repos.context();

    let mut stream = repos.static_data.get_all_use_cases(&ctx);
    let first = stream
        .next()
        .await
        .expect("Stream ended early")
        .expect("Query failed");
    assert_eq!(first.name, "First");

    create_test_use_case(&db, Uuid::from_u128(2), "Second").await;

    let rest: Vec<UseCaseData> = stream.try_collect().await.expect("Stream failed");
    let names: Vec<_> = rest.iter().map(|uc| uc.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "Third"]);
}
