use futures::TryStreamExt;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_repositories::domain::{LanguageData, UseCaseData};
use portal_repositories::{PortalRepositories, config, db, seed};

#[derive(Serialize)]
struct ReferenceSummary {
    use_cases: Vec<UseCaseData>,
    languages: Vec<LanguageData>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_repositories=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    if config.seed_reference_data {
        tracing::info!("Seeding reference data...");
        if let Err(e) = seed::seed_reference_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    let repositories = PortalRepositories::new(db);
    let context = repositories.context();

    let use_cases: Vec<UseCaseData> = repositories
        .static_data
        .get_all_use_cases(&context)
        .try_collect()
        .await
        .expect("Failed to read use cases");
    let languages: Vec<LanguageData> = repositories
        .static_data
        .get_all_languages(&context)
        .try_collect()
        .await
        .expect("Failed to read languages");

    tracing::info!(
        "Loaded {} use cases and {} languages from {}",
        use_cases.len(),
        languages.len(),
        config.database_url
    );

    let summary = ReferenceSummary {
        use_cases,
        languages,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize summary: {}", e),
    }
}
