use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Insert countries, identifiers, languages and use cases on startup
    pub seed_reference_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://portal.db?mode=rwc".to_string()),
            seed_reference_data: env::var("SEED_REFERENCE_DATA").is_ok(),
        }
    }
}
