use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Connect and make sure every table exists.
///
/// SQLite connections opened through sqlx enforce foreign keys, so referential
/// integrity of staged rows is checked when a unit of work commits.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;
    tracing::debug!("Schema ready on {}", database_url);

    Ok(db)
}

// Ids are UUID blobs, enums are their integer ids, dates are RFC 3339 text.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS apps (
        id BLOB PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        date_created TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS iam_clients (
        id BLOB PRIMARY KEY NOT NULL,
        client_client_id TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS app_instances (
        id BLOB PRIMARY KEY NOT NULL,
        app_id BLOB NOT NULL REFERENCES apps(id) ON DELETE CASCADE,
        iam_client_id BLOB NOT NULL REFERENCES iam_clients(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS countries (
        alpha2_code TEXT PRIMARY KEY NOT NULL,
        alpha3_code TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id BLOB PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        country_alpha2_code TEXT REFERENCES countries(alpha2_code),
        date_created TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS unique_identifiers (
        id INTEGER PRIMARY KEY NOT NULL,
        label TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS country_assigned_identifiers (
        country_alpha2_code TEXT NOT NULL REFERENCES countries(alpha2_code) ON DELETE CASCADE,
        unique_identifier_id INTEGER NOT NULL REFERENCES unique_identifiers(id),
        bpdm_identifier_code TEXT,
        PRIMARY KEY (country_alpha2_code, unique_identifier_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS languages (
        short_name TEXT PRIMARY KEY NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS language_long_names (
        short_name TEXT NOT NULL REFERENCES languages(short_name) ON DELETE CASCADE,
        language_short_name TEXT NOT NULL REFERENCES languages(short_name),
        long_name TEXT NOT NULL,
        PRIMARY KEY (short_name, language_short_name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS use_cases (
        id BLOB PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        shortname TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS use_case_descriptions (
        use_case_id BLOB NOT NULL REFERENCES use_cases(id) ON DELETE CASCADE,
        language_short_name TEXT NOT NULL REFERENCES languages(short_name),
        description TEXT NOT NULL,
        PRIMARY KEY (use_case_id, language_short_name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS verified_credential_types (
        id INTEGER PRIMARY KEY NOT NULL,
        label TEXT NOT NULL,
        kind INTEGER NOT NULL,
        use_case_id BLOB REFERENCES use_cases(id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS verified_credential_external_type_details (
        id BLOB PRIMARY KEY NOT NULL,
        verified_credential_type_id INTEGER NOT NULL
            REFERENCES verified_credential_types(id) ON DELETE CASCADE,
        version TEXT NOT NULL,
        template TEXT,
        valid_from TEXT NOT NULL,
        expiry TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS company_ssi_details (
        id BLOB PRIMARY KEY NOT NULL,
        company_id BLOB NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
        verified_credential_type_id INTEGER NOT NULL REFERENCES verified_credential_types(id),
        status INTEGER NOT NULL,
        external_type_detail_id BLOB
            REFERENCES verified_credential_external_type_details(id),
        expiry_date TEXT,
        date_created TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS processes (
        id BLOB PRIMARY KEY NOT NULL,
        process_type_id INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS process_steps (
        id BLOB PRIMARY KEY NOT NULL,
        process_step_type_id INTEGER NOT NULL,
        process_step_status_id INTEGER NOT NULL,
        process_id BLOB NOT NULL REFERENCES processes(id) ON DELETE CASCADE,
        date_created TEXT NOT NULL,
        date_last_changed TEXT,
        message TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_process_steps_process ON process_steps(process_id)",
    "CREATE INDEX IF NOT EXISTS idx_company_ssi_details_company ON company_ssi_details(company_id)",
];

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    for sql in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        run_migrations(&db).await.expect("Second run must not fail");
    }
}
