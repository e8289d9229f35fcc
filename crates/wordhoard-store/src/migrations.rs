//! Database Migrations
//!
//! Handles schema creation and versioned migrations.

use sqlx::Row;
use sqlx::sqlite::SqlitePool;
use tracing::{info, warn};

/// Current database schema version
const SCHEMA_VERSION: i32 = 2;

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    let current_version = get_current_version(pool).await?;

    info!(current_version, target_version = SCHEMA_VERSION, "Checking database migrations");

    if current_version < SCHEMA_VERSION {
        for version in (current_version + 1)..=SCHEMA_VERSION {
            run_migration(pool, version).await?;
        }

        info!("Database migrations completed successfully");
    }

    Ok(())
}

async fn get_current_version(pool: &SqlitePool) -> Result<i32, sqlx::Error> {
    let result = sqlx::query("SELECT MAX(version) as version FROM _migrations")
        .fetch_optional(pool)
        .await?;

    Ok(result
        .and_then(|row| row.try_get::<i32, _>("version").ok())
        .unwrap_or(0))
}

async fn run_migration(pool: &SqlitePool, version: i32) -> Result<(), sqlx::Error> {
    let (name, sql) = match version {
        1 => ("words", MIGRATION_V1),
        2 => ("user_media", MIGRATION_V2),
        _ => {
            warn!("Unknown migration version: {}", version);
            return Ok(());
        }
    };

    info!("Applying migration v{}: {}", version, name);

    for statement in sql.split(';').filter(|s| !s.trim().is_empty()) {
        sqlx::query(statement.trim()).execute(pool).await?;
    }

    sqlx::query("INSERT INTO _migrations (version, name) VALUES (?, ?)")
        .bind(version)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

/// Migration v1: vocabulary table keyed by base form
const MIGRATION_V1: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    word TEXT PRIMARY KEY,
    definition TEXT NOT NULL,
    pronunciation TEXT NOT NULL DEFAULT '',
    example_sentence TEXT NOT NULL,
    mw_audio_url TEXT,
    date_added TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_words_date_added ON words(date_added DESC)
"#;

/// Migration v2: user-attached media
const MIGRATION_V2: &str = r#"
ALTER TABLE words ADD COLUMN user_image_url TEXT;
ALTER TABLE words ADD COLUMN user_audio_url TEXT
"#;
