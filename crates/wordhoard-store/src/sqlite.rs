//! SQLite-backed vocabulary store

use std::str::FromStr;

use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use wordhoard_core::{StoreError, VocabularyStore};
use wordhoard_types::{MediaKind, VocabularyRecord, WordSummary};

use crate::migrations::run_migrations;

pub struct SqliteStore {
    pool: SqlitePool,
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn record_from_row(row: &SqliteRow) -> Result<VocabularyRecord, sqlx::Error> {
    Ok(VocabularyRecord {
        word: row.try_get("word")?,
        definition: row.try_get("definition")?,
        pronunciation: row.try_get("pronunciation")?,
        example_sentence: row.try_get("example_sentence")?,
        audio_url: row.try_get("mw_audio_url")?,
        date_added: row.try_get("date_added")?,
        user_image_url: row.try_get("user_image_url")?,
        user_audio_url: row.try_get("user_audio_url")?,
    })
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and migrate it
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(backend)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(backend)?;

        run_migrations(&pool).await.map_err(backend)?;
        tracing::info!(url, "Opened vocabulary database");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl VocabularyStore for SqliteStore {
    async fn get(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        let row = sqlx::query("SELECT * FROM words WHERE word = ?")
            .bind(word)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        row.as_ref()
            .map(record_from_row)
            .transpose()
            .map_err(backend)
    }

    async fn insert(&self, record: VocabularyRecord) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO words (word, definition, pronunciation, example_sentence, mw_audio_url,
                date_added, user_image_url, user_audio_url)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.word)
        .bind(&record.definition)
        .bind(&record.pronunciation)
        .bind(&record.example_sentence)
        .bind(&record.audio_url)
        .bind(record.date_added)
        .bind(&record.user_image_url)
        .bind(&record.user_audio_url)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::Duplicate(record.word))
            }
            Err(e) => Err(backend(e)),
        }
    }

    async fn list(&self) -> Result<Vec<WordSummary>, StoreError> {
        let rows = sqlx::query(
            "SELECT word, definition, pronunciation, date_added FROM words ORDER BY word ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.iter()
            .map(|row| {
                Ok(WordSummary {
                    word: row.try_get("word")?,
                    definition: row.try_get("definition")?,
                    pronunciation: row.try_get("pronunciation")?,
                    date_added: row.try_get("date_added")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(backend)
    }

    async fn all(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        let rows = sqlx::query("SELECT * FROM words ORDER BY word ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        rows.iter()
            .map(record_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(backend)
    }

    async fn attach_media(
        &self,
        word: &str,
        kind: MediaKind,
        url: &str,
    ) -> Result<(), StoreError> {
        let sql = match kind {
            MediaKind::Image => "UPDATE words SET user_image_url = ? WHERE word = ?",
            MediaKind::Audio => "UPDATE words SET user_audio_url = ? WHERE word = ?",
        };

        let result = sqlx::query(sql)
            .bind(url)
            .bind(word)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(word.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, word: &str) -> Result<Option<VocabularyRecord>, StoreError> {
        let mut tx = self.pool.begin().await.map_err(backend)?;

        let row = sqlx::query("SELECT * FROM words WHERE word = ?")
            .bind(word)
            .fetch_optional(&mut *tx)
            .await
            .map_err(backend)?;
        let record = row
            .as_ref()
            .map(record_from_row)
            .transpose()
            .map_err(backend)?;

        sqlx::query("DELETE FROM words WHERE word = ?")
            .bind(word)
            .execute(&mut *tx)
            .await
            .map_err(backend)?;

        tx.commit().await.map_err(backend)?;
        Ok(record)
    }
}
