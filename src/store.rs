// src/store.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{error::AppError, models::answer::AnswerKey};

/// Capability interface for looking up the answer key of a given day.
///
/// The date is always supplied explicitly by the caller so lookups stay
/// deterministic; nothing in here reads the system clock.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Returns the answer key for the sound test featured on `date`,
    /// or `None` when no test is featured that day.
    async fn answer_key_for(&self, date: NaiveDate) -> Result<Option<AnswerKey>, AppError>;
}

/// Postgres-backed `AnswerStore` reading from the `sound_tests` table.
#[derive(Clone)]
pub struct PgAnswerStore {
    pool: PgPool,
}

impl PgAnswerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerStore for PgAnswerStore {
    async fn answer_key_for(&self, date: NaiveDate) -> Result<Option<AnswerKey>, AppError> {
        // featured_on is UNIQUE, so at most one row can match.
        let key = sqlx::query_as::<_, AnswerKey>(
            r#"
            SELECT keyboard_id, plate_material_id, keycap_material_id, keyswitch_id
            FROM sound_tests
            WHERE featured_on = $1
            LIMIT 1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch answer key for {}: {:?}", date, e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(key)
    }
}
