//! Pc repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use flashapp_core::error::{AppError, ErrorKind};
use flashapp_core::result::AppResult;
use flashapp_core::traits::Repository;
use flashapp_entity::pc::{COLLECTION, Pc};

const COLUMNS: &str = "id, make, model, price";

/// Repository for Pc documents stored in the `pc` table.
#[derive(Debug, Clone)]
pub struct PgPcRepository {
    pool: PgPool,
}

impl PgPcRepository {
    /// Create a new Pc repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Pc, str> for PgPcRepository {
    async fn save(&self, entity: Pc) -> AppResult<Pc> {
        let sql = format!(
            "INSERT INTO {COLLECTION} ({COLUMNS}) \
             VALUES (COALESCE($1, gen_random_uuid()::text), $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE \
             SET make = EXCLUDED.make, model = EXCLUDED.model, price = EXCLUDED.price \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pc>(&sql)
            .bind(&entity.id)
            .bind(&entity.make)
            .bind(&entity.model)
            .bind(entity.price)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save pc", e))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Pc>> {
        let sql = format!("SELECT {COLUMNS} FROM {COLLECTION} WHERE id = $1");
        sqlx::query_as::<_, Pc>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find pc", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Pc>> {
        let sql = format!("SELECT {COLUMNS} FROM {COLLECTION} ORDER BY id ASC");
        sqlx::query_as::<_, Pc>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list pcs", e))
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {COLLECTION} WHERE id = $1)");
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check pc existence", e)
            })
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let sql = format!("DELETE FROM {COLLECTION} WHERE id = $1");
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete pc", e))?;
        Ok(())
    }
}
