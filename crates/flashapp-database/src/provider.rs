//! Store selection based on configuration.

use std::sync::Arc;

use tracing::info;

use flashapp_core::config::DatabaseConfig;
use flashapp_core::error::AppError;
use flashapp_core::result::AppResult;
use flashapp_core::traits::Repository;
use flashapp_entity::pc::Pc;

use crate::connection::DatabasePool;
use crate::memory::MemoryPcRepository;
use crate::migration::run_migrations;
use crate::repositories::PgPcRepository;

/// The configured Pc repository plus the pool behind it, if any.
#[derive(Clone)]
pub struct PcStore {
    /// Repository used by the service layer.
    pub repository: Arc<dyn Repository<Pc, str>>,
    /// PostgreSQL pool; `None` for the in-memory provider.
    pub pool: Option<DatabasePool>,
}

impl PcStore {
    /// Wrap an in-memory repository.
    pub fn memory(repository: MemoryPcRepository) -> Self {
        Self {
            repository: Arc::new(repository),
            pool: None,
        }
    }

    /// Name of the provider backing this store.
    pub fn provider_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Check store connectivity. The in-memory store is always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release pooled connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for PcStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcStore")
            .field("provider", &self.provider_name())
            .finish()
    }
}

/// Build the store named by `config.provider`.
///
/// For `postgres` this connects the pool and runs pending migrations.
pub async fn connect_store(config: &DatabaseConfig) -> AppResult<PcStore> {
    match config.provider.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL store");
            let pool = DatabasePool::connect(config).await?;
            run_migrations(pool.pool()).await?;
            Ok(PcStore {
                repository: Arc::new(PgPcRepository::new(pool.pool().clone())),
                pool: Some(pool),
            })
        }
        "memory" => {
            info!("Initializing in-memory store");
            Ok(PcStore::memory(MemoryPcRepository::new()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown database provider: '{other}'. Supported: postgres, memory"
        ))),
    }
}
