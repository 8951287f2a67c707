//! In-memory Pc repository using a concurrent map.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use flashapp_core::result::AppResult;
use flashapp_core::traits::Repository;
use flashapp_entity::pc::Pc;

/// Pc repository that keeps documents in process memory.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPcRepository {
    documents: Arc<DashMap<String, Pc>>,
}

impl MemoryPcRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the repository holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl Repository<Pc, str> for MemoryPcRepository {
    async fn save(&self, mut entity: Pc) -> AppResult<Pc> {
        let id = match &entity.id {
            Some(id) => id.clone(),
            None => {
                let id = Uuid::new_v4().simple().to_string();
                debug!(%id, "Assigned id to new pc");
                entity.id = Some(id.clone());
                id
            }
        };
        self.documents.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Pc>> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Pc>> {
        let mut all: Vec<Pc> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.documents.contains_key(id))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        self.documents.remove(id);
        Ok(())
    }
}
