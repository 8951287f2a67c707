//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Primitive document-store operations for one entity type.
///
/// Implementations delegate each call straight to the underlying store.
/// There is no caching and no transactional composition across calls.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + ?Sized + 'static,
{
    /// Insert the entity, or replace the stored one with the same id.
    ///
    /// When the entity has no id the store assigns one. Returns the
    /// entity as stored.
    async fn save(&self, entity: Entity) -> AppResult<Entity>;

    /// Find an entity by its id.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return every stored entity.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Check whether an entity with this id exists.
    async fn exists_by_id(&self, id: &Id) -> AppResult<bool>;

    /// Delete the entity with this id. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: &Id) -> AppResult<()>;
}
