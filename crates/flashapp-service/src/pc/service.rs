//! Pc create, update, merge-patch, read and delete rules.

use std::sync::Arc;

use tracing::debug;

use flashapp_core::error::AppError;
use flashapp_core::result::AppResult;
use flashapp_core::traits::Repository;
use flashapp_entity::pc::Pc;

/// Manages Pc records on top of the configured repository.
#[derive(Clone)]
pub struct PcService {
    /// Pc repository.
    repo: Arc<dyn Repository<Pc, str>>,
}

impl std::fmt::Debug for PcService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcService").finish_non_exhaustive()
    }
}

impl PcService {
    /// Creates a new Pc service.
    pub fn new(repo: Arc<dyn Repository<Pc, str>>) -> Self {
        Self { repo }
    }

    /// Persists a new Pc. The store assigns the id.
    pub async fn create(&self, pc: Pc) -> AppResult<Pc> {
        debug!(%pc, "Request to save Pc");
        if pc.id.is_some() {
            return Err(AppError::bad_request(
                "A new pc cannot already have an ID",
                "idexists",
            ));
        }
        self.repo.save(pc).await
    }

    /// Replaces the stored Pc identified by `id` with `pc`.
    pub async fn update(&self, id: &str, pc: Pc) -> AppResult<Pc> {
        debug!(%id, %pc, "Request to update Pc");
        self.check_target(id, &pc).await?;
        self.repo.save(pc).await
    }

    /// Copies the non-null fields of `patch` onto the stored Pc.
    pub async fn partial_update(&self, id: &str, patch: Pc) -> AppResult<Pc> {
        debug!(%id, %patch, "Request to partially update Pc");
        self.check_target(id, &patch).await?;

        let mut existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pc not found"))?;
        existing.merge_from(&patch);
        self.repo.save(existing).await
    }

    /// Returns every stored Pc.
    pub async fn find_all(&self) -> AppResult<Vec<Pc>> {
        debug!("Request to get all Pcs");
        self.repo.find_all().await
    }

    /// Returns the Pc with this id.
    pub async fn find_one(&self, id: &str) -> AppResult<Pc> {
        debug!(%id, "Request to get Pc");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pc not found"))
    }

    /// Removes the Pc with this id. Missing ids are ignored.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        debug!(%id, "Request to delete Pc");
        self.repo.delete_by_id(id).await
    }

    /// Shared id checks for full and partial updates.
    async fn check_target(&self, id: &str, pc: &Pc) -> AppResult<()> {
        let body_id = pc
            .id()
            .ok_or_else(|| AppError::bad_request("Invalid id", "idnull"))?;
        if body_id != id {
            return Err(AppError::bad_request("Invalid ID", "idinvalid"));
        }
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::bad_request("Entity not found", "idnotfound"));
        }
        Ok(())
    }
}
