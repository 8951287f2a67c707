//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use flashapp_core::config::AppConfig;
use flashapp_database::PcStore;
use flashapp_service::PcService;

use crate::alert::AlertHeaders;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Configured store (repository + optional pool)
    pub store: PcStore,
    /// Alert header builder
    pub alerts: AlertHeaders,
    /// Pc business rules
    pub pc_service: Arc<PcService>,
}

impl AppState {
    /// Wire the state from configuration and an already connected store.
    pub fn new(config: AppConfig, store: PcStore) -> Self {
        let alerts = AlertHeaders::new(&config.application.name);
        let pc_service = Arc::new(PcService::new(Arc::clone(&store.repository)));
        Self {
            config: Arc::new(config),
            store,
            alerts,
            pc_service,
        }
    }
}
