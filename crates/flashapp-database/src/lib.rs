//! # flashapp-database
//!
//! Store connection management and concrete repository implementations:
//! PostgreSQL for deployments and an in-memory map for tests and demos.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryPcRepository;
pub use provider::{PcStore, connect_store};
pub use repositories::PgPcRepository;
