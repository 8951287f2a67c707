//! PostgreSQL repository implementations.

pub mod pc;

pub use pc::PgPcRepository;
