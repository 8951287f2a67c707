//! # flashapp-entity
//!
//! Domain entity models for FlashApp. Every struct in this crate represents
//! a stored document. Entities derive `Debug`, `Clone`, `Serialize`,
//! `Deserialize` and `sqlx::FromRow`.

pub mod pc;

pub use pc::Pc;
