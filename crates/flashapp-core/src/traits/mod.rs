//! Core traits defined in `flashapp-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
