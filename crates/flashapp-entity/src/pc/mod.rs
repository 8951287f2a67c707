//! Pc domain entity.

pub mod model;

pub use model::{COLLECTION, Pc};
