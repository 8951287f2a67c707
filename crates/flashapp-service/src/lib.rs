//! # flashapp-service
//!
//! Business logic services for FlashApp. Services sit between the HTTP
//! handlers and the repositories and own the request validation rules.

pub mod pc;

pub use pc::PcService;
