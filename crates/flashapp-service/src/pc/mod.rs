//! Pc management.

pub mod service;

pub use service::PcService;
