//! Domain management services.

pub mod service;

pub use service::DomainService;
