//! HTTP request handlers.

pub mod domain;
pub mod health;
pub mod template;
