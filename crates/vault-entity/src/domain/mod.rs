//! Domain (category) entities.

pub mod model;
pub mod tree;

pub use model::{CreateDomain, Domain, DomainSummary, UpdateDomain};
pub use tree::{DomainNode, build_forest};
