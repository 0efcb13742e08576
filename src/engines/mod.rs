//! Search engine module
//!
//! Defines the Engine record and the ordered catalog the selection indexes into.

mod catalog;
mod engine;

pub use catalog::Catalog;
pub use engine::{Engine, QUERY_PLACEHOLDER};
