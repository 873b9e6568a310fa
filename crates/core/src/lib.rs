//! `stockcast-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): strongly-typed identifiers and the error model shared by the
//! forecasting and inventory crates.

pub mod error;
pub mod id;

pub use error::{EngineError, EngineResult};
pub use id::ProductId;
