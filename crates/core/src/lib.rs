//! `miniops-core` — shared domain building blocks for the demo suite.
//!
//! This crate contains **pure domain** primitives (no IO, no printing): the
//! `Entity` trait, the generic in-memory `Repository<T>`, and the error model
//! shared by all four demos.

pub mod entity;
pub mod error;
pub mod repository;

pub use entity::{Entity, Quantified};
pub use error::{DomainError, DomainResult};
pub use repository::Repository;
