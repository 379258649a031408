//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod product_repository;

pub use product_repository::ProductRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
