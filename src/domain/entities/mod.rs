//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, with separate
//! structs for creation and partial update:
//!
//! - [`Product`] - A stored catalog product
//! - [`NewProduct`] - Input for the create operation
//! - [`ProductPatch`] - Present-vs-absent field set for partial updates

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
