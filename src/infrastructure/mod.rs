//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and credential verification.
//!
//! # Modules
//!
//! - [`auth`] - Bearer-credential verification (remote key set and fixed-key implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod auth;
pub mod persistence;
