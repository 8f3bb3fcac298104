//! Tangelo Core - Shared types library.
//!
//! This crate provides common types used across all Tangelo components:
//! - `schema` - Relational schema and repositories for the storefront
//! - `integration-tests` - Schema-level integration tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, slugs, prices,
//!   and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
