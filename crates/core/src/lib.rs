//! Inventory Pro Core - Shared domain types.
//!
//! This crate provides the types shared by the Inventory Pro crates:
//! - `admin` - The inventory web panel (sign-in, dashboard, catalog, editor)
//! - `integration-tests` - HTTP-level tests against the panel router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no async runtime.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, emails, roles and the catalog item

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
