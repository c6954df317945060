//! Core types for Inventory Pro.
//!
//! This module provides type-safe wrappers for the inventory domain.

pub mod email;
pub mod id;
pub mod identity;
pub mod item;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use identity::Identity;
pub use item::{Item, ItemDraft};
pub use price::{CurrencyCode, NegativePrice, Price, group_thousands};
pub use status::{Role, StockStatus};
