//! Reusable view components for admin templates.

pub mod chrome;

pub use chrome::{Chrome, IdentityView, NavItemView};
