//! Request and session models for the admin panel.

pub mod item_form;
pub mod session;

pub use item_form::{FieldErrors, ItemForm};
