//! Menu catalog domain module.
//!
//! Menu items are long-lived reference data loaded once at startup.

pub mod item;

pub use item::{MenuItem, find_item};
