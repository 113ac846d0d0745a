//! Restaurant orders domain module.
//!
//! The order aggregate owns its lines, gates voids and comps on the acting
//! staff member's role, and computes totals with tax. No IO.

pub mod item;
pub mod order;

pub use item::OrderItem;
pub use order::{Order, TAX_RATE};
