//! Dining-room floor: tables and their seating status.

pub mod table;

pub use table::{Table, TableStatus};
