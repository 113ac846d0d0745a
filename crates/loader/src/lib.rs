//! Flat-file loading of reference data (menu, staff roles, tables).
//!
//! Everything here runs once at startup; any failure is fatal to the caller.

pub mod error;
pub mod loader;
mod row;

pub use error::{LoadError, LoadResult};
pub use loader::{DataLoader, ReferenceData};
