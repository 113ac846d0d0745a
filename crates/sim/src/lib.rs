//! Lunch-shift simulation over the restaurant domain.

pub mod config;
pub mod shift;

pub use config::{ConfigError, SimConfig};
pub use shift::{LunchShift, lunch_window, simulate_lunch};
