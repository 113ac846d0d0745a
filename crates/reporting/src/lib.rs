//! Shift sales reporting over collected orders.

pub mod report;

pub use report::{OrderLine, RestaurantReport, SalesSummary, TimeWindow};
