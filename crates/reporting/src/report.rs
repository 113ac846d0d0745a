use std::io::{self, Write};

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use restopos_core::money::{self, Money};
use restopos_core::{AggregateRoot, DomainError, DomainResult, OrderId};
use restopos_orders::Order;

/// Time-of-day window a report is requested for.
///
/// Orders carry no timestamp, so the window is recorded but never used to
/// filter: every collected order is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl TimeWindow {
    pub fn new(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// One order's contribution to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub table_number: u32,
    /// Tax-inclusive, unrounded.
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub window: TimeWindow,
    pub orders: Vec<OrderLine>,
    pub total_sales: Money,
}

/// Collects orders for a shift and renders their sales.
///
/// Orders are borrowed, never mutated. Open orders and repeated orders are
/// accepted as given.
#[derive(Debug, Default)]
pub struct RestaurantReport<'a> {
    orders: Vec<&'a Order>,
}

impl<'a> RestaurantReport<'a> {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn add_order(&mut self, order: &'a Order) {
        self.orders.push(order);
    }

    /// Fails only when the combined sales no longer fit in a `Money`.
    pub fn summary(&self, window: TimeWindow) -> DomainResult<SalesSummary> {
        if !window.is_unbounded() {
            tracing::debug!(
                start = ?window.start,
                end = ?window.end,
                "orders carry no timestamp; time window not applied"
            );
        }

        let orders: Vec<OrderLine> = self
            .orders
            .iter()
            .map(|order| OrderLine {
                order_id: *order.id(),
                table_number: order.table_number(),
                total: order.total(true),
            })
            .collect();
        let total_sales = orders
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.total))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "total sales over {} orders overflow",
                    orders.len()
                ))
            })?;

        Ok(SalesSummary {
            window,
            orders,
            total_sales,
        })
    }

    /// Render the plain-text report:
    ///
    /// ```text
    /// --- Restaurant Report ---
    /// Table: 1, Total: 21.40
    /// Total Sales: 21.40
    /// ```
    pub fn write_report<W: Write>(&self, window: TimeWindow, out: &mut W) -> io::Result<()> {
        let summary = self.summary(window).map_err(io::Error::other)?;

        writeln!(out)?;
        writeln!(out, "--- Restaurant Report ---")?;
        for line in &summary.orders {
            writeln!(
                out,
                "Table: {}, Total: {}",
                line.table_number,
                money::format_amount(line.total)
            )?;
        }
        writeln!(out, "Total Sales: {}", money::format_amount(summary.total_sales))?;
        writeln!(out)?;

        tracing::info!(
            orders = summary.orders.len(),
            total_sales = %money::format_amount(summary.total_sales),
            "report generated"
        );
        Ok(())
    }

    /// Print the report to stdout.
    pub fn generate_report(
        &self,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    ) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(TimeWindow::new(start_time, end_time), &mut out)?;
        out.flush()
    }
}
