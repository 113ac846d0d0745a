use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use restopos_core::Money;
use restopos_menu::MenuItem;

/// One purchased line of an order.
///
/// Holds a snapshot of the menu item as it was when the line was rung up.
/// Voided and comped are independent flags; either one zeroes the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    menu_item: MenuItem,
    quantity: u32,
    voided: bool,
    comped: bool,
}

impl OrderItem {
    pub(crate) fn new(menu_item: MenuItem, quantity: u32) -> Self {
        Self {
            menu_item,
            quantity,
            voided: false,
            comped: false,
        }
    }

    pub fn menu_item(&self) -> &MenuItem {
        &self.menu_item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn voided(&self) -> bool {
        self.voided
    }

    pub fn comped(&self) -> bool {
        self.comped
    }

    pub fn is_billable(&self) -> bool {
        !(self.voided || self.comped)
    }

    /// `price * quantity`, or zero once the line is voided or comped.
    pub fn total(&self) -> Money {
        if !self.is_billable() {
            return Decimal::ZERO;
        }
        self.menu_item.price() * Decimal::from(self.quantity)
    }

    pub(crate) fn mark_voided(&mut self) {
        self.voided = true;
    }

    pub(crate) fn mark_comped(&mut self) {
        self.comped = true;
    }
}
