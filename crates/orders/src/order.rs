use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use restopos_core::{AggregateRoot, DomainError, DomainResult, Money, OrderId, StaffId};
use restopos_floor::Table;
use restopos_menu::MenuItem;
use restopos_staff::{Capability, Staff, authorize};

use crate::OrderItem;

/// Flat sales tax applied on top of the subtotal (7%).
pub const TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Aggregate root: Order.
///
/// Open orders accept new lines; closing is one-way and only blocks
/// `add_item`. Voids and comps stay possible on a closed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    table_number: u32,
    staff_id: StaffId,
    items: Vec<OrderItem>,
    is_closed: bool,
    payment_method: Option<String>,
    version: u64,
}

impl Order {
    /// Open a new order for `table`, served by `staff`.
    pub fn new(table: &Table, staff: &Staff) -> Self {
        Self::with_id(OrderId::generate(), table, staff)
    }

    pub fn with_id(id: OrderId, table: &Table, staff: &Staff) -> Self {
        Self {
            id,
            table_number: table.number(),
            staff_id: staff.staff_id().clone(),
            items: Vec::new(),
            is_closed: false,
            payment_method: None,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn table_number(&self) -> u32 {
        self.table_number
    }

    /// The server the order was opened by.
    pub fn staff_id(&self) -> &StaffId {
        &self.staff_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    /// Append a line. Rejected when the order is closed, the item is
    /// unavailable, `quantity` is zero, or the taxed total would no longer
    /// fit in a `Money`.
    pub fn add_item(&mut self, menu_item: &MenuItem, quantity: u32) -> DomainResult<()> {
        if self.is_closed {
            return self.reject(DomainError::conflict("cannot add items to a closed order"));
        }
        if !menu_item.is_available() {
            return self.reject(DomainError::validation(format!(
                "menu item '{}' is unavailable",
                menu_item.code()
            )));
        }
        if quantity == 0 {
            return self.reject(DomainError::validation("quantity must be positive"));
        }
        let fits = menu_item
            .price()
            .checked_mul(Decimal::from(quantity))
            .and_then(|line| self.gross_subtotal()?.checked_add(line))
            .and_then(|subtotal| subtotal.checked_mul(Decimal::ONE + TAX_RATE));
        if fits.is_none() {
            return self.reject(DomainError::validation(format!(
                "{quantity} x '{}' would overflow the order total",
                menu_item.code()
            )));
        }

        self.items.push(OrderItem::new(menu_item.clone(), quantity));
        self.version += 1;
        tracing::debug!(
            order_id = %self.id,
            code = %menu_item.code(),
            quantity,
            line = self.items.len() - 1,
            "line added"
        );
        Ok(())
    }

    /// Void line `index` on behalf of `staff`, whose own role must allow voids.
    /// Voiding an already voided line succeeds again.
    pub fn void_item(&mut self, index: usize, staff: &Staff) -> DomainResult<()> {
        self.flag_line(index, staff, Capability::Void)
    }

    /// Comp line `index` on behalf of `staff`, whose own role must allow comps.
    pub fn comp_item(&mut self, index: usize, staff: &Staff) -> DomainResult<()> {
        self.flag_line(index, staff, Capability::Comp)
    }

    /// Sum of billable line totals, before tax.
    ///
    /// `add_item` keeps the taxed sum of every line within range, so the
    /// totals below never overflow.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    pub fn total(&self, include_tax: bool) -> Money {
        let subtotal = self.subtotal();
        if include_tax {
            subtotal * (Decimal::ONE + TAX_RATE)
        } else {
            subtotal
        }
    }

    pub fn tax(&self) -> Money {
        self.subtotal() * TAX_RATE
    }

    pub fn set_payment_method(&mut self, payment_method: impl Into<String>) {
        self.payment_method = Some(payment_method.into());
        self.version += 1;
    }

    /// Mark the order closed. There is no way back to open.
    pub fn close(&mut self, payment_method: Option<String>) {
        if payment_method.is_some() {
            self.payment_method = payment_method;
        }
        self.is_closed = true;
        self.version += 1;
        tracing::debug!(
            order_id = %self.id,
            payment_method = self.payment_method.as_deref().unwrap_or("-"),
            "order closed"
        );
    }

    fn flag_line(&mut self, index: usize, staff: &Staff, capability: Capability) -> DomainResult<()> {
        if index >= self.items.len() {
            return self.reject(DomainError::not_found(format!(
                "line {index} (order has {} lines)",
                self.items.len()
            )));
        }
        if let Err(err) = authorize(staff, capability) {
            return self.reject(err.into());
        }

        let line = &mut self.items[index];
        match capability {
            Capability::Void => line.mark_voided(),
            Capability::Comp => line.mark_comped(),
        }
        self.version += 1;
        tracing::debug!(
            order_id = %self.id,
            line = index,
            staff_id = %staff.staff_id(),
            action = %capability,
            "line flagged"
        );
        Ok(())
    }

    /// Sum over every line as if none were voided or comped.
    fn gross_subtotal(&self) -> Option<Money> {
        self.items.iter().try_fold(Decimal::ZERO, |acc, line| {
            line.menu_item()
                .price()
                .checked_mul(Decimal::from(line.quantity()))
                .and_then(|amount| acc.checked_add(amount))
        })
    }

    fn reject(&self, err: DomainError) -> DomainResult<()> {
        tracing::warn!(order_id = %self.id, error = %err, "order mutation rejected");
        Err(err)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
