use serde::{Deserialize, Serialize};

use restopos_core::{Entity, OrderId, StaffId};

use crate::StaffRole;

/// A staff member on shift.
///
/// The role is a copy of the reference role; a member without a role holds no
/// capabilities at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    id: StaffId,
    name: String,
    role: Option<StaffRole>,
    active_orders: Vec<OrderId>,
}

impl Staff {
    pub fn new(id: StaffId, name: impl Into<String>, role: Option<StaffRole>) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            active_orders: Vec::new(),
        }
    }

    pub fn staff_id(&self) -> &StaffId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Option<&StaffRole> {
        self.role.as_ref()
    }

    pub fn active_orders(&self) -> &[OrderId] {
        &self.active_orders
    }

    /// Track an order this member is serving. Nothing in the order flow calls
    /// this implicitly.
    pub fn assign_order(&mut self, order_id: OrderId) {
        self.active_orders.push(order_id);
    }
}

impl Entity for Staff {
    type Id = StaffId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
