//! The scripted lunch service: three tables, two servers, one manager.

use anyhow::{Context, Result};
use chrono::NaiveTime;

use restopos_core::{AggregateRoot, StaffId};
use restopos_floor::{Table, TableStatus};
use restopos_loader::ReferenceData;
use restopos_menu::{MenuItem, find_item};
use restopos_orders::Order;
use restopos_reporting::{RestaurantReport, TimeWindow};
use restopos_staff::{Staff, StaffRole, find_role};

/// State left behind after the lunch service.
#[derive(Debug)]
pub struct LunchShift {
    pub staff: Vec<Staff>,
    pub tables: Vec<Table>,
    pub orders: Vec<Order>,
}

impl LunchShift {
    /// Report over every order of the shift, in the order they were rung up.
    pub fn report(&self) -> RestaurantReport<'_> {
        let mut report = RestaurantReport::new();
        for order in &self.orders {
            report.add_order(order);
        }
        report
    }
}

/// 11:00 to 15:00.
pub fn lunch_window() -> TimeWindow {
    TimeWindow::new(
        NaiveTime::from_hms_opt(11, 0, 0),
        NaiveTime::from_hms_opt(15, 0, 0),
    )
}

/// Lines to ring up as (menu code, quantity).
type Ticket<'a> = &'a [(&'a str, u32)];

pub fn simulate_lunch(data: ReferenceData) -> Result<LunchShift> {
    let ReferenceData {
        menu_items,
        staff_roles,
        mut tables,
    } = data;

    let mut server1 = hire(&staff_roles, "S001", "John Smith", "Server")?;
    let mut server2 = hire(&staff_roles, "S002", "Jane Doe", "Server")?;
    let manager = hire(&staff_roles, "M001", "Mike Wilson", "Manager")?;

    let mut orders = Vec::new();

    // Regular order.
    let mut order1 = open_order(
        &mut tables,
        0,
        &mut server1,
        &menu_items,
        &[("APP01", 2), ("ENT01", 1), ("DRK01", 2)],
    )?;
    order1.close(Some("Credit Card".to_string()));
    orders.push(order1);

    // Manager voids the sodas and comps the dessert.
    let mut order2 = open_order(
        &mut tables,
        2,
        &mut server2,
        &menu_items,
        &[("ENT02", 2), ("DRK02", 2), ("DES01", 1)],
    )?;
    order2.void_item(1, &manager).context("voiding sodas")?;
    order2.comp_item(2, &manager).context("comping dessert")?;
    order2.close(Some("Cash".to_string()));
    orders.push(order2);

    // Large party.
    let mut order3 = open_order(
        &mut tables,
        5,
        &mut server1,
        &menu_items,
        &[("APP02", 3), ("ENT03", 4), ("DRK02", 6), ("DES01", 2)],
    )?;
    order3.close(Some("Credit Card".to_string()));
    orders.push(order3);

    for order in &orders {
        tracing::info!(
            order_id = %order.id(),
            table = order.table_number(),
            lines = order.items().len(),
            version = order.version(),
            "order settled"
        );
    }

    Ok(LunchShift {
        staff: vec![server1, server2, manager],
        tables,
        orders,
    })
}

fn hire(roles: &[StaffRole], id: &str, name: &str, role: &str) -> Result<Staff> {
    let found = find_role(roles, role).cloned();
    if found.is_none() {
        tracing::warn!(staff_id = id, role, "role not found; staff has no permissions");
    }
    Ok(Staff::new(StaffId::new(id)?, name, found))
}

fn menu_item<'a>(menu: &'a [MenuItem], code: &str) -> Result<&'a MenuItem> {
    find_item(menu, code).with_context(|| format!("menu item {code} not on the menu"))
}

/// Seat a table, open an order on it and ring up `ticket`.
fn open_order(
    tables: &mut [Table],
    table_idx: usize,
    server: &mut Staff,
    menu: &[MenuItem],
    ticket: Ticket<'_>,
) -> Result<Order> {
    let table = tables
        .get_mut(table_idx)
        .with_context(|| format!("no table at position {table_idx}"))?;
    table.transition(TableStatus::Occupied);

    let mut order = Order::new(table, server);
    table.seat(order.id_typed());
    server.assign_order(order.id_typed());

    for &(code, quantity) in ticket {
        let item = menu_item(menu, code)?;
        order
            .add_item(item, quantity)
            .with_context(|| format!("adding {quantity} x {code}"))?;
    }
    Ok(order)
}
