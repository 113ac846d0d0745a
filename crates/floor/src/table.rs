use core::str::FromStr;

use serde::{Deserialize, Serialize};

use restopos_core::{DomainError, DomainResult, Entity, OrderId};

/// Table status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

impl TableStatus {
    pub const ALL: [TableStatus; 4] = [
        TableStatus::Available,
        TableStatus::Occupied,
        TableStatus::Reserved,
        TableStatus::Cleaning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "Available",
            TableStatus::Occupied => "Occupied",
            TableStatus::Reserved => "Reserved",
            TableStatus::Cleaning => "Cleaning",
        }
    }
}

impl core::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the canonical names.
impl FromStr for TableStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown table status '{s}'")))
    }
}

/// Seating unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    number: u32,
    capacity: u32,
    status: TableStatus,
    current_order: Option<OrderId>,
}

impl Table {
    /// New tables start out `Available` with no order attached.
    pub fn new(number: u32, capacity: u32) -> Self {
        Self {
            number,
            capacity,
            status: TableStatus::Available,
            current_order: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn current_order(&self) -> Option<OrderId> {
        self.current_order
    }

    /// Set the status from its textual name. Unknown names leave the table
    /// untouched.
    pub fn set_status(&mut self, status: &str) -> DomainResult<()> {
        let status = status.parse::<TableStatus>()?;
        self.transition(status);
        Ok(())
    }

    /// Any status may follow any other.
    pub fn transition(&mut self, status: TableStatus) {
        self.status = status;
    }

    /// Attach an order to the table. Status is managed separately.
    pub fn seat(&mut self, order_id: OrderId) {
        self.current_order = Some(order_id);
    }

    pub fn clear(&mut self) -> Option<OrderId> {
        self.current_order.take()
    }
}

impl Entity for Table {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_available_and_empty() {
        let table = Table::new(1, 4);
        assert_eq!(table.number(), 1);
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.status(), TableStatus::Available);
        assert!(table.current_order().is_none());
    }

    #[test]
    fn set_status_accepts_canonical_names() {
        let mut table = Table::new(1, 4);

        table.set_status("Occupied").unwrap();
        assert_eq!(table.status(), TableStatus::Occupied);

        table.set_status("Cleaning").unwrap();
        assert_eq!(table.status(), TableStatus::Cleaning);
    }

    #[test]
    fn set_status_rejects_unknown_and_keeps_state() {
        let mut table = Table::new(1, 4);
        table.transition(TableStatus::Cleaning);

        for bad in ["Invalid", "occupied", "RESERVED", "", " Available"] {
            let err = table.set_status(bad).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert_eq!(table.status(), TableStatus::Cleaning);
        }
    }

    #[test]
    fn seat_and_clear_track_current_order() {
        let mut table = Table::new(6, 8);
        let order_id = OrderId::generate();

        table.seat(order_id);
        assert_eq!(table.current_order(), Some(order_id));

        assert_eq!(table.clear(), Some(order_id));
        assert!(table.current_order().is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Canonical names, near misses, and arbitrary text in similar measure.
        fn status_input() -> impl Strategy<Value = String> {
            prop_oneof![
                prop::sample::select(TableStatus::ALL.to_vec())
                    .prop_map(|status| status.as_str().to_string()),
                prop::sample::select(TableStatus::ALL.to_vec()).prop_map(|status| {
                    let name = status.as_str();
                    if name.len() % 2 == 0 {
                        name.to_ascii_lowercase()
                    } else {
                        format!(" {name}")
                    }
                }),
                "[A-Za-z ]{0,12}",
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: set_status succeeds exactly for the four canonical names and
            /// never changes state on failure.
            #[test]
            fn set_status_accepts_only_canonical_values(input in status_input()) {
                let mut table = Table::new(3, 2);
                table.transition(TableStatus::Reserved);

                let canonical = TableStatus::ALL.iter().any(|s| s.as_str() == input);
                let result = table.set_status(&input);

                prop_assert_eq!(result.is_ok(), canonical);
                if canonical {
                    prop_assert_eq!(table.status().as_str(), input.as_str());
                } else {
                    prop_assert_eq!(table.status(), TableStatus::Reserved);
                }
            }
        }
    }
}
