use serde::{Deserialize, Serialize};

use restopos_core::money::{self, Money};
use restopos_core::{DomainResult, Entity, MenuCode};

/// Catalog entry.
///
/// New items start out available; the kitchen can toggle availability when a
/// dish runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    code: MenuCode,
    name: String,
    price: Money,
    category: String,
    available: bool,
}

impl MenuItem {
    /// Build an available menu item. Fails if `price` is negative.
    pub fn new(
        code: MenuCode,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> DomainResult<Self> {
        money::ensure_non_negative(price, "price")?;
        Ok(Self {
            code,
            name: name.into(),
            price,
            category: category.into(),
            available: true,
        })
    }

    pub fn code(&self) -> &MenuCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Flip availability; calling it twice restores the original state.
    pub fn toggle_availability(&mut self) {
        self.available = !self.available;
    }
}

impl Entity for MenuItem {
    type Id = MenuCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// First catalog entry whose code matches `code` exactly.
pub fn find_item<'a>(items: &'a [MenuItem], code: &str) -> Option<&'a MenuItem> {
    items.iter().find(|item| item.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use restopos_core::DomainError;
    use rust_decimal::Decimal;

    fn test_item(code: &str, cents: i64) -> MenuItem {
        MenuItem::new(
            MenuCode::new(code).unwrap(),
            "Test Item",
            Decimal::new(cents, 2),
            "Test",
        )
        .unwrap()
    }

    #[test]
    fn new_item_is_available_and_keeps_fields() {
        let item = test_item("TEST1", 1000);
        assert_eq!(item.code(), &MenuCode::new("TEST1").unwrap());
        assert_eq!(item.name(), "Test Item");
        assert_eq!(item.price(), Decimal::new(1000, 2));
        assert_eq!(item.category(), "Test");
        assert!(item.is_available());
    }

    #[test]
    fn toggle_availability_flips_state() {
        let mut item = test_item("TEST1", 1000);
        item.toggle_availability();
        assert!(!item.is_available());
        item.toggle_availability();
        assert!(item.is_available());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = MenuItem::new(
            MenuCode::new("BAD01").unwrap(),
            "Refund",
            Decimal::new(-100, 2),
            "Misc",
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_price_is_allowed() {
        let item = test_item("WTR01", 0);
        assert_eq!(item.price(), Decimal::ZERO);
    }

    #[test]
    fn find_item_matches_exact_code_first_wins() {
        let mut duplicate = test_item("APP01", 500);
        duplicate.toggle_availability();
        let items = vec![test_item("APP01", 899), duplicate, test_item("ENT01", 1499)];

        let found = find_item(&items, "APP01").unwrap();
        assert_eq!(found.price(), Decimal::new(899, 2));
        assert!(found.is_available());

        assert!(find_item(&items, "app01").is_none());
        assert!(find_item(&items, "DES01").is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: toggling availability twice is the identity.
            #[test]
            fn toggle_is_an_involution(cents in 0i64..1_000_000i64, start_unavailable in any::<bool>()) {
                let mut item = test_item("PROP1", cents);
                if start_unavailable {
                    item.toggle_availability();
                }
                let before = item.clone();

                item.toggle_availability();
                item.toggle_availability();

                prop_assert_eq!(item, before);
            }
        }
    }
}
