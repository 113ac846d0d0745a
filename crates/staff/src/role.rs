use serde::{Deserialize, Serialize};

use restopos_core::{DomainError, DomainResult, ValueObject};

use crate::Capability;

/// Named permission set shared by every staff member holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRole {
    role: String,
    /// Staff meal discount, whole percent.
    discount: u8,
    can_void: bool,
    can_comp: bool,
}

impl StaffRole {
    /// Fails unless `discount` is within 0..=100.
    pub fn new(
        role: impl Into<String>,
        discount: i64,
        can_void: bool,
        can_comp: bool,
    ) -> DomainResult<Self> {
        let discount = u8::try_from(discount)
            .ok()
            .filter(|percent| *percent <= 100)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "discount must be within 0..=100 (got {discount})"
                ))
            })?;
        Ok(Self {
            role: role.into(),
            discount,
            can_void,
            can_comp,
        })
    }

    pub fn name(&self) -> &str {
        &self.role
    }

    pub fn discount(&self) -> u8 {
        self.discount
    }

    pub fn can_void(&self) -> bool {
        self.can_void
    }

    pub fn can_comp(&self) -> bool {
        self.can_comp
    }

    pub fn permits(&self, capability: Capability) -> bool {
        match capability {
            Capability::Void => self.can_void,
            Capability::Comp => self.can_comp,
        }
    }
}

impl ValueObject for StaffRole {}

/// Linear lookup by exact (case-sensitive) role name; first match wins.
pub fn find_role<'a>(roles: &'a [StaffRole], name: &str) -> Option<&'a StaffRole> {
    roles.iter().find(|role| role.role == name)
}
