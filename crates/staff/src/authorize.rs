use thiserror::Error;

use restopos_core::{DomainError, StaffId};

use crate::{Capability, Staff};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("staff '{0}' has no role")]
    NoRole(StaffId),

    #[error("forbidden: staff '{staff}' may not {capability}")]
    Forbidden {
        staff: StaffId,
        capability: Capability,
    },
}

impl From<AuthzError> for DomainError {
    fn from(err: AuthzError) -> Self {
        DomainError::unauthorized(err.to_string())
    }
}

/// Check that `staff` holds `capability` through their role.
///
/// - No IO
/// - No panics
/// - Only the acting member's role is consulted
pub fn authorize(staff: &Staff, capability: Capability) -> Result<(), AuthzError> {
    let role = staff
        .role()
        .ok_or_else(|| AuthzError::NoRole(staff.staff_id().clone()))?;

    if role.permits(capability) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            staff: staff.staff_id().clone(),
            capability,
        })
    }
}
