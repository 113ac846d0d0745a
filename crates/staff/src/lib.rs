//! `restopos-staff` — staff identity and capability checks.
//!
//! Pure policy: no storage, no authentication of who is at the terminal.

pub mod authorize;
pub mod capability;
pub mod member;
pub mod role;

pub use authorize::{AuthzError, authorize};
pub use capability::Capability;
pub use member::Staff;
pub use role::{StaffRole, find_role};
