use serde::{Deserialize, Serialize};

/// What the current session is allowed to do.
///
/// Passed explicitly into the operations that need it; nothing in the gallery
/// core consults ambient session state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct Capabilities {
    pub logged_in: bool,
    pub admin: bool,
}

impl Capabilities {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        Self {
            logged_in: true,
            admin: true,
        }
    }

    pub fn viewer() -> Self {
        Self {
            logged_in: true,
            admin: false,
        }
    }
}
