//! Repository boundary for the stored role.

use crate::auth::Role;
use crate::error::Result;

/// Storage abstraction for the active role.
///
/// The adapter is injected as a capability wherever the role is needed;
/// nothing in the application reaches for ambient global state. Absent or
/// unparseable stored values must read back as `None`.
#[async_trait::async_trait]
pub trait RoleRepository: Send + Sync {
    /// Returns the stored role, or `None` when absent or invalid.
    async fn get_role(&self) -> Option<Role>;

    /// Stores the given role, replacing any previous value.
    async fn set_role(&self, role: Role) -> Result<()>;

    /// Removes the stored role.
    async fn clear(&self) -> Result<()>;
}
