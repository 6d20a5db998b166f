//! Session state: the stored role and the repository boundary for it.

pub mod model;
pub mod repository;

pub use model::SessionState;
pub use repository::RoleRepository;
