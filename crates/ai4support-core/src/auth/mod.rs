//! Authentication domain: roles, the fixed credential table, and route
//! guard decisions.
//!
//! This is a prototype-grade boundary. Credentials are compile-time
//! constants and the "session" is nothing more than the stored role.

pub mod credentials;
pub mod model;

pub use credentials::verify_credentials;
pub use model::{Role, RouteDecision, decide_route};
