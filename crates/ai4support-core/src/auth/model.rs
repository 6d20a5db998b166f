use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two roles the prototype knows about.
///
/// Serialized as the lowercase strings `"user"` and `"admin"`, which is also
/// the on-disk representation in the session file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// The route the frontend navigates to after a successful login.
    pub fn route(&self) -> &'static str {
        match self {
            Role::User => "/user",
            Role::Admin => "/admin",
        }
    }
}

/// Outcome of the route guard for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// The stored role matches the required role; render the view.
    Allow,
    /// No stored role, or a role mismatch; navigate back to `/`.
    RedirectToLogin,
}

/// Pure route guard decision.
///
/// Both "not logged in" and "logged in with the wrong role" collapse to a
/// redirect; the caller performs the navigation side effect.
pub fn decide_route(required: Role, current: Option<Role>) -> RouteDecision {
    match current {
        Some(role) if role == required => RouteDecision::Allow,
        _ => RouteDecision::RedirectToLogin,
    }
}
