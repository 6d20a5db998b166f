//! Fixed credential pairs for the prototype login flow.
//!
//! There is no real authentication here: one hard-coded email/password pair
//! per role, compared verbatim. Any mismatch yields the same generic
//! `InvalidCredentials` error.

use crate::auth::model::Role;
use crate::error::{Result, SupportError};

const USER_EMAIL: &str = "user@gmail.com";
const USER_PASSWORD: &str = "userchat";

const ADMIN_EMAIL: &str = "admin@gmail.com";
const ADMIN_PASSWORD: &str = "adminchat";

/// Checks the given credentials against the fixed pair for `role`.
///
/// Returns the role on success so callers can chain straight into storing
/// it. The error carries no detail about which field was wrong.
pub fn verify_credentials(role: Role, email: &str, password: &str) -> Result<Role> {
    let (expected_email, expected_password) = match role {
        Role::User => (USER_EMAIL, USER_PASSWORD),
        Role::Admin => (ADMIN_EMAIL, ADMIN_PASSWORD),
    };

    if email == expected_email && password == expected_password {
        Ok(role)
    } else {
        Err(SupportError::InvalidCredentials)
    }
}
