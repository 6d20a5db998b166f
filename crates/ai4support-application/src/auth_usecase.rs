//! Login, logout, and route guarding over an injected role store.

use std::sync::Arc;

use ai4support_core::auth::{Role, RouteDecision, decide_route, verify_credentials};
use ai4support_core::error::Result;
use ai4support_core::session::RoleRepository;

/// Use case for the prototype's authentication flows.
///
/// The role store is a capability handed in at construction; this type
/// never reaches for global state.
pub struct AuthUseCase {
    role_repository: Arc<dyn RoleRepository>,
}

impl AuthUseCase {
    pub fn new(role_repository: Arc<dyn RoleRepository>) -> Self {
        Self { role_repository }
    }

    /// Attempts a login with the fixed credential table.
    ///
    /// On success the previous role (if any) is cleared before the new one
    /// is stored, so a half-written state can never outlive a failed save.
    /// On bad credentials nothing is stored.
    pub async fn login(&self, role: Role, email: &str, password: &str) -> Result<Role> {
        let role = verify_credentials(role, email, password)?;

        self.role_repository.clear().await?;
        self.role_repository.set_role(role).await?;
        tracing::info!("Logged in as {}", role);
        Ok(role)
    }

    /// Clears the stored role.
    pub async fn logout(&self) -> Result<()> {
        self.role_repository.clear().await
    }

    /// The currently stored role, if any.
    pub async fn current_role(&self) -> Option<Role> {
        self.role_repository.get_role().await
    }

    /// Route guard: may the current session see a view requiring `required`?
    pub async fn guard(&self, required: Role) -> RouteDecision {
        decide_route(required, self.current_role().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai4support_core::SupportError;
    use tokio::sync::Mutex;

    /// In-memory role store for tests.
    #[derive(Default)]
    struct MemoryRoleStore {
        role: Mutex<Option<Role>>,
    }

    #[async_trait::async_trait]
    impl RoleRepository for MemoryRoleStore {
        async fn get_role(&self) -> Option<Role> {
            *self.role.lock().await
        }

        async fn set_role(&self, role: Role) -> Result<()> {
            *self.role.lock().await = Some(role);
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.role.lock().await = None;
            Ok(())
        }
    }

    fn usecase() -> AuthUseCase {
        AuthUseCase::new(Arc::new(MemoryRoleStore::default()))
    }

    #[tokio::test]
    async fn test_user_login_stores_role_and_routes_to_user() {
        let auth = usecase();
        let role = auth
            .login(Role::User, "user@gmail.com", "userchat")
            .await
            .unwrap();
        assert_eq!(role, Role::User);
        assert_eq!(role.route(), "/user");
        assert_eq!(auth.current_role().await, Some(Role::User));
    }

    #[tokio::test]
    async fn test_admin_login_routes_to_admin() {
        let auth = usecase();
        let role = auth
            .login(Role::Admin, "admin@gmail.com", "adminchat")
            .await
            .unwrap();
        assert_eq!(role.route(), "/admin");
    }

    #[tokio::test]
    async fn test_bad_credentials_store_nothing() {
        let auth = usecase();
        let err = auth
            .login(Role::Admin, "admin@gmail.com", "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, SupportError::InvalidCredentials));
        assert!(auth.current_role().await.is_none());
    }

    #[tokio::test]
    async fn test_login_replaces_a_previous_role() {
        let auth = usecase();
        auth.login(Role::User, "user@gmail.com", "userchat")
            .await
            .unwrap();
        auth.login(Role::Admin, "admin@gmail.com", "adminchat")
            .await
            .unwrap();
        assert_eq!(auth.current_role().await, Some(Role::Admin));
    }

    #[tokio::test]
    async fn test_guard_redirects_wrong_or_missing_role() {
        let auth = usecase();
        assert_eq!(auth.guard(Role::Admin).await, RouteDecision::RedirectToLogin);

        auth.login(Role::User, "user@gmail.com", "userchat")
            .await
            .unwrap();
        assert_eq!(auth.guard(Role::Admin).await, RouteDecision::RedirectToLogin);
        assert_eq!(auth.guard(Role::User).await, RouteDecision::Allow);
    }

    #[tokio::test]
    async fn test_logout_clears_the_role() {
        let auth = usecase();
        auth.login(Role::User, "user@gmail.com", "userchat")
            .await
            .unwrap();
        auth.logout().await.unwrap();
        assert!(auth.current_role().await.is_none());
        assert_eq!(auth.guard(Role::User).await, RouteDecision::RedirectToLogin);
    }
}
