use crate::error::{ApiError, AuthError};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, Role, Session};
use crate::stores::SessionStore;
use crate::utils::{BrowserStorage, KeyValueStore};

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// `/auth` endpoints
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

/// Login/register against the backend and keep the session store in sync.
/// Capability queries always read the store, never a cached copy.
pub struct AuthService<A, S = BrowserStorage> {
    api: A,
    store: SessionStore<S>,
}

impl<A, S: KeyValueStore> AuthService<A, S> {
    pub fn new(api: A, store: SessionStore<S>) -> Self {
        Self { api, store }
    }

    pub fn current_session(&self) -> Session {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.store.get().is_admin()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.get().role
    }

    /// Local only; the backend is not told.
    pub fn logout(&self) {
        match self.store.clear() {
            Ok(()) => log::info!("👋 [AUTH] Logged out"),
            Err(e) => log::error!("❌ [AUTH] Could not clear session: {}", e),
        }
    }
}

impl<A: AuthApi, S: KeyValueStore> AuthService<A, S> {
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.api.login(&request).await.map_err(|e| {
            log::error!("❌ [AUTH] Login failed: {}", e);
            AuthError::from_api(&e, LOGIN_FALLBACK)
        })?;

        let token = match response.token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => {
                log::error!("❌ [AUTH] Login response carried no token");
                return Err(AuthError::new(LOGIN_FALLBACK));
            }
        };
        let role = response.role.as_deref().unwrap_or_default();
        let stored_username = response.username.as_deref().unwrap_or(username);

        self.store.set(token, role, stored_username).map_err(|e| {
            log::error!("❌ [AUTH] Could not persist session: {}", e);
            AuthError::new(e.to_string())
        })?;

        log::info!("✅ [AUTH] Logged in as {} ({})", stored_username, role);
        Ok(self.store.get())
    }

    /// Does not log the new user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        self.api.register(request).await.map_err(|e| {
            log::error!("❌ [AUTH] Registration failed: {}", e);
            AuthError::from_api(&e, REGISTER_FALLBACK)
        })?;
        log::info!("✅ [AUTH] Registered {}", request.username);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::MockAuthApi;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;

    fn service(api: MockAuthApi) -> (AuthService<MockAuthApi, MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (AuthService::new(api, SessionStore::new(storage.clone())), storage)
    }

    #[test]
    fn login_persists_token_role_and_username() {
        let (auth, storage) = service(MockAuthApi::accepting("jwt-1", "ADMIN", "prof"));

        let session = block_on(auth.login("prof", "pw")).unwrap();

        assert!(session.is_admin());
        assert_eq!(storage.len(), 3);
        assert!(auth.is_authenticated());
        assert_eq!(auth.role(), Some(Role::Admin));
    }

    #[test]
    fn rejected_login_surfaces_backend_text_and_stores_nothing() {
        let (auth, storage) = service(MockAuthApi::failing(ApiError::from_status(
            401,
            Some("Invalid credentials".into()),
        )));

        let err = block_on(auth.login("ada", "wrong")).unwrap_err();

        assert_eq!(err.message, "Invalid credentials");
        assert!(storage.is_empty());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn unreachable_backend_reports_transport_message() {
        let (auth, _) = service(MockAuthApi::failing(ApiError::Network("Failed to fetch".into())));

        let err = block_on(auth.login("ada", "pw")).unwrap_err();

        assert_eq!(err.message, "Network Error: Failed to fetch");
    }

    #[test]
    fn login_without_token_is_a_failure() {
        let (auth, storage) = service(MockAuthApi::accepting("", "STUDENT", "ada"));

        let err = block_on(auth.login("ada", "pw")).unwrap_err();

        assert_eq!(err.message, "Login failed");
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_clears_the_store() {
        let (auth, storage) = service(MockAuthApi::accepting("jwt-1", "STUDENT", "ada"));
        block_on(auth.login("ada", "pw")).unwrap();

        auth.logout();

        assert!(storage.is_empty());
        assert!(!auth.is_authenticated());
        assert!(!auth.is_admin());
    }

    #[test]
    fn register_does_not_log_in() {
        let (auth, storage) = service(MockAuthApi::accepting("jwt-1", "STUDENT", "ada"));
        let request = RegisterRequest {
            username: "ada".into(),
            email: "ada@example.edu".into(),
            password: "pw".into(),
            role: Role::Student,
        };

        block_on(auth.register(&request)).unwrap();

        assert!(storage.is_empty());
    }

    #[test]
    fn duplicate_registration_uses_message_field() {
        let (auth, _) = service(MockAuthApi::failing(ApiError::from_status(
            400,
            Some(r#"{"message":"Username is already taken"}"#.into()),
        )));

        let err = block_on(auth.register(&RegisterRequest::default())).unwrap_err();

        assert_eq!(err.to_string(), "Username is already taken");
    }
}
