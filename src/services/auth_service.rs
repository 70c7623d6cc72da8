// ============================================================================
// AUTH SERVICE - Login contra `users/{id}` + carga de perfil
// ============================================================================

use std::rc::Rc;
use thiserror::Error;
use crate::models::{UserProfile, UserRecord};
use crate::services::backend::{BackendError, RealtimeBackend, Snapshot};
use crate::stores::session_store::SessionStore;
use crate::utils::constants::user_path;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("user id and password are required")]
    MissingFields,
    #[error("user id not found")]
    UnknownId,
    #[error("wrong password")]
    WrongPassword,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("could not persist session: {0}")]
    Storage(String),
}

impl LoginError {
    /// Clave i18n del mensaje inline del formulario
    pub fn message_key(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "fill_all_fields",
            LoginError::UnknownId => "id_not_found",
            LoginError::WrongPassword => "wrong_password",
            LoginError::Backend(_) | LoginError::Storage(_) => "login_failed",
        }
    }
}

pub struct AuthService {
    backend: Rc<dyn RealtimeBackend>,
    session: Rc<SessionStore>,
}

impl AuthService {
    pub fn new(backend: Rc<dyn RealtimeBackend>, session: Rc<SessionStore>) -> Self {
        Self { backend, session }
    }

    async fn fetch_user(&self, user_id: &str) -> Result<Option<UserRecord>, BackendError> {
        let snapshot = match self.backend.get(&user_path(user_id)).await {
            Ok(snapshot) => snapshot,
            Err(BackendError::InvalidKey(_)) => Snapshot::empty(),
            Err(e) => return Err(e),
        };
        if !snapshot.exists() {
            return Ok(None);
        }
        serde_json::from_value(snapshot.into_value())
            .map(Some)
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// Valida credenciales; solo en caso de éxito se escribe en ambos stores
    pub async fn login(&self, user_id: &str, password: &str) -> Result<String, LoginError> {
        let user_id = user_id.trim();
        if user_id.is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        log::info!("🔐 [LOGIN] Intentando login para userId={}", user_id);
        let record = self.fetch_user(user_id).await?.ok_or(LoginError::UnknownId)?;

        if !record.password_matches(password) {
            log::warn!("🔐 [LOGIN] Contraseña incorrecta para userId={}", user_id);
            return Err(LoginError::WrongPassword);
        }

        self.session.persist(user_id).map_err(LoginError::Storage)?;
        log::info!("✅ [LOGIN] Login correcto para userId={}", user_id);
        Ok(user_id.to_string())
    }

    /// Perfil de `users/{id}`; `None` si el usuario ya no existe
    pub async fn load_profile(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        Ok(self.fetch_user(user_id).await?.map(|record| record.profile()))
    }

    pub fn logout(&self) {
        log::info!("👋 [LOGOUT] Cerrando sesión");
        self.session.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use crate::services::memory_backend::MemoryBackend;
    use crate::stores::user_id_store::MemoryStore;

    struct Fixture {
        backend: Rc<MemoryBackend>,
        cookie: Rc<MemoryStore>,
        device: Rc<MemoryStore>,
        session: Rc<SessionStore>,
        auth: AuthService,
    }

    fn fixture() -> Fixture {
        fixture_with_cookie(MemoryStore::default())
    }

    fn fixture_with_cookie(cookie: MemoryStore) -> Fixture {
        let backend = Rc::new(MemoryBackend::with_data(json!({
            "users": { "1": {
                "id": 1,
                "password": "1234",
                "first_name": "আব্দুল",
                "last_name": "করিম",
                "title": "সভাপতি"
            } }
        })));
        let cookie = Rc::new(cookie);
        let device = Rc::new(MemoryStore::default());
        let session = Rc::new(SessionStore::new(backend.clone(), cookie.clone(), device.clone()));
        let auth = AuthService::new(backend.clone(), session.clone());
        Fixture { backend, cookie, device, session, auth }
    }

    #[test]
    fn successful_login_writes_both_stores() {
        let f = fixture();
        assert_eq!(block_on(f.auth.login("1", "1234")), Ok("1".to_string()));
        assert_eq!(f.cookie.peek().as_deref(), Some("1"));
        assert_eq!(f.device.peek().as_deref(), Some("1"));
    }

    #[test]
    fn wrong_password_writes_nothing() {
        let f = fixture();
        let error = block_on(f.auth.login("1", "nope")).unwrap_err();
        assert_eq!(error, LoginError::WrongPassword);
        assert_eq!(error.message_key(), "wrong_password");
        assert_eq!(f.cookie.writes.get() + f.device.writes.get(), 0);
    }

    #[test]
    fn blocked_cookie_fails_login_without_leaving_a_session() {
        let f = fixture_with_cookie(MemoryStore::blocked());
        let error = block_on(f.auth.login("1", "1234")).unwrap_err();
        assert!(matches!(error, LoginError::Storage(_)));
        assert_eq!(error.message_key(), "login_failed");
        assert_eq!(f.device.peek(), None);
        assert!(!block_on(f.session.poll(1)).verified);
    }

    #[test]
    fn missing_fields_skip_the_backend() {
        let f = fixture();
        assert_eq!(block_on(f.auth.login("", "1234")), Err(LoginError::MissingFields));
        assert_eq!(block_on(f.auth.login("1", "")), Err(LoginError::MissingFields));
        assert_eq!(f.backend.gets.get(), 0);
    }

    #[test]
    fn unknown_id_is_reported() {
        let f = fixture();
        assert_eq!(block_on(f.auth.login("2", "1234")), Err(LoginError::UnknownId));
        assert_eq!(block_on(f.auth.login("a/b", "1234")), Err(LoginError::UnknownId));
    }

    #[test]
    fn transport_failure_maps_to_generic_message() {
        let f = fixture();
        f.backend.fail_with(BackendError::Network("offline".into()));
        let error = block_on(f.auth.login("1", "1234")).unwrap_err();
        assert_eq!(error.message_key(), "login_failed");
    }

    #[test]
    fn profile_never_exposes_password() {
        let f = fixture();
        let profile = block_on(f.auth.load_profile("1")).unwrap().unwrap();
        assert_eq!(profile.full_name(), "আব্দুল করিম");
        assert_eq!(profile.title, "সভাপতি");
        assert_eq!(block_on(f.auth.load_profile("9")).unwrap(), None);
    }

    #[test]
    fn logout_clears_both_stores() {
        let f = fixture();
        block_on(f.auth.login("1", "1234")).unwrap();
        f.auth.logout();
        assert_eq!(f.cookie.peek(), None);
        assert_eq!(f.device.peek(), None);
    }
}
