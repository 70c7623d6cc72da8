// ============================================================================
// ACCOUNT VIEWMODEL - Login / perfil / logout
// ============================================================================
// Traduce el resultado de AuthService en cambios del SessionObserver.
// ============================================================================

use std::rc::Rc;
use crate::models::UserProfile;
use crate::services::auth_service::{AuthService, LoginError};
use crate::state::session_state::{SessionObserver, SessionState};
use crate::stores::session_store::SessionStore;

/// Resultado de cargar la pantalla de ajustes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOutcome {
    Loaded(UserProfile),
    /// Sin id resoluble, usuario borrado o error: volver a `/login`
    LoginRequired,
}

pub struct AccountViewModel {
    auth: Rc<AuthService>,
    store: Rc<SessionStore>,
    observer: SessionObserver,
}

impl AccountViewModel {
    pub fn new(auth: Rc<AuthService>, store: Rc<SessionStore>, observer: SessionObserver) -> Self {
        Self { auth, store, observer }
    }

    /// Login; en éxito la sesión queda verificada sin esperar al siguiente sondeo
    pub async fn login(&self, user_id: &str, password: &str, now_ms: i64) -> Result<String, LoginError> {
        let user_id = self.auth.login(user_id, password).await?;
        self.observer.set(SessionState::verified(&user_id, now_ms));
        Ok(user_id)
    }

    pub async fn load_profile(&self) -> ProfileOutcome {
        let Some(user_id) = self.store.resolve_user_id() else {
            return ProfileOutcome::LoginRequired;
        };
        match self.auth.load_profile(&user_id).await {
            Ok(Some(profile)) => ProfileOutcome::Loaded(profile),
            Ok(None) => ProfileOutcome::LoginRequired,
            Err(e) => {
                log::error!("❌ [SETTINGS] Error cargando perfil de {}: {}", user_id, e);
                ProfileOutcome::LoginRequired
            }
        }
    }

    pub fn logout(&self, now_ms: i64) {
        self.auth.logout();
        self.observer.set(SessionState::anonymous(now_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use crate::services::memory_backend::MemoryBackend;
    use crate::state::session_state::new_session_observer;
    use crate::stores::user_id_store::MemoryStore;

    fn account(cookie: MemoryStore) -> AccountViewModel {
        let backend = Rc::new(MemoryBackend::with_data(json!({
            "users": { "1": { "id": 1, "password": "pw", "first_name": "করিম" } }
        })));
        let store = Rc::new(SessionStore::new(
            backend.clone(),
            Rc::new(cookie),
            Rc::new(MemoryStore::default()),
        ));
        let auth = Rc::new(AuthService::new(backend, store.clone()));
        AccountViewModel::new(auth, store, new_session_observer())
    }

    #[test]
    fn login_publishes_verified_session() {
        let vm = account(MemoryStore::default());
        block_on(vm.login("1", "pw", 42)).unwrap();
        assert_eq!(vm.observer.snapshot(), SessionState::verified("1", 42));
    }

    #[test]
    fn failed_login_leaves_session_untouched() {
        let vm = account(MemoryStore::default());
        assert!(block_on(vm.login("1", "bad", 42)).is_err());
        assert_eq!(vm.observer.snapshot(), SessionState::default());
    }

    #[test]
    fn settings_without_id_requires_login() {
        let vm = account(MemoryStore::default());
        assert_eq!(block_on(vm.load_profile()), ProfileOutcome::LoginRequired);
    }

    #[test]
    fn settings_loads_profile_for_resolved_id() {
        let vm = account(MemoryStore::holding("1"));
        match block_on(vm.load_profile()) {
            ProfileOutcome::Loaded(profile) => assert_eq!(profile.first_name, "করিম"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn logout_clears_and_publishes_anonymous() {
        let vm = account(MemoryStore::holding("1"));
        vm.logout(7);
        assert_eq!(vm.store.resolve_user_id(), None);
        assert_eq!(vm.observer.snapshot(), SessionState::anonymous(7));
    }
}
