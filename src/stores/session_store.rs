// ============================================================================
// SESSION STORE - Resolución y verificación del userId persistido
// ============================================================================
// Orden dentro de un ciclo: resolver en los stores locales → verificar en el
// backend. Un fallo de verificación (o de transporte) limpia ambos stores.
// ============================================================================

use std::rc::Rc;
use crate::services::backend::{BackendError, RealtimeBackend};
use crate::state::session_state::SessionState;
use crate::stores::user_id_store::UserIdStore;
use crate::utils::constants::user_id_path;

pub struct SessionStore {
    backend: Rc<dyn RealtimeBackend>,
    ephemeral: Rc<dyn UserIdStore>,
    durable: Rc<dyn UserIdStore>,
}

impl SessionStore {
    pub fn new(
        backend: Rc<dyn RealtimeBackend>,
        ephemeral: Rc<dyn UserIdStore>,
        durable: Rc<dyn UserIdStore>,
    ) -> Self {
        Self { backend, ephemeral, durable }
    }

    /// Cookie primero, luego localStorage. Si ambos tienen valor y difieren,
    /// gana la cookie.
    pub fn resolve_user_id(&self) -> Option<String> {
        [&self.ephemeral, &self.durable]
            .into_iter()
            .filter_map(|store| store.load())
            .map(|id| id.trim().to_string())
            .find(|id| !id.is_empty())
    }

    /// Lookup puntual de `users/{id}/id`. Idempotente.
    pub async fn verify(&self, user_id: &str) -> Result<bool, BackendError> {
        match self.backend.get(&user_id_path(user_id)).await {
            Ok(snapshot) => Ok(snapshot.exists()),
            // Un id que no es clave válida no puede existir
            Err(BackendError::InvalidKey(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Un ciclo completo de sondeo; `now_ms` queda como `checked_at`
    pub async fn poll(&self, now_ms: i64) -> SessionState {
        let user_id = match self.resolve_user_id() {
            Some(id) => id,
            None => return SessionState::anonymous(now_ms),
        };

        match self.verify(&user_id).await {
            Ok(true) => SessionState::verified(&user_id, now_ms),
            Ok(false) => {
                log::warn!("🔐 [SESSION] userId {} ya no existe, limpiando sesión", user_id);
                self.clear();
                SessionState::anonymous(now_ms)
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error verificando userId {}: {}", user_id, e);
                self.clear();
                SessionState::anonymous(now_ms)
            }
        }
    }

    /// Escribe el id en ambos stores. Todo o nada: si falla uno, se limpian los dos.
    pub fn persist(&self, user_id: &str) -> Result<(), String> {
        let result = self
            .ephemeral
            .save(user_id)
            .and_then(|_| self.durable.save(user_id));
        match result {
            Ok(()) => {
                log::info!("💾 [SESSION] userId persistido en {} y {}", self.ephemeral.name(), self.durable.name());
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [SESSION] No se pudo persistir userId: {}", e);
                self.clear();
                Err(e)
            }
        }
    }

    /// Borra ambos stores; idempotente y nunca falla
    pub fn clear(&self) {
        for store in [&self.ephemeral, &self.durable] {
            if let Err(e) = store.remove() {
                log::warn!("⚠️ [SESSION] No se pudo limpiar {}: {}", store.name(), e);
            }
        }
    }
}
