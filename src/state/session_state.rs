// ============================================================================
// SESSION STATE - Sesión local verificada periódicamente contra el backend
// ============================================================================

use crate::state::reactivity::ReactiveState;

/// Invariante: `verified` ⇒ `user_id` no vacío y confirmado en el backend
/// durante el último intervalo de sondeo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub verified: bool,
    /// Epoch ms del último sondeo completado; `None` = todavía sin sondear
    pub checked_at: Option<i64>,
}

impl SessionState {
    pub fn verified(user_id: &str, checked_at: i64) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            verified: true,
            checked_at: Some(checked_at),
        }
    }

    pub fn anonymous(checked_at: i64) -> Self {
        Self {
            user_id: None,
            verified: false,
            checked_at: Some(checked_at),
        }
    }

    pub fn has_been_checked(&self) -> bool {
        self.checked_at.is_some()
    }
}

/// Observador de sesión compartido por toda la app; lo alimenta un único poller
pub type SessionObserver = ReactiveState<SessionState>;

pub fn new_session_observer() -> SessionObserver {
    ReactiveState::new(SessionState::default())
}
