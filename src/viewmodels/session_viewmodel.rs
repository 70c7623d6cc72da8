// ============================================================================
// SESSION VIEWMODEL - Poller único de sesión → SessionObserver
// ============================================================================
// Un solo temporizador para toda la app. Cada tick lanza un `poll()`
// independiente; los sondeos pueden solaparse.
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Interval;
use crate::state::session_state::{SessionObserver, SessionState};
use crate::stores::session_store::SessionStore;

/// Publica un resultado salvo que sea más antiguo que el estado actual
/// (un sondeo lento no pisa un logout/login posterior).
pub fn apply_poll_result(observer: &SessionObserver, result: SessionState) -> bool {
    let stale = {
        let current = observer.get();
        let current = current.borrow();
        matches!(
            (current.checked_at, result.checked_at),
            (Some(current_at), Some(result_at)) if result_at < current_at
        )
    };
    if stale {
        log::debug!("🔄 [SESSION] Resultado de sondeo obsoleto descartado");
        return false;
    }
    observer.set(result);
    true
}

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Dueño del intervalo de sondeo; al soltarlo se cancela
pub struct SessionPoller {
    store: Rc<SessionStore>,
    observer: SessionObserver,
    _interval: Interval,
}

impl SessionPoller {
    pub fn start(store: Rc<SessionStore>, observer: SessionObserver, period_ms: u32) -> Self {
        log::info!("⏱️ [SESSION] Poller iniciado cada {} ms", period_ms);
        let interval = {
            let store = store.clone();
            let observer = observer.clone();
            Interval::new(period_ms, move || {
                spawn_poll(store.clone(), observer.clone());
            })
        };
        let poller = Self { store, observer, _interval: interval };
        poller.poll_now();
        poller
    }

    /// Sondeo inmediato fuera de la cadencia (arranque, tras login)
    pub fn poll_now(&self) {
        spawn_poll(self.store.clone(), self.observer.clone());
    }
}

impl Drop for SessionPoller {
    fn drop(&mut self) {
        log::info!("⏱️ [SESSION] Poller detenido");
    }
}

fn spawn_poll(store: Rc<SessionStore>, observer: SessionObserver) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = store.poll(now_ms()).await;
        apply_poll_result(&observer, result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_state::new_session_observer;

    #[test]
    fn newer_results_are_published() {
        let observer = new_session_observer();
        assert!(apply_poll_result(&observer, SessionState::verified("1", 10)));
        assert!(apply_poll_result(&observer, SessionState::anonymous(20)));
        assert_eq!(observer.snapshot(), SessionState::anonymous(20));
    }

    #[test]
    fn stale_results_are_dropped() {
        let observer = new_session_observer();
        apply_poll_result(&observer, SessionState::anonymous(20));
        assert!(!apply_poll_result(&observer, SessionState::verified("1", 10)));
        assert!(!observer.snapshot().verified);
    }
}
