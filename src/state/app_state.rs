// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::{AuthService, DirectoryRepository, FirebaseClient, RealtimeBackend, ReportService};
use crate::state::session_state::{new_session_observer, SessionObserver};
use crate::stores::{CookieStore, DeviceStore, SessionStore, UserIdStore};
use crate::utils::constants::LANGUAGE_PREF_KEY;
use crate::utils::i18n::DEFAULT_LANGUAGE;
use crate::utils::storage::{load_pref, save_pref};
use crate::viewmodels::account_viewmodel::AccountViewModel;
use crate::viewmodels::navigation::Route;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Re-render completo de la ruta actual
    FullRender,
    /// Cambio de sesión: barra inferior + re-evaluación del gate
    Session,
    /// Solo el drawer del menú
    MenuDrawer,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub backend: Rc<dyn RealtimeBackend>,
    pub session_store: Rc<SessionStore>,
    pub session: SessionObserver,
    pub directory: DirectoryRepository,
    pub account: Rc<AccountViewModel>,
    pub reports: Rc<ReportService>,

    // UI State
    pub route: Rc<RefCell<Route>>,
    pub language: Rc<RefCell<String>>,
    pub menu_open: Rc<RefCell<bool>>,
    pub splash_done: Rc<RefCell<bool>>,

    // Reactivity: Callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    pub fn new(
        backend: Rc<dyn RealtimeBackend>,
        ephemeral: Rc<dyn UserIdStore>,
        durable: Rc<dyn UserIdStore>,
        language: String,
    ) -> Self {
        let session_store = Rc::new(SessionStore::new(backend.clone(), ephemeral, durable));
        let session = new_session_observer();
        let auth = Rc::new(AuthService::new(backend.clone(), session_store.clone()));

        Self {
            directory: DirectoryRepository::new(backend.clone()),
            account: Rc::new(AccountViewModel::new(auth, session_store.clone(), session.clone())),
            reports: Rc::new(ReportService::new(backend.clone(), session_store.clone())),
            backend,
            session_store,
            session,

            route: Rc::new(RefCell::new(Route::Home)),
            language: Rc::new(RefCell::new(language)),
            menu_open: Rc::new(RefCell::new(false)),
            splash_done: Rc::new(RefCell::new(false)),

            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Estado real del navegador: Realtime Database + cookie + localStorage
    pub fn for_browser() -> Self {
        let language = load_pref(LANGUAGE_PREF_KEY).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        Self::new(
            Rc::new(FirebaseClient::from_config()),
            Rc::new(CookieStore::from_config()),
            Rc::new(DeviceStore),
            language,
        )
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    pub fn lang(&self) -> String {
        self.language.borrow().clone()
    }

    /// Establecer language y guardar en localStorage
    pub fn set_language(&self, lang: &str) {
        *self.language.borrow_mut() = lang.to_string();
        if let Err(e) = save_pref(LANGUAGE_PREF_KEY, lang) {
            log::warn!("⚠️ [PREFS] {}", e);
        }
        self.notify_subscribers(UpdateType::FullRender);
    }

    pub fn set_menu_open(&self, open: bool) {
        if *self.menu_open.borrow() == open {
            return;
        }
        *self.menu_open.borrow_mut() = open;
        self.notify_subscribers(UpdateType::MenuDrawer);
    }

    pub fn toggle_menu(&self) {
        let open = !*self.menu_open.borrow();
        self.set_menu_open(open);
    }

    /// Suscribirse a cambios de estado de UI
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self, update_type: UpdateType) {
        let callbacks: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback(update_type);
        }
    }
}
