// ============================================================================
// IABNU APP - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI (navegación, sesión, formularios)
// - Services: SOLO comunicación con el Realtime Database
// - Stores: userId en cookie + localStorage
// - State: State Management con Rc<RefCell> + subscribers
// - Models: Estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod stores;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 {} - Rust Puro + MVVM ({})", CONFIG.app_name, CONFIG.environment);

    // Crear y renderizar app (splash)
    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match app_cell.try_borrow_mut() {
            Ok(mut guard) => match guard.as_mut() {
                Some(app) => {
                    if let Err(e) = app.update(update_type) {
                        log::error!("❌ [RERENDER] Error en {:?}: {:?}", update_type, e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => {
                log::debug!("🔄 [RERENDER] Update {:?} durante otro update, reprogramando", update_type);
                gloo_timers::callback::Timeout::new(0, move || rerender_app_with_type(update_type)).forget();
            }
        }
    });
}

/// Función pública WASM para re-renderizar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
