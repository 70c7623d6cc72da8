// ============================================================================
// APP - Aplicación principal (splash → shell → vista de la ruta actual)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, replace_children, WindowListener};
use crate::state::app_state::{AppState, UpdateType};
use crate::state::session_state::SessionState;
use crate::viewmodels::navigation::{current_route, decide, navigate, stale_route, GateDecision, Route};
use crate::viewmodels::session_viewmodel::SessionPoller;
use crate::views::layout::{BOTTOM_NAV_ID, CONTENT_ID, MENU_DRAWER_ID};
use crate::views::{render_bottom_nav, render_menu_drawer, render_pending, render_route, render_shell, render_splash, MountedView};

/// Nodos fijos del esqueleto, resueltos una vez montado
struct Shell {
    content: Element,
    bottom_nav: Element,
    menu_drawer: Element,
}

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
    shell: Option<Shell>,
    view: Option<MountedView>,
    /// Ruta y decisión del gate con las que se montó la vista actual
    rendered: Option<(Route, GateDecision)>,
    /// Parte de la sesión que afecta a la barra inferior
    nav_session: Option<bool>,
    _poller: SessionPoller,
    _hash_listener: WindowListener,
    splash: Option<Timeout>,
}

/// Programar un update fuera del borrow actual de APP (batch con Timeout 0)
fn schedule(update_type: UpdateType) {
    Timeout::new(0, move || {
        crate::rerender_app_with_type(update_type);
    })
    .forget();
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::for_browser();

        // El sondeo empieza durante el splash
        let poller = SessionPoller::start(
            state.session_store.clone(),
            state.session.clone(),
            CONFIG.timing.session_poll_interval_ms,
        );
        state.session.subscribe(|_: &SessionState| schedule(UpdateType::Session));
        state.subscribe_to_changes(schedule);

        let hash_listener = WindowListener::new("hashchange", |_| schedule(UpdateType::FullRender))?;

        let splash = {
            let state = state.clone();
            Timeout::new(CONFIG.timing.splash_duration_ms, move || {
                log::info!("🎬 [APP] Splash terminado");
                *state.splash_done.borrow_mut() = true;
                state.notify_subscribers(UpdateType::FullRender);
            })
        };

        Ok(Self {
            state,
            root,
            shell: None,
            view: None,
            rendered: None,
            nav_session: None,
            _poller: poller,
            _hash_listener: hash_listener,
            splash: Some(splash),
        })
    }

    /// Monta el esqueleto la primera vez tras el splash
    fn ensure_shell(&mut self) -> Result<(), JsValue> {
        if self.shell.is_some() {
            return Ok(());
        }
        replace_children(&self.root, &render_shell()?)?;
        let lookup = |id: &str| {
            get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
        };
        self.shell = Some(Shell {
            content: lookup(CONTENT_ID)?,
            bottom_nav: lookup(BOTTOM_NAV_ID)?,
            menu_drawer: lookup(MENU_DRAWER_ID)?,
        });
        self.splash = None;
        Ok(())
    }

    /// Renderizar aplicación: ruta actual según el hash + gate de sesión
    pub fn render(&mut self) -> Result<(), JsValue> {
        let lang = self.state.lang();
        if !*self.state.splash_done.borrow() {
            return replace_children(&self.root, &render_splash(&lang)?);
        }
        self.ensure_shell()?;

        let route = current_route();
        *self.state.route.borrow_mut() = route.clone();
        let session = self.state.session.snapshot();
        let decision = decide(&route, &session);
        log::info!("🧭 [APP] {} → {:?}", route.path(), decision);

        // La vista anterior se suelta antes de montar la nueva
        self.view = None;
        let view = match &decision {
            GateDecision::Enter => render_route(&self.state, &route)?,
            GateDecision::Pending => MountedView::from(render_pending(&lang)?),
            GateDecision::Redirect(target) => {
                navigate(target);
                MountedView::from(render_pending(&lang)?)
            }
        };

        if let Some(shell) = &self.shell {
            replace_children(&shell.content, &view.element)?;
        }
        self.view = Some(view);
        self.rendered = Some((route, decision));

        self.state.set_menu_open(false);
        self.render_bottom_nav()?;
        self.render_menu_drawer()
    }

    fn render_bottom_nav(&mut self) -> Result<(), JsValue> {
        if let Some(shell) = &self.shell {
            replace_children(&shell.bottom_nav, &render_bottom_nav(&self.state)?)?;
            self.nav_session = Some(self.state.session.snapshot().verified);
        }
        Ok(())
    }

    fn render_menu_drawer(&self) -> Result<(), JsValue> {
        if let Some(shell) = &self.shell {
            replace_children(&shell.menu_drawer, &render_menu_drawer(&self.state)?)?;
        }
        Ok(())
    }

    /// Cada sondeo: barra inferior si cambió la verificación, y el gate de la
    /// ruta actual se re-evalúa (una invalidación redirige en un ciclo)
    fn on_session_change(&mut self) -> Result<(), JsValue> {
        if self.shell.is_none() {
            return Ok(());
        }
        let session = self.state.session.snapshot();
        if self.nav_session != Some(session.verified) {
            self.render_bottom_nav()?;
        }

        let stale = stale_route(self.rendered.as_ref(), &session).map(Route::path);
        match stale {
            Some(path) => {
                log::info!("🔐 [APP] Cambio de sesión en {}, re-evaluando", path);
                self.render()
            }
            None => Ok(()),
        }
    }

    /// Actualizar UI según el tipo de cambio
    pub fn update(&mut self, update_type: UpdateType) -> Result<(), JsValue> {
        match update_type {
            UpdateType::FullRender => self.render(),
            UpdateType::Session => self.on_session_change(),
            UpdateType::MenuDrawer => self.render_menu_drawer(),
        }
    }
}
