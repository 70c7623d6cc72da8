// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

use std::any::Any;
use web_sys::Element;

pub mod app;
pub mod layout;
pub mod splash;
pub mod home;
pub mod person_card;
pub mod directory;
pub mod login;
pub mod report;
pub mod settings;
pub mod placeholder;

pub use app::render_route;
pub use layout::{render_shell, render_bottom_nav, render_menu_drawer};
pub use splash::render_splash;
pub use home::render_home;
pub use person_card::render_person_card;
pub use directory::{render_district, render_location_list, render_members, LocationKind};
pub use login::render_login;
pub use report::render_report;
pub use settings::render_settings;
pub use placeholder::{render_coming_soon, render_not_found, render_pending};

/// Vista montada: el elemento raíz más los recursos ligados a su vida
/// (temporizadores, listeners del backend). Al soltarla se cancelan todos.
pub struct MountedView {
    pub element: Element,
    guards: Vec<Box<dyn Any>>,
}

impl MountedView {
    pub fn new(element: Element) -> Self {
        Self { element, guards: Vec::new() }
    }

    pub fn with_guard<G: 'static>(mut self, guard: G) -> Self {
        self.guards.push(Box::new(guard));
        self
    }
}

impl From<Element> for MountedView {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}
