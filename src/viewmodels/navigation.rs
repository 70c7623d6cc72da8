// ============================================================================
// NAVIGATION - Rutas por hash + política de acceso por sesión
// ============================================================================

use crate::state::session_state::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Messages,
    Settings,
    District,
    Thana,
    ThanaPersons(String),
    Union,
    UnionPersons(String),
    Report,
    Login,
    Fund,
    NotFound,
}

impl Route {
    /// Parsea `#/thana/3/person`, `/thana/`, `` ...
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["messages"] => Route::Messages,
            ["settings"] => Route::Settings,
            ["district"] => Route::District,
            ["thana"] => Route::Thana,
            ["thana", id, "person"] => Route::ThanaPersons(id.to_string()),
            ["union"] => Route::Union,
            ["union", id, "person"] => Route::UnionPersons(id.to_string()),
            ["report"] => Route::Report,
            ["login"] => Route::Login,
            ["fund"] => Route::Fund,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::District => "/district".to_string(),
            Route::Thana => "/thana".to_string(),
            Route::ThanaPersons(id) => format!("/thana/{}/person", id),
            Route::Union => "/union".to_string(),
            Route::UnionPersons(id) => format!("/union/{}/person", id),
            Route::Report => "/report".to_string(),
            Route::Login => "/login".to_string(),
            Route::Fund => "/fund".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Messages | Route::Settings)
    }
}

/// Resultado de evaluar el gate para la ruta actual
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Enter,
    /// Ruta protegida esperando el primer sondeo completo
    Pending,
    Redirect(Route),
}

pub fn can_enter(route: &Route, session: &SessionState) -> bool {
    !route.requires_session() || session.verified
}

pub fn decide(route: &Route, session: &SessionState) -> GateDecision {
    if can_enter(route, session) {
        GateDecision::Enter
    } else if !session.has_been_checked() {
        GateDecision::Pending
    } else {
        GateDecision::Redirect(Route::Login)
    }
}

/// Ruta montada cuya decisión ya no coincide con la sesión nueva; `None` si la
/// vista actual sigue siendo válida
pub fn stale_route<'a>(rendered: Option<&'a (Route, GateDecision)>, session: &SessionState) -> Option<&'a Route> {
    rendered
        .filter(|(route, decision)| decide(route, session) != *decision)
        .map(|(route, _)| route)
}

/// Acción de un botón de la barra inferior
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Go(Route),
    ToggleMenu,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label_key: &'static str,
    pub icon: &'static str,
    pub action: NavAction,
}

impl NavItem {
    fn new(label_key: &'static str, icon: &'static str, action: NavAction) -> Self {
        Self { label_key, icon, action }
    }

    pub fn is_active(&self, current: &Route) -> bool {
        matches!(&self.action, NavAction::Go(route) if route == current)
    }
}

/// Home siempre; con sesión verificada Menu/Messages/Settings, si no Login
pub fn bottom_nav_items(session: &SessionState) -> Vec<NavItem> {
    let mut items = vec![NavItem::new("nav_home", "🏠", NavAction::Go(Route::Home))];
    if session.verified {
        items.push(NavItem::new("nav_menu", "☰", NavAction::ToggleMenu));
        items.push(NavItem::new("nav_messages", "✉️", NavAction::Go(Route::Messages)));
        items.push(NavItem::new("nav_settings", "⚙️", NavAction::Go(Route::Settings)));
    } else {
        items.push(NavItem::new("nav_login", "🔑", NavAction::Go(Route::Login)));
    }
    items
}

pub fn menu_items() -> Vec<(Route, &'static str)> {
    vec![
        (Route::District, "menu_district"),
        (Route::Thana, "menu_thana"),
        (Route::Union, "menu_union"),
        (Route::Report, "menu_report"),
        (Route::Fund, "menu_fund"),
    ]
}

/// Ruta actual según `location.hash`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Home)
}

/// Cambia el hash; el listener de `hashchange` hace el resto
pub fn navigate(route: &Route) {
    log::info!("🧭 [NAV] → {}", route.path());
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.path()) {
            log::error!("❌ [NAV] No se pudo cambiar el hash: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hash_paths() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/thana/3/person"), Route::ThanaPersons("3".into()));
        assert_eq!(Route::parse("#/union/u7/person/"), Route::UnionPersons("u7".into()));
        assert_eq!(Route::parse("/settings/"), Route::Settings);
        assert_eq!(Route::parse("#/transactions"), Route::NotFound);
        assert_eq!(Route::parse("#/thana/3"), Route::NotFound);
    }

    #[test]
    fn paths_parse_back_to_the_same_route() {
        for route in [Route::Home, Route::Fund, Route::ThanaPersons("9".into())] {
            assert_eq!(Route::parse(&format!("#{}", route.path())), route);
        }
    }

    #[test]
    fn protected_routes_need_verified_session() {
        let anonymous = SessionState::anonymous(1);
        let verified = SessionState::verified("1", 1);
        assert!(can_enter(&Route::Report, &anonymous));
        assert!(can_enter(&Route::ThanaPersons("1".into()), &anonymous));
        assert!(!can_enter(&Route::Settings, &anonymous));
        assert!(!can_enter(&Route::Messages, &anonymous));
        assert!(can_enter(&Route::Settings, &verified));
    }

    #[test]
    fn gate_waits_for_first_poll_then_redirects() {
        let unknown = SessionState::default();
        assert_eq!(decide(&Route::Settings, &unknown), GateDecision::Pending);
        assert_eq!(
            decide(&Route::Settings, &SessionState::anonymous(1)),
            GateDecision::Redirect(Route::Login)
        );
        assert_eq!(decide(&Route::Home, &unknown), GateDecision::Enter);
    }

    #[test]
    fn invalidated_session_makes_protected_view_stale() {
        let mounted = (Route::Settings, GateDecision::Enter);
        assert_eq!(stale_route(Some(&mounted), &SessionState::verified("1", 2)), None);
        assert_eq!(
            stale_route(Some(&mounted), &SessionState::anonymous(3)),
            Some(&Route::Settings)
        );
    }

    #[test]
    fn first_poll_resolves_pending_view() {
        let pending = (Route::Messages, GateDecision::Pending);
        assert_eq!(stale_route(Some(&pending), &SessionState::default()), None);
        assert_eq!(
            stale_route(Some(&pending), &SessionState::verified("1", 1)),
            Some(&Route::Messages)
        );

        let open = (Route::Home, GateDecision::Enter);
        assert_eq!(stale_route(Some(&open), &SessionState::anonymous(1)), None);
        assert_eq!(stale_route(None, &SessionState::anonymous(1)), None);
    }

    #[test]
    fn bottom_nav_depends_on_verification() {
        let keys = |s: &SessionState| -> Vec<&str> {
            bottom_nav_items(s).iter().map(|i| i.label_key).collect()
        };
        assert_eq!(keys(&SessionState::anonymous(0)), ["nav_home", "nav_login"]);
        assert_eq!(
            keys(&SessionState::verified("1", 0)),
            ["nav_home", "nav_menu", "nav_messages", "nav_settings"]
        );
    }
}
