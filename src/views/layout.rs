// ============================================================================
// LAYOUT - Contenedor principal, barra inferior y drawer del menú
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::navigation::{bottom_nav_items, menu_items, navigate, NavAction, NavItem};

pub const CONTENT_ID: &str = "content";
pub const BOTTOM_NAV_ID: &str = "bottom-nav";
pub const MENU_DRAWER_ID: &str = "menu-drawer";

/// Esqueleto fijo: contenido + drawer + barra inferior
pub fn render_shell() -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("app-shell")
        .child(ElementBuilder::new("main")?.class("content").id(CONTENT_ID)?.build())?
        .child(ElementBuilder::new("div")?.class("menu-drawer").id(MENU_DRAWER_ID)?.build())?
        .child(ElementBuilder::new("nav")?.class("bottom-nav").id(BOTTOM_NAV_ID)?.build())
        .map(ElementBuilder::build)
}

fn render_nav_button(state: &AppState, item: NavItem) -> Result<Element, JsValue> {
    let lang = state.lang();
    let current = state.current_route();
    let class = if item.is_active(&current) { "nav-item active" } else { "nav-item" };

    let state = state.clone();
    let action = item.action.clone();
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .child(ElementBuilder::new("span")?.class("nav-icon").text(item.icon).build())?
        .child(ElementBuilder::new("span")?.class("nav-label").text(&t(item.label_key, &lang)).build())?
        .on_click(move |_| match &action {
            NavAction::Go(route) => {
                state.set_menu_open(false);
                navigate(route);
            }
            NavAction::ToggleMenu => state.toggle_menu(),
        })?
        .build())
}

/// Botones de la barra inferior según el estado de sesión actual
pub fn render_bottom_nav(state: &AppState) -> Result<Element, JsValue> {
    let session = state.session.snapshot();
    let list = ElementBuilder::new("div")?.class("bottom-nav-items").build();
    for item in bottom_nav_items(&session) {
        append_child(&list, &render_nav_button(state, item)?)?;
    }
    Ok(list)
}

pub fn render_menu_drawer(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let open = *state.menu_open.borrow();

    let backdrop = {
        let state = state.clone();
        ElementBuilder::new("div")?
            .class("drawer-backdrop")
            .on_click(move |_| state.set_menu_open(false))?
            .build()
    };

    let panel = ElementBuilder::new("ul")?.class("drawer-panel").build();
    for (route, label_key) in menu_items() {
        let state = state.clone();
        let entry = ElementBuilder::new("li")?
            .class("drawer-item")
            .text(&t(label_key, &lang))
            .on_click(move |_| {
                state.set_menu_open(false);
                navigate(&route);
            })?
            .build();
        append_child(&panel, &entry)?;
    }

    Ok(ElementBuilder::new("div")?
        .class(if open { "drawer open" } else { "drawer" })
        .child(backdrop)?
        .child(panel)?
        .build())
}
