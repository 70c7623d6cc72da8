// ============================================================================
// DIRECTORY VIEWS - jela / thana / union
// ============================================================================
// Cada vista mantiene su `Subscription` mientras está montada; cada entrega
// del backend re-renderiza solo el cuerpo de la lista.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{replace_children, ElementBuilder};
use crate::models::LocationNode;
use crate::services::Subscription;
use crate::state::app_state::AppState;
use crate::state::directory_state::{LoadState, NodeState};
use crate::utils::constants::{DISTRICTS_PATH, THANA_PATH, UNION_PATH};
use crate::utils::i18n::t;
use crate::viewmodels::navigation::{navigate, Route};
use crate::views::person_card::render_person_card;
use crate::views::MountedView;

/// Nivel jerárquico con lista de nodos y miembros anidados
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKind {
    Thana,
    Union,
}

impl LocationKind {
    pub fn collection(self) -> &'static str {
        match self {
            LocationKind::Thana => THANA_PATH,
            LocationKind::Union => UNION_PATH,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            LocationKind::Thana => "thana_title",
            LocationKind::Union => "union_title",
        }
    }

    fn subtitle_key(self) -> &'static str {
        match self {
            LocationKind::Thana => "thana_subtitle",
            LocationKind::Union => "union_subtitle",
        }
    }

    fn empty_key(self) -> &'static str {
        match self {
            LocationKind::Thana => "no_thana",
            LocationKind::Union => "no_union",
        }
    }

    fn not_found_key(self) -> &'static str {
        match self {
            LocationKind::Thana => "thana_not_found",
            LocationKind::Union => "union_not_found",
        }
    }

    fn members_title_key(self) -> &'static str {
        match self {
            LocationKind::Thana => "members_title",
            LocationKind::Union => "union_members_title",
        }
    }

    pub fn list_route(self) -> Route {
        match self {
            LocationKind::Thana => Route::Thana,
            LocationKind::Union => Route::Union,
        }
    }

    pub fn members_route(self, id: &str) -> Route {
        match self {
            LocationKind::Thana => Route::ThanaPersons(id.to_string()),
            LocationKind::Union => Route::UnionPersons(id.to_string()),
        }
    }
}

// ============================================================================
// ESTADOS COMUNES
// ============================================================================

fn render_message(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class(class).text(text).build())
}

fn render_loading(lang: &str) -> Result<Element, JsValue> {
    let skeletons = (0..4)
        .map(|_| ElementBuilder::new("div").map(|b| b.class("skeleton").build()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ElementBuilder::new("div")?
        .class("loading")
        .children(skeletons)?
        .child(render_message("loading-text", &t("loading_data", lang))?)?
        .build())
}

fn render_failure(lang: &str) -> Result<Element, JsValue> {
    let retry = ElementBuilder::new("button")?
        .class("retry-button")
        .attr("type", "button")?
        .text(&t("retry", lang))
        .on_click(|_| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        })?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("load-error")
        .child(render_message("error-text", &t("load_failed", lang))?)?
        .child(retry)?
        .build())
}

/// Renderiza un `LoadState` genérico; `Empty` y `Failed` tienen mensajes distintos
fn render_load_state<T, F>(
    load: &LoadState<T>,
    lang: &str,
    empty_key: &str,
    render_item: F,
) -> Result<Element, JsValue>
where
    F: Fn(&T) -> Result<Element, JsValue>,
{
    match load {
        LoadState::Loading => render_loading(lang),
        LoadState::Empty => render_message("empty-text", &t(empty_key, lang)),
        LoadState::Failed(e) => {
            log::error!("❌ [DIRECTORY] {}", e);
            render_failure(lang)
        }
        LoadState::Loaded(items) => {
            let rendered = items.iter().map(render_item).collect::<Result<Vec<_>, _>>()?;
            Ok(ElementBuilder::new("div")?.class("directory-list").children(rendered)?.build())
        }
    }
}

fn page(title: &str, subtitle: Option<&str>, body: &Element) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.class("page-title").text(title).build())?;
    let header = match subtitle {
        Some(text) => header.child(ElementBuilder::new("p")?.class("page-subtitle").text(text).build())?,
        None => header,
    };
    Ok(ElementBuilder::new("section")?
        .class("directory-page")
        .child(header.build())?
        .child(body.clone())?
        .build())
}

fn fill(slot: &Element, rendered: Result<Element, JsValue>) {
    match rendered.and_then(|content| replace_children(slot, &content)) {
        Ok(()) => {}
        Err(e) => log::error!("❌ [DIRECTORY] Error renderizando: {:?}", e),
    }
}

// ============================================================================
// VISTAS
// ============================================================================

/// Comité de distrito: lista plana de personas en `jela`
pub fn render_district(state: &AppState) -> Result<MountedView, JsValue> {
    let lang = state.lang();
    let body = ElementBuilder::new("div")?.class("page-body").child(render_loading(&lang)?)?.build();
    let root = page(&t("district_title", &lang), Some(&t("district_subtitle", &lang)), &body)?;

    let subscription = Subscription::spawn(DISTRICTS_PATH, state.directory.persons(DISTRICTS_PATH), move |load| {
        fill(&body, render_load_state(&load, &lang, "no_data_now", |p| render_person_card(p, &lang)));
    });

    Ok(MountedView::new(root).with_guard(subscription))
}

fn render_node_entry(kind: LocationKind, node: &LocationNode) -> Result<Element, JsValue> {
    let route = kind.members_route(&node.id);
    ElementBuilder::new("button")?
        .class("location-item")
        .attr("type", "button")?
        .child(ElementBuilder::new("span")?.class("location-icon").text("📍").build())?
        .child(ElementBuilder::new("span")?.class("location-name").text(&node.name).build())?
        .on_click(move |_| navigate(&route))
        .map(ElementBuilder::build)
}

/// Lista de thanas o uniones
pub fn render_location_list(state: &AppState, kind: LocationKind) -> Result<MountedView, JsValue> {
    let lang = state.lang();
    let body = ElementBuilder::new("div")?.class("page-body").child(render_loading(&lang)?)?.build();
    let root = page(&t(kind.title_key(), &lang), Some(&t(kind.subtitle_key(), &lang)), &body)?;

    let subscription = Subscription::spawn(kind.collection(), state.directory.nodes(kind.collection()), move |load| {
        fill(&body, render_load_state(&load, &lang, kind.empty_key(), |node| render_node_entry(kind, node)));
    });

    Ok(MountedView::new(root).with_guard(subscription))
}

/// Miembros de un nodo; si el nodo no existe se vuelve a la lista tras un retardo
pub fn render_members(state: &AppState, kind: LocationKind, id: &str) -> Result<MountedView, JsValue> {
    let lang = state.lang();
    let title = ElementBuilder::new("h1")?.class("page-title").text(&t(kind.members_title_key(), &lang)).build();
    let body = ElementBuilder::new("div")?.class("page-body").child(render_loading(&lang)?)?.build();
    let root = ElementBuilder::new("section")?
        .class("directory-page")
        .child(ElementBuilder::new("header")?.class("page-header").child(title.clone())?.build())?
        .child(body.clone())?
        .build();

    let redirect: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let pending_redirect = redirect.clone();
    let label = format!("{}/{}", kind.collection(), id);

    let subscription = Subscription::spawn(&label, state.directory.node(kind.collection(), id), move |node| {
        let rendered = match node {
            NodeState::Loading => render_loading(&lang),
            NodeState::Found(node) => {
                if !node.name.is_empty() {
                    title.set_text_content(Some(&node.name));
                }
                let load = if node.members.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Loaded(node.members)
                };
                render_load_state(&load, &lang, "no_members", |p| render_person_card(p, &lang))
            }
            NodeState::NotFound => {
                let mut slot = pending_redirect.borrow_mut();
                if slot.is_none() {
                    log::warn!("🧭 [DIRECTORY] Nodo no encontrado, volviendo a la lista");
                    *slot = Some(Timeout::new(CONFIG.timing.not_found_redirect_ms, move || {
                        navigate(&kind.list_route());
                    }));
                }
                render_message("error-text", &t(kind.not_found_key(), &lang))
            }
            NodeState::Failed(e) => {
                log::error!("❌ [DIRECTORY] {}", e);
                render_failure(&lang)
            }
        };
        fill(&body, rendered);
    });

    // La suscripción se suelta antes que el temporizador
    Ok(MountedView::new(root).with_guard(subscription).with_guard(redirect))
}
