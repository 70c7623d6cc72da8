// ============================================================================
// PLACEHOLDERS - Próximamente / 404 / sesión pendiente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::utils::i18n::t;
use crate::viewmodels::navigation::{navigate, Route};

/// Mensajes y fondos todavía no tienen backend
pub fn render_coming_soon(lang: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("placeholder-page")
        .child(ElementBuilder::new("div")?.class("placeholder-icon").text("🚧").build())?
        .child(ElementBuilder::new("h1")?.text(&t("coming_soon", lang)).build())?
        .child(ElementBuilder::new("p")?.text(&t("coming_soon_body", lang)).build())?
        .build())
}

pub fn render_not_found(lang: &str) -> Result<Element, JsValue> {
    let back = ElementBuilder::new("button")?
        .class("primary-button")
        .attr("type", "button")?
        .text(&t("back_home", lang))
        .on_click(|_| navigate(&Route::Home))?
        .build();
    Ok(ElementBuilder::new("section")?
        .class("placeholder-page")
        .child(ElementBuilder::new("h1")?.class("not-found-code").text(&t("not_found_code", lang)).build())?
        .child(ElementBuilder::new("p")?.text(&t("page_not_found", lang)).build())?
        .child(back)?
        .build())
}

/// Ruta protegida a la espera del primer sondeo de sesión
pub fn render_pending(lang: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("placeholder-page pending")
        .child(ElementBuilder::new("p")?.class("loading-text").text(&t("checking_session", lang)).build())?
        .build())
}
