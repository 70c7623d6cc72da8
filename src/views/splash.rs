// ============================================================================
// SPLASH - Pantalla inicial (se retira tras CONFIG.timing.splash_duration_ms)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::utils::i18n::t;

pub fn render_splash(lang: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("splash")
        .child(ElementBuilder::new("div")?.class("splash-logo").text("🕌").build())?
        .child(ElementBuilder::new("h1")?.class("splash-title").text(&CONFIG.app_name).build())?
        .child(ElementBuilder::new("p")?.class("splash-tagline").text(&t("app_tagline", lang)).build())?
        .child(ElementBuilder::new("p")?.class("splash-motto").text(&t("app_motto", lang)).build())?
        .build())
}
