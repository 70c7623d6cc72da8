// ============================================================================
// PERSON CARD - Tarjeta desplegable de un miembro
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::Person;
use crate::utils::i18n::t;

fn detail_row(icon: &str, label: &str, value: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("person-detail")
        .child(ElementBuilder::new("span")?.class("detail-icon").text(icon).build())?
        .child(ElementBuilder::new("span")?.class("detail-label").text(label).build())?
        .child(value)?
        .build())
}

fn link(href: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?.attr("href", href)?.text(text).build())
}

pub fn render_person_card(person: &Person, lang: &str) -> Result<Element, JsValue> {
    let summary = ElementBuilder::new("summary")?
        .class("person-summary")
        .child(ElementBuilder::new("span")?.class("person-title").text(&person.title).build())?
        .child(ElementBuilder::new("span")?.class("person-name").text(&person.name).build())?
        .build();

    let blood = ElementBuilder::new("span")?.text(&person.blood_group).build();
    let details = ElementBuilder::new("div")?
        .class("person-details")
        .child(detail_row("🩸", &t("blood_group", lang), blood)?)?
        .child(detail_row("📞", &t("phone", lang), link(&person.tel_href(), &person.phone)?)?)?
        .child(detail_row("✉️", &t("email", lang), link(&person.mailto_href(), &person.email)?)?)?
        .build();

    Ok(ElementBuilder::new("details")?
        .class("person-card")
        .attr("data-person-id", &person.id)?
        .child(summary)?
        .child(details)?
        .build())
}
