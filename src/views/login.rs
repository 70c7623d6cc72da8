// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};
use crate::dom::{input_value, on_submit, set_text_content, toggle_class, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::navigation::{navigate, Route};
use crate::viewmodels::session_viewmodel::now_ms;

fn render_field(label: &str, input_type: &str, placeholder: &str) -> Result<(Element, Element), JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .build();
    let group = ElementBuilder::new("label")?
        .class("form-group")
        .child(ElementBuilder::new("span")?.class("form-label").text(label).build())?
        .child(input.clone())?
        .build();
    Ok((group, input))
}

fn set_disabled(button: &Element, disabled: bool) {
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");
    let lang = state.lang();

    let (id_group, id_input) = render_field(&t("user_id", &lang), "number", "1")?;
    let (password_group, password_input) = render_field(&t("password", &lang), "password", "••••••••")?;

    let error = ElementBuilder::new("p")?.class("form-error hidden").build();
    let submit = ElementBuilder::new("button")?
        .class("primary-button")
        .attr("type", "submit")?
        .text(&t("login_title", &lang))
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(id_group)?
        .child(password_group)?
        .child(error.clone())?
        .child(submit.clone())?
        .build();

    {
        let account = state.account.clone();
        let lang = lang.clone();
        on_submit(&form, move || {
            let user_id = input_value(&id_input);
            let password = input_value(&password_input);
            let account = account.clone();
            let error = error.clone();
            let submit = submit.clone();
            let lang = lang.clone();

            let _ = toggle_class(&error, "hidden", true);
            set_disabled(&submit, true);
            set_text_content(&submit, &t("loading", &lang));

            spawn_local(async move {
                let result = account.login(&user_id, &password, now_ms()).await;
                set_disabled(&submit, false);
                set_text_content(&submit, &t("login_title", &lang));
                match result {
                    Ok(_) => navigate(&Route::Home),
                    Err(e) => {
                        log::warn!("🔐 [LOGIN] {}", e);
                        set_text_content(&error, &t(e.message_key(), &lang));
                        let _ = toggle_class(&error, "hidden", false);
                    }
                }
            });
        })?;
    }

    Ok(ElementBuilder::new("section")?
        .class("login-screen")
        .child(ElementBuilder::new("h2")?.class("login-title").text(&t("login_title", &lang)).build())?
        .child(form)?
        .build())
}
