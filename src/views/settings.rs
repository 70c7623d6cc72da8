// ============================================================================
// SETTINGS VIEW - Perfil + acciones (transacciones, salir, logout, idioma)
// ============================================================================

use futures::stream::{self, StreamExt};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, replace_children, ElementBuilder};
use crate::models::UserProfile;
use crate::services::Subscription;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::account_viewmodel::ProfileOutcome;
use crate::viewmodels::navigation::{navigate, Route};
use crate::viewmodels::session_viewmodel::now_ms;
use crate::views::MountedView;

fn render_avatar(profile: &UserProfile) -> Result<Element, JsValue> {
    match &profile.profile_photo {
        Some(src) if !src.is_empty() => Ok(ElementBuilder::new("img")?
            .class("avatar")
            .attr("src", src)?
            .attr("alt", &profile.full_name())?
            .build()),
        _ => Ok(ElementBuilder::new("div")?.class("avatar").text(&profile.initial()).build()),
    }
}

fn action_button<F>(icon: &str, label: &str, handler: F) -> Result<Element, JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    Ok(ElementBuilder::new("li")?
        .class("settings-action")
        .child(ElementBuilder::new("span")?.class("action-icon").text(icon).build())?
        .child(ElementBuilder::new("span")?.class("action-label").text(label).build())?
        .on_click(handler)?
        .build())
}

fn render_profile(state: &AppState, profile: &UserProfile) -> Result<Element, JsValue> {
    let lang = state.lang();

    let header = ElementBuilder::new("div")?
        .class("profile-header")
        .child(render_avatar(profile)?)?
        .child(ElementBuilder::new("h2")?.class("profile-name").text(&profile.full_name()).build())?
        .child(ElementBuilder::new("p")?.class("profile-title").text(&profile.title).build())?
        .build();

    let actions = ElementBuilder::new("ul")?.class("settings-actions").build();

    // Sin página propia: cae en la ruta 404
    append_child(
        &actions,
        &action_button("💳", &t("transactions", &lang), |_| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_hash("/transactions");
            }
        })?,
    )?;

    append_child(
        &actions,
        &action_button("⏻", &t("exit_app", &lang), |_| {
            log::info!("👋 [SETTINGS] Cerrando la app");
            if let Some(window) = web_sys::window() {
                let _ = window.close();
            }
        })?,
    )?;

    {
        let state = state.clone();
        append_child(
            &actions,
            &action_button("🚪", &t("logout", &lang), move |_| {
                state.account.logout(now_ms());
                navigate(&Route::Login);
            })?,
        )?;
    }

    {
        let state = state.clone();
        let next = if lang.eq_ignore_ascii_case("EN") { "BN" } else { "EN" };
        append_child(
            &actions,
            &action_button("🌐", &format!("{}: {}", t("language", &lang), next), move |_| {
                state.set_language(next);
            })?,
        )?;
    }

    Ok(ElementBuilder::new("div")?
        .class("profile-card")
        .child(header)?
        .child(actions)?
        .build())
}

pub fn render_settings(state: &AppState) -> Result<MountedView, JsValue> {
    let lang = state.lang();
    let root = ElementBuilder::new("section")?
        .class("settings-page")
        .child(ElementBuilder::new("p")?.class("loading-text").text(&t("loading_profile", &lang)).build())?
        .build();

    let account = state.account.clone();
    let profile = stream::once(async move { account.load_profile().await }).boxed_local();

    let view_state = state.clone();
    let slot = root.clone();
    let subscription = Subscription::spawn("settings/profile", profile, move |outcome| match outcome {
        ProfileOutcome::Loaded(profile) => {
            if let Err(e) = render_profile(&view_state, &profile).and_then(|card| replace_children(&slot, &card)) {
                log::error!("❌ [SETTINGS] Error renderizando perfil: {:?}", e);
            }
        }
        ProfileOutcome::LoginRequired => navigate(&Route::Login),
    });

    Ok(MountedView::new(root).with_guard(subscription))
}
