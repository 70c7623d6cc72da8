//! Tests en navegador: cookie, localStorage, hash y redirección de nodos inexistentes.
//! `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt};
use gloo_timers::future::TimeoutFuture;
use iabnu_app::config::CONFIG;
use iabnu_app::services::{BackendError, RealtimeBackend, Snapshot, SnapshotStream};
use iabnu_app::state::app_state::AppState;
use iabnu_app::stores::{CookieStore, DeviceStore, UserIdStore};
use iabnu_app::viewmodels::navigation::{current_route, Route};
use iabnu_app::views::{render_members, LocationKind};
use serde_json::Value;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn cookie_store_round_trips_and_clears() {
    let store = CookieStore::new(7);
    store.save("42").unwrap();
    assert_eq!(store.load().as_deref(), Some("42"));

    store.remove().unwrap();
    store.remove().unwrap();
    assert_eq!(store.load(), None);
}

#[wasm_bindgen_test]
fn device_store_keeps_plain_string() {
    let store = DeviceStore;
    store.save("7").unwrap();
    let raw = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item("userId")
        .unwrap();
    assert_eq!(raw.as_deref(), Some("7"));
    assert_eq!(store.load().as_deref(), Some("7"));

    store.remove().unwrap();
    assert_eq!(store.load(), None);
}

#[wasm_bindgen_test]
fn current_route_follows_location_hash() {
    let window = web_sys::window().unwrap();
    window.location().set_hash("/thana/5/person").unwrap();
    assert_eq!(current_route(), Route::ThanaPersons("5".into()));
    window.location().set_hash("").unwrap();
}

/// Backend sin datos: cualquier ruta existe como `null` y el listener no se cierra
struct EmptyBackend;

#[async_trait(?Send)]
impl RealtimeBackend for EmptyBackend {
    async fn get(&self, _path: &str) -> Result<Snapshot, BackendError> {
        Ok(Snapshot::empty())
    }

    async fn push(&self, path: &str, _value: Value) -> Result<String, BackendError> {
        Err(BackendError::PermissionDenied(path.to_string()))
    }

    fn subscribe(&self, _path: &str) -> Result<SnapshotStream, BackendError> {
        Ok(stream::once(future::ready(Ok(Snapshot::empty())))
            .chain(stream::pending())
            .boxed_local())
    }
}

fn empty_state() -> AppState {
    AppState::new(
        Rc::new(EmptyBackend),
        Rc::new(CookieStore::new(7)),
        Rc::new(DeviceStore),
        "BN".to_string(),
    )
}

#[wasm_bindgen_test]
async fn unknown_thana_shows_error_then_returns_to_list() {
    let window = web_sys::window().unwrap();
    window.location().set_hash("/thana/77/person").unwrap();

    let state = empty_state();
    let view = render_members(&state, LocationKind::Thana, "77").unwrap();
    TimeoutFuture::new(50).await;

    let text = view.element.text_content().unwrap_or_default();
    assert!(text.contains("থানা খুঁজে পাওয়া যায়নি"), "{}", text);
    assert_eq!(current_route(), Route::ThanaPersons("77".into()));

    TimeoutFuture::new(CONFIG.timing.not_found_redirect_ms + 200).await;
    assert_eq!(current_route(), Route::Thana);

    drop(view);
    window.location().set_hash("").unwrap();
}

#[wasm_bindgen_test]
async fn leaving_the_page_cancels_the_not_found_redirect() {
    let window = web_sys::window().unwrap();
    window.location().set_hash("/union/9/person").unwrap();

    let state = empty_state();
    let view = render_members(&state, LocationKind::Union, "9").unwrap();
    TimeoutFuture::new(50).await;
    drop(view);

    TimeoutFuture::new(CONFIG.timing.not_found_redirect_ms + 200).await;
    assert_eq!(current_route(), Route::UnionPersons("9".into()));
    window.location().set_hash("").unwrap();
}
