// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: closure.forget(); el navegador los libera
//   cuando el elemento se destruye.
// - Listeners globales (window): `WindowListener`, que se desregistra al
//   soltarse.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", move |event: Event| {
        if let Ok(mouse) = event.dyn_into::<MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Helper para crear input handler (recibe el evento genérico)
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "input", handler)
}

/// Submit de formulario, con preventDefault
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}

/// Listener registrado en `window`; se elimina al soltar el guard
pub struct WindowListener {
    event_type: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event_type: &str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            event_type: event_type.to_string(),
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                &self.event_type,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
