// ============================================================================
// HOME - Fecha/hora en bengalí + horario de oración de ejemplo
// ============================================================================

use std::cell::Cell;
use chrono::{Local, Timelike};
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{replace_children, set_text_content, ElementBuilder};
use crate::models::{sample_prayer_times, PrayerTime};
use crate::state::app_state::AppState;
use crate::utils::bengali::{format_date, format_time};
use crate::utils::i18n::t;
use crate::views::MountedView;

fn render_prayer_card(prayer: &PrayerTime, lang: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class(if prayer.current { "prayer-card current" } else { "prayer-card" })
        .child(ElementBuilder::new("span")?.class("prayer-name").text(prayer.name).build())?
        .child(ElementBuilder::new("span")?.class("prayer-time").text(&prayer.time).build())?;

    let card = if prayer.current {
        card.child(
            ElementBuilder::new("span")?
                .class("prayer-badge")
                .text(&t("current_prayer", lang))
                .build(),
        )?
    } else {
        card
    };
    Ok(card.build())
}

fn render_prayer_grid(hour: u32, lang: &str) -> Result<Element, JsValue> {
    let cards = sample_prayer_times(hour)
        .iter()
        .map(|prayer| render_prayer_card(prayer, lang))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ElementBuilder::new("div")?.class("prayer-grid").children(cards)?.build())
}

/// Vista de inicio; el reloj vive mientras viva la vista
pub fn render_home(state: &AppState) -> Result<MountedView, JsValue> {
    let lang = state.lang();
    let now = Local::now();

    let date = ElementBuilder::new("p")?.class("today-date").text(&format_date(&now)).build();
    let time = ElementBuilder::new("p")?.class("today-time").text(&format_time(&now)).build();
    let grid_slot = ElementBuilder::new("div")?
        .class("prayer-grid-slot")
        .child(render_prayer_grid(now.hour(), &lang)?)?
        .build();

    let root = ElementBuilder::new("section")?
        .class("home")
        .child(ElementBuilder::new("h1")?.class("home-title").text(&t("home_title", &lang)).build())?
        .child(
            ElementBuilder::new("div")?
                .class("clock-card")
                .child(ElementBuilder::new("span")?.class("clock-label").text(&t("today_date", &lang)).build())?
                .child(date.clone())?
                .child(time.clone())?
                .build(),
        )?
        .child(ElementBuilder::new("h2")?.text(&t("prayer_schedule", &lang)).build())?
        .child(grid_slot.clone())?
        .build();

    let last_hour = Cell::new(now.hour());
    let clock = Interval::new(CONFIG.timing.clock_tick_ms, move || {
        let now = Local::now();
        set_text_content(&date, &format_date(&now));
        set_text_content(&time, &format_time(&now));

        if last_hour.replace(now.hour()) != now.hour() {
            match render_prayer_grid(now.hour(), &lang) {
                Ok(grid) => {
                    if let Err(e) = replace_children(&grid_slot, &grid) {
                        log::warn!("⚠️ [HOME] No se pudo actualizar el horario: {:?}", e);
                    }
                }
                Err(e) => log::warn!("⚠️ [HOME] Error renderizando horario: {:?}", e),
            }
        }
    });

    Ok(MountedView::new(root).with_guard(clock))
}
