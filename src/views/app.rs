// ============================================================================
// APP VIEW - Ruta → vista montada
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::state::app_state::AppState;
use crate::viewmodels::navigation::Route;
use crate::views::{
    render_coming_soon, render_district, render_home, render_location_list, render_login,
    render_members, render_not_found, render_report, render_settings, LocationKind, MountedView,
};

/// Monta la vista de `route` (el gate ya se evaluó antes)
pub fn render_route(state: &AppState, route: &Route) -> Result<MountedView, JsValue> {
    let lang = state.lang();
    match route {
        Route::Home => render_home(state),
        Route::Messages | Route::Fund => render_coming_soon(&lang).map(MountedView::from),
        Route::Settings => render_settings(state),
        Route::District => render_district(state),
        Route::Thana => render_location_list(state, LocationKind::Thana),
        Route::ThanaPersons(id) => render_members(state, LocationKind::Thana, id),
        Route::Union => render_location_list(state, LocationKind::Union),
        Route::UnionPersons(id) => render_members(state, LocationKind::Union, id),
        Route::Report => render_report(state).map(MountedView::from),
        Route::Login => render_login(state).map(MountedView::from),
        Route::NotFound => render_not_found(&lang).map(MountedView::from),
    }
}
