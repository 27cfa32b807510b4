// ============================================================================
// APP VIEW - Picks the page for the current route
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{ElementBuilder, Listeners};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::may_render;
use crate::views::{render_dashboard, render_layout, render_login, render_section};

pub fn render_app(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    if !may_render(state) {
        // Guard redirect is pending; render nothing protected meanwhile
        return Ok(ElementBuilder::new("div")?.class("app-empty").build());
    }

    let route = state.current_route();
    match route {
        Route::Login => render_login(state, listeners),
        Route::Dashboard => render_layout(state, listeners, render_dashboard(state, listeners)?),
        Route::Section(_) => render_layout(state, listeners, render_section(&route)?),
    }
}
