// ============================================================================
// DASHBOARD VIEW - Greeting, stats grid, quick actions
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, icon, ElementBuilder, Listeners};
use crate::models::Icon;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::dashboard_viewmodel::{StatCard, StatsLoad, PLACEHOLDER_CARDS, QUICK_ACTIONS};

pub fn render_dashboard(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page dashboard").build();

    let heading = ElementBuilder::new("div")?
        .class("page-heading")
        .child(ElementBuilder::new("h1")?.text("Dashboard").build())?
        .build();
    if let Some(greeting) = state.dashboard.greeting() {
        append_child(
            &heading,
            &ElementBuilder::new("p")?.class("muted").text(&greeting).build(),
        )?;
    }
    append_child(&page, &heading)?;

    match state.dashboard.stats_load() {
        StatsLoad::Idle | StatsLoad::Loading => {
            append_child(&page, &render_placeholders()?)?;
        }
        StatsLoad::Loaded(stats) => {
            let grid = ElementBuilder::new("div")?
                .class("stats-grid")
                .children(
                    StatCard::from_stats(&stats)
                        .iter()
                        .map(render_stat_card)
                        .collect::<Result<Vec<_>, _>>()?,
                )?
                .build();
            append_child(&page, &grid)?;
        }
        StatsLoad::Failed(message) => {
            let alert = ElementBuilder::new("div")?
                .class("alert alert-destructive")
                .attr("role", "alert")?
                .child(icon(Icon::AlertTriangle)?)?
                .child(ElementBuilder::new("span")?.text(&message).build())?
                .build();
            append_child(&page, &alert)?;
        }
    }

    append_child(&page, &render_quick_actions(state, listeners)?)?;
    Ok(page)
}

fn render_placeholders() -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?
        .class("stats-grid")
        .attr("aria-busy", "true")?
        .build();
    for _ in 0..PLACEHOLDER_CARDS {
        let card = ElementBuilder::new("div")?
            .class("card stat-card")
            .child(ElementBuilder::new("div")?.class("skeleton skeleton-label").build())?
            .child(ElementBuilder::new("div")?.class("skeleton skeleton-value").build())?
            .build();
        append_child(&grid, &card)?;
    }
    Ok(grid)
}

fn render_stat_card(card: &StatCard) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("stat-header")
        .child(ElementBuilder::new("h3")?.class("stat-label").text(card.label).build())?
        .child(icon(card.icon)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class(&format!("card stat-card {}", card.tone))
        .child(header)?
        .child(
            ElementBuilder::new("div")?
                .class("stat-value")
                .text(&card.value.to_string())
                .build(),
        )?
        .child(ElementBuilder::new("p")?.class("muted small").text(card.caption).build())?
        .build())
}

fn render_quick_actions(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("quick-actions").build();

    for (title, description, path) in QUICK_ACTIONS {
        let action = ElementBuilder::new("div")?
            .class("card card-dashed quick-action")
            .attr("role", "button")?
            .child(ElementBuilder::new("h4")?.text(title).build())?
            .child(ElementBuilder::new("p")?.class("muted").text(description).build())?
            .build();
        let state = state.clone();
        listeners.on_click(&action, move |_| state.navigate(Route::from_path(path)))?;
        append_child(&grid, &action)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("card")
        .child(
            ElementBuilder::new("div")?
                .class("card-header")
                .child(ElementBuilder::new("h2")?.class("card-title").text("Quick Actions").build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("card-description")
                        .text("Common tasks to get you started")
                        .build(),
                )?
                .build(),
        )?
        .child(ElementBuilder::new("div")?.class("card-content").child(grid)?.build())?
        .build())
}
