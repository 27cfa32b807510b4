// ============================================================================
// DASHBOARD LAYOUT - Sidebar (desktop + mobile drawer), top bar, logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, icon, ElementBuilder, Listeners};
use crate::models::Icon;
use crate::state::AppState;
use crate::viewmodels::layout_viewmodel::{logout, nav_entries, select_nav_item, toggle_sidebar};

/// Wrap a protected page in the navigation frame
pub fn render_layout(
    state: &AppState,
    listeners: &Listeners,
    content: Element,
) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("layout").build();

    if state.is_sidebar_open() {
        append_child(&root, &render_mobile_drawer(state, listeners)?)?;
    }

    append_child(&root, &render_desktop_sidebar(state, listeners)?)?;

    let topbar = render_mobile_topbar(state, listeners)?;
    let main = ElementBuilder::new("main")?
        .class("layout-main")
        .child(ElementBuilder::new("div")?.class("layout-content").child(content)?.build())?
        .build();
    let column = ElementBuilder::new("div")?
        .class("layout-column")
        .child(topbar)?
        .child(main)?
        .build();
    append_child(&root, &column)?;

    Ok(root)
}

fn render_nav(state: &AppState, listeners: &Listeners, mobile: bool) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("nav").build();
    let route = state.current_route();

    for entry in nav_entries(&route) {
        let class = match (entry.active, mobile) {
            (true, true) => "nav-link active active-mobile",
            (true, false) => "nav-link active",
            (false, _) => "nav-link",
        };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", entry.item.path)?
            .child(icon(entry.item.icon)?)?
            .child(ElementBuilder::new("span")?.text(entry.item.label).build())?
            .build();

        let state = state.clone();
        let item = entry.item;
        listeners.on_click(&link, move |e| {
            e.prevent_default();
            select_nav_item(&state, item);
        })?;

        append_child(&nav, &link)?;
    }

    Ok(nav)
}

fn render_logo(caption: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("brand")
        .child(
            ElementBuilder::new("img")?
                .class("brand-logo")
                .attr("src", "/logo.svg")?
                .attr("alt", "")?
                .build(),
        )?
        .child(ElementBuilder::new("span")?.class("brand-name").text(caption).build())?
        .build())
}

fn render_desktop_sidebar(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    let logout_btn = ElementBuilder::new("button")?
        .class("btn btn-ghost btn-logout")
        .attr("type", "button")?
        .child(icon(Icon::LogOut)?)?
        .child(ElementBuilder::new("span")?.text("Logout").build())?
        .build();
    {
        let state = state.clone();
        listeners.on_click(&logout_btn, move |_| logout(&state))?;
    }

    Ok(ElementBuilder::new("aside")?
        .class("sidebar sidebar-desktop")
        .child(render_logo("Store")?)?
        .child(render_nav(state, listeners, false)?)?
        .child(ElementBuilder::new("div")?.class("sidebar-footer").child(logout_btn)?.build())?
        .build())
}

fn render_mobile_drawer(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    let backdrop = ElementBuilder::new("div")?.class("drawer-backdrop").build();
    {
        let state = state.clone();
        listeners.on_click(&backdrop, move |_| state.set_sidebar_open(false))?;
    }

    let close_btn = ElementBuilder::new("button")?
        .class("btn btn-ghost btn-icon")
        .attr("type", "button")?
        .attr("aria-label", "Close menu")?
        .child(icon(Icon::Close)?)?
        .build();
    {
        let state = state.clone();
        listeners.on_click(&close_btn, move |_| state.set_sidebar_open(false))?;
    }

    let drawer = ElementBuilder::new("div")?
        .class("drawer")
        .child(
            ElementBuilder::new("div")?
                .class("drawer-header")
                .child(ElementBuilder::new("h2")?.text("Store Inventory").build())?
                .child(close_btn)?
                .build(),
        )?
        .child(render_nav(state, listeners, true)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("drawer-overlay")
        .child(backdrop)?
        .child(drawer)?
        .build())
}

fn render_mobile_topbar(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    let menu_btn = ElementBuilder::new("button")?
        .class("btn btn-ghost btn-icon")
        .attr("type", "button")?
        .attr("aria-label", "Open menu")?
        .child(icon(Icon::Menu)?)?
        .build();
    {
        let state = state.clone();
        listeners.on_click(&menu_btn, move |_| toggle_sidebar(&state))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("topbar-mobile")
        .child(menu_btn)?
        .child(render_logo("Store")?)?
        .build())
}
