use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;

/// Placeholder page for the non-dashboard sidebar entries
pub fn render_section(route: &Route) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("page section")
        .child(ElementBuilder::new("h1")?.text(route.title()).build())?
        .child(
            ElementBuilder::new("p")?
                .class("muted")
                .text("This section is not available yet.")
                .build(),
        )?
        .build())
}
