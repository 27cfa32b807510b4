// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, ElementBuilder, Listeners};
use crate::models::Icon;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::APP_TITLE;

pub fn render_login(state: &AppState, listeners: &Listeners) -> Result<Element, JsValue> {
    let form_state = state.login.snapshot();
    let submitting = state.login.is_submitting();

    let header = ElementBuilder::new("div")?
        .class("card-header login-header")
        .child(
            ElementBuilder::new("img")?
                .class("login-logo")
                .attr("src", "/logo.svg")?
                .attr("alt", "")?
                .build(),
        )?
        .child(ElementBuilder::new("h1")?.class("card-title").text(APP_TITLE).build())?
        .child(
            ElementBuilder::new("p")?
                .class("card-description")
                .text("Sign in to access the inventory management system")
                .build(),
        )?
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .attr("novalidate", "")?
        .build();

    if let Some(error) = &form_state.error {
        let alert = ElementBuilder::new("div")?
            .class("alert alert-destructive")
            .attr("role", "alert")?
            .child(crate::dom::icon(Icon::AlertTriangle)?)?
            .child(ElementBuilder::new("span")?.text(error).build())?
            .build();
        append_child(&form, &alert)?;
    }

    let username_group = input_group(
        "username",
        "Username",
        "text",
        "Enter your username",
        &form_state.username,
        submitting,
    )?;
    {
        let login = state.login.clone();
        if let Some(input) = username_group.query_selector("input")? {
            listeners.on_input_value(&input, move |value| login.set_username(&value))?;
        }
    }
    append_child(&form, &username_group)?;

    let password_group = input_group(
        "password",
        "Password",
        "password",
        "Enter your password",
        &form_state.password,
        submitting,
    )?;
    {
        let login = state.login.clone();
        if let Some(input) = password_group.query_selector("input")? {
            listeners.on_input_value(&input, move |value| login.set_password(&value))?;
        }
    }
    append_child(&form, &password_group)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .flag("disabled", submitting)?
        .text(state.login.button_label())
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        listeners.on_submit(&form, move || {
            let state = state.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                let outcome = state.login.submit(&state, &api).await;
                log::debug!("[LOGIN] Submit finished: {:?}", outcome);
            });
        })?;
    }

    let content = ElementBuilder::new("div")?
        .class("card-content")
        .child(form)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("card login-card")
        .child(header)?
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(card)?
        .build())
}

fn input_group(
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    disabled: bool,
) -> Result<Element, JsValue> {
    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .class("input")
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .flag("required", true)?
        .flag("disabled", disabled)?
        .build();
    // Property, not attribute: typed values stay out of the markup
    if let Some(field) = input.dyn_ref::<HtmlInputElement>() {
        field.set_value(value);
    }

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label_el)?
        .child(input)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use crate::utils::MemoryStore;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn typed_password_is_not_written_to_markup() {
        let state = AppState::new(Rc::new(MemoryStore::new()), Route::Login);
        state.login.set_username("admin");
        state.login.set_password("s3cret");

        let listeners = Listeners::new();
        let view = render_login(&state, &listeners).unwrap();
        let password = view.query_selector("#password").unwrap().unwrap();

        assert_eq!(password.get_attribute("value"), None);
        assert_eq!(
            password.dyn_into::<HtmlInputElement>().unwrap().value(),
            "s3cret"
        );
        assert!(!view.outer_html().contains("s3cret"));
    }
}
