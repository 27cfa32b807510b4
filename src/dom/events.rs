// ============================================================================
// EVENT HANDLING
// ============================================================================
// Every listener is an `EventListener` handle: dropping it detaches the
// callback and frees the closure. Listeners of a rendered view live in a
// `Listeners` bag owned by the App, which replaces the bag on each render.
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, MouseEvent};

/// Registered listener; removed from its target when dropped
pub struct EventListener {
    target: EventTarget,
    event_type: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type: event_type.to_string(),
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            &self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Listeners attached while building one view tree
#[derive(Default)]
pub struct Listeners {
    handles: RefCell<Vec<EventListener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event<F>(&self, target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let listener = EventListener::new(target, event_type, handler)?;
        self.handles.borrow_mut().push(listener);
        Ok(())
    }

    pub fn on_click<F>(&self, element: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        self.on_event(element, "click", move |e: Event| {
            if let Ok(mouse) = e.dyn_into::<MouseEvent>() {
                handler(mouse);
            }
        })
    }

    /// Input handler receiving the input's current value
    pub fn on_input_value<F>(&self, element: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(String) + 'static,
    {
        self.on_event(element, "input", move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                handler(input.value());
            }
        })
    }

    /// Submit handler; the browser's default navigation is always prevented
    pub fn on_submit<F>(&self, form: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        self.on_event(form, "submit", move |e: Event| {
            e.prevent_default();
            handler();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::create_element;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn click(element: &Element) {
        let event = MouseEvent::new("click").unwrap();
        element.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn dropping_the_bag_detaches_its_listeners() {
        let button = create_element("button").unwrap();
        let clicks = Rc::new(Cell::new(0));

        let listeners = Listeners::new();
        {
            let clicks = clicks.clone();
            listeners
                .on_click(&button, move |_| clicks.set(clicks.get() + 1))
                .unwrap();
        }
        click(&button);
        assert_eq!(clicks.get(), 1);

        drop(listeners);
        click(&button);
        assert_eq!(clicks.get(), 1);
    }
}
