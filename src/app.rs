// ============================================================================
// APP - Root component: owns state, mounts routes, renders into #app
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id, EventListener, Listeners};
use crate::errors::AppError;
use crate::router::current_browser_route;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::{BrowserStorage, ROOT_ELEMENT_ID};
use crate::viewmodels::RouteMounter;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
    mounter: RouteMounter,
    /// Listeners of the view currently on screen
    listeners: Listeners,
    _popstate: Option<EventListener>,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        let root = get_element_by_id(ROOT_ELEMENT_ID).ok_or(AppError::MissingRoot(ROOT_ELEMENT_ID))?;

        let state = AppState::new(Rc::new(BrowserStorage), current_browser_route());

        // Batch state changes into one re-render on the next tick
        state.subscribe_to_changes(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::rerender_app).forget();
        });

        // Back/forward buttons
        let popstate = match web_sys::window() {
            Some(win) => {
                let state = state.clone();
                Some(EventListener::new(&win, "popstate", move |_| {
                    state.sync_route(current_browser_route());
                })?)
            }
            None => None,
        };

        Ok(Self {
            state,
            root,
            mounter: RouteMounter::new(),
            listeners: Listeners::new(),
            _popstate: popstate,
        })
    }

    pub fn render(&mut self) -> Result<(), AppError> {
        if let Some(pending) = self.mounter.mount(&self.state) {
            let state = self.state.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                pending.run(&state, &api).await;
            });
        }

        let listeners = Listeners::new();
        let view = render_app(&self.state, &listeners)?;
        clear_children(&self.root);
        append_child(&self.root, &view)?;
        // Drops the previous view's listeners
        self.listeners = listeners;
        Ok(())
    }
}
