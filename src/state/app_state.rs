// ============================================================================
// APP STATE - Application state passed to every view
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::router::{push_history, Route};
use crate::state::{MountTracker, SessionContext};
use crate::utils::KeyValueStore;
use crate::viewmodels::{DashboardViewModel, LoginViewModel};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionContext,
    pub route: Rc<RefCell<Route>>,
    /// Bumped on every actual route change
    pub route_version: Rc<Cell<u64>>,
    pub mounts: MountTracker,

    // View models
    pub login: LoginViewModel,
    pub dashboard: DashboardViewModel,

    // UI state
    pub sidebar_open: Rc<RefCell<bool>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(store: Rc<dyn KeyValueStore>, initial_route: Route) -> Self {
        Self {
            session: SessionContext::new(store),
            route: Rc::new(RefCell::new(initial_route)),
            route_version: Rc::new(Cell::new(0)),
            mounts: MountTracker::new(),
            login: LoginViewModel::new(),
            dashboard: DashboardViewModel::new(),
            sidebar_open: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Switch page: unmounts the current view, updates history, notifies.
    /// Navigating to the page already shown keeps it mounted.
    pub fn navigate(&self, route: Route) {
        log::info!("🧭 [ROUTER] → {}", route.path());
        if *self.route.borrow() == route {
            *self.sidebar_open.borrow_mut() = false;
            self.notify_change();
            return;
        }
        self.mounts.invalidate();
        *self.sidebar_open.borrow_mut() = false;
        push_history(&route);
        self.set_route(route);
        self.notify_change();
    }

    /// Route change coming from the browser (back/forward); history is already there
    pub fn sync_route(&self, route: Route) {
        if *self.route.borrow() == route {
            return;
        }
        self.mounts.invalidate();
        *self.sidebar_open.borrow_mut() = false;
        self.set_route(route);
        self.notify_change();
    }

    fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
        self.route_version.set(self.route_version.get().wrapping_add(1));
    }

    pub fn route_version(&self) -> u64 {
        self.route_version.get()
    }

    pub fn set_sidebar_open(&self, open: bool) {
        *self.sidebar_open.borrow_mut() = open;
        self.notify_change();
    }

    pub fn is_sidebar_open(&self) -> bool {
        *self.sidebar_open.borrow()
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_change(&self) {
        // Clone the list so a subscriber may subscribe/notify again
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;

    #[test]
    fn navigate_invalidates_mounts_and_notifies() {
        let state = AppState::new(Rc::new(MemoryStore::new()), Route::Login);
        let notified = Rc::new(Cell::new(0));
        {
            let notified = notified.clone();
            state.subscribe_to_changes(move || notified.set(notified.get() + 1));
        }

        let token = state.mounts.mount();
        state.set_sidebar_open(true);
        state.navigate(Route::Dashboard);

        assert_eq!(state.current_route(), Route::Dashboard);
        assert!(!token.is_current());
        assert!(!state.is_sidebar_open());
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn navigating_to_current_route_keeps_mount() {
        let state = AppState::new(Rc::new(MemoryStore::new()), Route::Dashboard);
        let token = state.mounts.mount();
        state.set_sidebar_open(true);
        state.navigate(Route::Dashboard);
        assert!(token.is_current());
        assert!(!state.is_sidebar_open());
        assert_eq!(state.route_version(), 0);

        state.navigate(Route::Login);
        state.navigate(Route::Dashboard);
        assert_eq!(state.route_version(), 2);
    }

    #[test]
    fn sync_route_ignores_same_route() {
        let state = AppState::new(Rc::new(MemoryStore::new()), Route::Dashboard);
        let notified = Rc::new(Cell::new(0));
        {
            let notified = notified.clone();
            state.subscribe_to_changes(move || notified.set(notified.get() + 1));
        }
        let token = state.mounts.mount();
        state.sync_route(Route::Dashboard);
        assert!(token.is_current());
        assert_eq!(notified.get(), 0);

        state.sync_route(Route::Login);
        assert!(!token.is_current());
        assert_eq!(notified.get(), 1);
    }
}
