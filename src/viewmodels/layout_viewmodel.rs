// ============================================================================
// LAYOUT VIEWMODEL - Sidebar entries, mobile drawer, logout
// ============================================================================

use crate::models::{NavItem, NAVIGATION};
use crate::router::Route;
use crate::state::AppState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavEntry {
    pub item: &'static NavItem,
    pub active: bool,
}

pub fn nav_entries(route: &Route) -> Vec<NavEntry> {
    let current = route.path();
    NAVIGATION
        .iter()
        .map(|item| NavEntry {
            item,
            active: item.is_active(current),
        })
        .collect()
}

/// Navigate to an entry (closes the mobile drawer)
pub fn select_nav_item(state: &AppState, item: &NavItem) {
    state.navigate(Route::from_path(item.path));
}

pub fn toggle_sidebar(state: &AppState) {
    state.set_sidebar_open(!state.is_sidebar_open());
}

/// Clear the persisted session and go back to the login page. No server
/// call is made; the token simply stops being sent.
pub fn logout(state: &AppState) {
    log::info!("👋 [LAYOUT] Logout");
    if let Err(e) = state.session.clear() {
        log::error!("❌ [LAYOUT] Error clearing session: {}", e);
    }
    state.login.reset();
    state.dashboard.reset();
    state.navigate(Route::Login);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::utils::{KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, USER_KEY};
    use crate::viewmodels::guard::enter_route;
    use std::rc::Rc;

    #[test]
    fn exactly_one_entry_active_on_dashboard() {
        let entries = nav_entries(&Route::Dashboard);
        assert_eq!(entries.len(), 8);
        let active: Vec<_> = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.item.label)
            .collect();
        assert_eq!(active, vec!["Dashboard"]);
    }

    #[test]
    fn no_entry_active_on_login() {
        assert!(nav_entries(&Route::Login).iter().all(|e| !e.active));
    }

    #[test]
    fn logout_clears_session_and_next_visit_redirects() {
        let store = MemoryStore::new();
        let state = AppState::new(Rc::new(store.clone()), Route::Dashboard);
        state
            .session
            .persist("abc123", &User::with_full_name("Admin User"))
            .unwrap();

        logout(&state);

        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
        assert_eq!(state.current_route(), Route::Login);

        state.navigate(Route::Dashboard);
        assert!(enter_route(&state).is_none());
        assert_eq!(state.current_route(), Route::Login);
    }

    #[test]
    fn drawer_toggles_and_closes_on_selection() {
        let state = AppState::new(Rc::new(MemoryStore::new()), Route::Dashboard);
        toggle_sidebar(&state);
        assert!(state.is_sidebar_open());

        select_nav_item(&state, &NAVIGATION[4]);
        assert!(!state.is_sidebar_open());
        assert_eq!(state.current_route(), Route::Section("/dashboard/reports".into()));
    }
}
