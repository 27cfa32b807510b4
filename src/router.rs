// ============================================================================
// ROUTER - Path <-> Route mapping + browser history
// ============================================================================

use crate::models::find_nav_item;

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    /// Any other page under `/dashboard/`
    Section(String),
}

impl Route {
    /// Resolve a location path; unknown paths land on the login page
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match trimmed {
            DASHBOARD_PATH => Route::Dashboard,
            p if p.starts_with("/dashboard/") => Route::Section(p.to_string()),
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Dashboard => DASHBOARD_PATH,
            Route::Section(path) => path,
        }
    }

    /// Needs a session token to render
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Page heading for section pages
    pub fn title(&self) -> &str {
        match self {
            Route::Login => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Section(path) => find_nav_item(path)
                .map(|item| item.label)
                .unwrap_or("Page not found"),
        }
    }
}

/// Current `location.pathname`
#[cfg(target_arch = "wasm32")]
pub fn current_browser_route() -> Route {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}

/// Push the route onto the history stack unless it is already the current entry
#[cfg(target_arch = "wasm32")]
pub fn push_history(route: &Route) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let current = win.location().pathname().unwrap_or_default();
    if current == route.path() {
        return;
    }
    if let Ok(history) = win.history() {
        if let Err(e) = history.push_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(route.path()),
        ) {
            log::warn!("⚠️ [ROUTER] pushState failed: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn push_history(_route: &Route) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard?tab=1"), Route::Dashboard);
        assert_eq!(
            Route::from_path("/dashboard/inventory"),
            Route::Section("/dashboard/inventory".into())
        );
    }

    #[test]
    fn unknown_paths_go_to_login() {
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/admin"), Route::Login);
        assert_eq!(Route::from_path("/dashboardx"), Route::Login);
    }

    #[test]
    fn path_round_trip_and_protection() {
        for route in [
            Route::Login,
            Route::Dashboard,
            Route::Section("/dashboard/reports".into()),
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert!(!Route::Login.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Section("/dashboard/users".into()).is_protected());
    }

    #[test]
    fn section_titles() {
        assert_eq!(Route::Section("/dashboard/suppliers".into()).title(), "Suppliers");
        assert_eq!(Route::Section("/dashboard/unknown".into()).title(), "Page not found");
    }
}
