// ============================================================================
// SESSION GUARD - Decides whether a route may render
// ============================================================================

use crate::errors::SessionError;
use crate::models::User;
use crate::router::Route;
use crate::services::{ApiClient, HttpTransport};
use crate::state::{AppState, MountToken, SessionContext};

#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    Redirect(Route),
    Proceed { user: Option<User> },
}

/// Protected views: no token → login. A corrupted user record clears the
/// whole session and forces a fresh login.
pub fn guard_protected(session: &SessionContext) -> GuardDecision {
    if !session.has_token() {
        log::info!("🔒 [GUARD] No session token, redirecting to login");
        return GuardDecision::Redirect(Route::Login);
    }

    match session.user() {
        Ok(user) => GuardDecision::Proceed { user },
        Err(SessionError::CorruptUser(reason)) => {
            log::warn!("⚠️ [GUARD] Stored user record is corrupted ({}), clearing session", reason);
            if let Err(e) = session.clear() {
                log::error!("❌ [GUARD] Could not clear session: {}", e);
            }
            GuardDecision::Redirect(Route::Login)
        }
        Err(e) => {
            log::warn!("⚠️ [GUARD] Could not read user record: {}", e);
            GuardDecision::Proceed { user: None }
        }
    }
}

/// Login view: already signed in → dashboard
pub fn guard_public(session: &SessionContext) -> GuardDecision {
    if session.has_token() {
        log::info!("🔓 [GUARD] Session present, skipping login");
        GuardDecision::Redirect(Route::Dashboard)
    } else {
        GuardDecision::Proceed { user: None }
    }
}

/// Stats fetch to run for a freshly mounted dashboard
#[derive(Clone, Debug)]
pub struct PendingLoad {
    pub token: String,
    pub mount: MountToken,
}

impl PendingLoad {
    pub async fn run<T: HttpTransport>(self, state: &AppState, api: &ApiClient<T>) -> bool {
        state.dashboard.load(state, api, &self.token, self.mount).await
    }
}

/// Mount the current route: apply its guard (navigating on redirect) and
/// hand back the stats fetch if the dashboard was mounted.
pub fn enter_route(state: &AppState) -> Option<PendingLoad> {
    let route = state.current_route();
    match route {
        Route::Login => {
            if let GuardDecision::Redirect(target) = guard_public(&state.session) {
                state.navigate(target);
            }
            None
        }
        Route::Dashboard => state.dashboard.begin(state),
        Route::Section(_) => {
            if let GuardDecision::Redirect(target) = guard_protected(&state.session) {
                state.navigate(target);
            }
            None
        }
    }
}

/// Longest chain a single mount can produce: Login -> Dashboard -> Login
const MAX_REDIRECTS: usize = 2;

/// Remembers which route version the on-screen view was mounted for, so
/// re-renders of the same page never re-run guards or fetches.
#[derive(Debug, Default)]
pub struct RouteMounter {
    mounted_version: Option<u64>,
}

impl RouteMounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// View on screen matches the current route
    pub fn is_settled(&self, state: &AppState) -> bool {
        self.mounted_version == Some(state.route_version())
    }

    /// Follow guard redirects until the route settles; returns the stats
    /// fetch of the page that ended up mounted.
    pub fn mount(&mut self, state: &AppState) -> Option<PendingLoad> {
        let mut pending = None;
        for _ in 0..=MAX_REDIRECTS {
            if self.is_settled(state) {
                return pending;
            }
            log::info!("🎬 [APP] Mounting {}", state.current_route().path());
            self.mounted_version = Some(state.route_version());
            pending = enter_route(state);
        }
        if !self.is_settled(state) {
            log::warn!(
                "⚠️ [APP] Too many redirects, rendering {}",
                state.current_route().path()
            );
        }
        pending
    }
}

/// Protected pages never render without a token, even before the guard ran
pub fn may_render(state: &AppState) -> bool {
    !state.current_route().is_protected() || state.session.has_token()
}
