// ============================================================================
// DASHBOARD VIEWMODEL - Greeting + one stats fetch per mount
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::ApiError;
use crate::models::{DashboardStats, Icon, User};
use crate::services::{ApiClient, HttpTransport};
use crate::state::{AppState, MountToken};
use crate::viewmodels::guard::{guard_protected, GuardDecision, PendingLoad};

pub const STATS_LOAD_FAILED: &str = "Failed to load dashboard statistics";

/// Placeholder cards shown while loading; matches the four metrics
pub const PLACEHOLDER_CARDS: usize = 4;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum StatsLoad {
    #[default]
    Idle,
    Loading,
    Loaded(DashboardStats),
    Failed(String),
}

/// One metric card
#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: i64,
    pub caption: &'static str,
    pub icon: Icon,
    pub tone: &'static str,
}

impl StatCard {
    pub fn from_stats(stats: &DashboardStats) -> [StatCard; 4] {
        [
            StatCard {
                label: "Total Items",
                value: stats.total_items,
                caption: "Active inventory items",
                icon: Icon::Package,
                tone: "tone-emerald",
            },
            StatCard {
                label: "Low Stock Alert",
                value: stats.low_stock_items,
                caption: "Items need reordering",
                icon: Icon::AlertTriangle,
                tone: "tone-amber",
            },
            StatCard {
                label: "Goods Received",
                value: stats.recent_grns,
                caption: "Last 30 days",
                icon: Icon::TrendingUp,
                tone: "tone-blue",
            },
            StatCard {
                label: "Stock Issues",
                value: stats.recent_issues,
                caption: "Last 30 days",
                icon: Icon::TrendingDown,
                tone: "tone-purple",
            },
        ]
    }
}

/// Static "Quick Actions" entries: (title, description, target path)
pub const QUICK_ACTIONS: [(&str, &str, &str); 3] = [
    ("View Inventory", "Browse all items and stock levels", "/dashboard/inventory"),
    ("Receive Stock", "Create a new Goods Received Note", "/dashboard/receive"),
    ("Issue Items", "Issue stock to departments", "/dashboard/issue"),
];

#[derive(Clone, Default)]
pub struct DashboardViewModel {
    stats: Rc<RefCell<StatsLoad>>,
    user: Rc<RefCell<Option<User>>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats_load(&self) -> StatsLoad {
        self.stats.borrow().clone()
    }

    pub fn stat_cards(&self) -> Option<[StatCard; 4]> {
        match &*self.stats.borrow() {
            StatsLoad::Loaded(stats) => Some(StatCard::from_stats(stats)),
            _ => None,
        }
    }

    pub fn greeting(&self) -> Option<String> {
        self.user
            .borrow()
            .as_ref()
            .and_then(User::display_name)
            .map(|name| format!("Welcome back, {}", name))
    }

    pub fn reset(&self) {
        *self.stats.borrow_mut() = StatsLoad::Idle;
        *self.user.borrow_mut() = None;
    }

    /// Guard + enter `Loading`. Returns the fetch to run, or `None` after
    /// redirecting to login.
    pub fn begin(&self, state: &AppState) -> Option<PendingLoad> {
        let user = match guard_protected(&state.session) {
            GuardDecision::Redirect(target) => {
                self.reset();
                state.navigate(target);
                return None;
            }
            GuardDecision::Proceed { user } => user,
        };
        let token = state.session.token()?;

        *self.user.borrow_mut() = user;
        *self.stats.borrow_mut() = StatsLoad::Loading;
        Some(PendingLoad {
            token,
            mount: state.mounts.mount(),
        })
    }

    /// Apply the fetch result unless the view was unmounted meanwhile.
    /// Returns whether the result was applied.
    pub async fn load<T: HttpTransport>(
        &self,
        state: &AppState,
        api: &ApiClient<T>,
        token: &str,
        mount: MountToken,
    ) -> bool {
        let result = api.fetch_dashboard_stats(token).await;

        if !mount.is_current() {
            log::debug!("[DASHBOARD] View unmounted, dropping stats response");
            return false;
        }

        let next = match result {
            Ok(stats) => {
                log::info!("✅ [DASHBOARD] Stats loaded");
                StatsLoad::Loaded(stats)
            }
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error fetching dashboard stats: {}", e);
                StatsLoad::Failed(stats_error_message(&e))
            }
        };
        *self.stats.borrow_mut() = next;
        state.notify_change();
        true
    }
}

/// Inline text for a failed stats fetch
pub fn stats_error_message(error: &ApiError) -> String {
    match error.server_message() {
        Some(message) => format!("{}: {}", STATS_LOAD_FAILED, message),
        None if error.is_transport() => format!("{} (network error)", STATS_LOAD_FAILED),
        None => STATS_LOAD_FAILED.to_string(),
    }
}
