pub mod guard;
pub mod login_viewmodel;
pub mod dashboard_viewmodel;
pub mod layout_viewmodel;

pub use guard::{
    enter_route, guard_protected, guard_public, may_render, GuardDecision, PendingLoad, RouteMounter,
};
pub use login_viewmodel::{LoginForm, LoginOutcome, LoginPhase, LoginViewModel};
pub use dashboard_viewmodel::{DashboardViewModel, StatCard, StatsLoad};
