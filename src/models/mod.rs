pub mod auth;
pub mod stats;
pub mod navigation;

pub use auth::{ErrorBody, LoginRequest, LoginResponse, User};
pub use stats::DashboardStats;
pub use navigation::{find_nav_item, Icon, NavItem, NAVIGATION};
