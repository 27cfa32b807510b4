/// localStorage key holding the raw session token
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// localStorage key holding the JSON user record
pub const USER_KEY: &str = "user";

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const DASHBOARD_STATS_ENDPOINT: &str = "/api/reports/dashboard-stats";

/// Id of the mount point in index.html
pub const ROOT_ELEMENT_ID: &str = "app";

pub const APP_TITLE: &str = "Kechei Store System";
