use serde::{Deserialize, Serialize};

/// Aggregate counters from `GET /api/reports/dashboard-stats`.
/// Values are trusted as sent; nothing is recomputed client-side.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardStats {
    #[serde(rename = "totalItems")]
    pub total_items: i64,
    #[serde(rename = "lowStockItems")]
    pub low_stock_items: i64,
    #[serde(rename = "recentGRNs")]
    pub recent_grns: i64,
    #[serde(rename = "recentIssues")]
    pub recent_issues: i64,
}
