/// Icon shown next to a navigation entry or stat card (rendered as a CSS class)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    LayoutDashboard,
    Package,
    TrendingUp,
    TrendingDown,
    BarChart,
    Building,
    Truck,
    Users,
    AlertTriangle,
    LogOut,
    Menu,
    Close,
}

impl Icon {
    pub fn css_class(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "icon icon-layout-dashboard",
            Icon::Package => "icon icon-package",
            Icon::TrendingUp => "icon icon-trending-up",
            Icon::TrendingDown => "icon icon-trending-down",
            Icon::BarChart => "icon icon-bar-chart",
            Icon::Building => "icon icon-building",
            Icon::Truck => "icon icon-truck",
            Icon::Users => "icon icon-users",
            Icon::AlertTriangle => "icon icon-alert-triangle",
            Icon::LogOut => "icon icon-log-out",
            Icon::Menu => "icon icon-menu",
            Icon::Close => "icon icon-x",
        }
    }
}

/// Static sidebar entry
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

impl NavItem {
    /// Active only on an exact path match
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub static NAVIGATION: [NavItem; 8] = [
    NavItem { label: "Dashboard", path: "/dashboard", icon: Icon::LayoutDashboard },
    NavItem { label: "Inventory", path: "/dashboard/inventory", icon: Icon::Package },
    NavItem { label: "Receive Stock", path: "/dashboard/receive", icon: Icon::TrendingUp },
    NavItem { label: "Issue Stock", path: "/dashboard/issue", icon: Icon::TrendingDown },
    NavItem { label: "Reports", path: "/dashboard/reports", icon: Icon::BarChart },
    NavItem { label: "Departments", path: "/dashboard/departments", icon: Icon::Building },
    NavItem { label: "Suppliers", path: "/dashboard/suppliers", icon: Icon::Truck },
    NavItem { label: "Users", path: "/dashboard/users", icon: Icon::Users },
];

/// Entry whose path is exactly `path`
pub fn find_nav_item(path: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().find(|item| item.path == path)
}
