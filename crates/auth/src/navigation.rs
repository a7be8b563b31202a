//! Sidebar navigation, filtered by role.

use crate::roles::Role;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        title: "Dashboard",
        route: Route::Dashboard,
    },
    NavItem {
        title: "Customers",
        route: Route::Customers,
    },
    NavItem {
        title: "Orders",
        route: Route::Orders,
    },
    NavItem {
        title: "Products",
        route: Route::Products,
    },
    NavItem {
        title: "Users",
        route: Route::Users,
    },
];

/// Navigation entries the role may open, in sidebar order.
pub fn navigation(role: Role) -> Vec<NavItem> {
    NAV_ITEMS
        .into_iter()
        .filter(|item| {
            item.route
                .required_permission()
                .is_none_or(|permission| role.grants(permission))
        })
        .collect()
}
