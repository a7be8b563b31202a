use serde::{Deserialize, Serialize};

/// Capability checked before showing a screen or an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ManageCustomers,
    ManageOrders,
    ManageProducts,
    ManageUsers,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "dashboard.view",
            Permission::ManageCustomers => "customers.manage",
            Permission::ManageOrders => "orders.manage",
            Permission::ManageProducts => "products.manage",
            Permission::ManageUsers => "users.manage",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
