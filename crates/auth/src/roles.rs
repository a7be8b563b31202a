use serde::{Deserialize, Serialize};

use crate::permissions::Permission;

/// Role of a back-office user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Manager,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
        }
    }

    /// Permissions granted to this role.
    pub fn permissions(&self) -> &'static [Permission] {
        const MANAGER: &[Permission] = &[
            Permission::ViewDashboard,
            Permission::ManageCustomers,
            Permission::ManageOrders,
            Permission::ManageProducts,
        ];
        const ADMIN: &[Permission] = &[
            Permission::ViewDashboard,
            Permission::ManageCustomers,
            Permission::ManageOrders,
            Permission::ManageProducts,
            Permission::ManageUsers,
        ];

        match self {
            Role::Admin => ADMIN,
            Role::Manager => MANAGER,
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
