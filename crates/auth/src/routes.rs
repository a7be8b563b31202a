//! Route table of the back-office front end.

use core::str::FromStr;

use backoffice_core::{CustomerId, OrderId, ProductId, UserId};

use crate::permissions::Permission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Customers,
    NewCustomer,
    EditCustomer(CustomerId),
    Customer(CustomerId),
    NewOrder(CustomerId),
    OrderDetails {
        customer_id: CustomerId,
        order_id: OrderId,
    },
    EditOrder {
        customer_id: CustomerId,
        order_id: OrderId,
    },
    Orders,
    Products,
    NewProduct,
    EditProduct(ProductId),
    Users,
    NewUser,
    EditUser(UserId),
    NotFound,
}

impl Route {
    /// Resolve a location path. Query strings and fragments are ignored;
    /// unknown paths and malformed ids resolve to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        fn id<T: FromStr>(raw: &str) -> Option<T> {
            raw.parse().ok()
        }

        let route = match segments.as_slice() {
            ["login"] => Some(Route::Login),
            [] => Some(Route::Dashboard),
            ["customers"] => Some(Route::Customers),
            ["customers", "new"] => Some(Route::NewCustomer),
            ["customers", "edit", c] => id(c).map(Route::EditCustomer),
            ["customers", c] => id(c).map(Route::Customer),
            ["customers", c, "orders", "new"] => id(c).map(Route::NewOrder),
            ["customers", c, "orders", o] => id(c).zip(id(o)).map(|(customer_id, order_id)| {
                Route::OrderDetails {
                    customer_id,
                    order_id,
                }
            }),
            ["customers", c, "orders", o, "edit"] => {
                id(c).zip(id(o)).map(|(customer_id, order_id)| Route::EditOrder {
                    customer_id,
                    order_id,
                })
            }
            ["orders"] => Some(Route::Orders),
            ["products"] => Some(Route::Products),
            ["products", "new"] => Some(Route::NewProduct),
            ["products", "edit", p] => id(p).map(Route::EditProduct),
            ["users"] => Some(Route::Users),
            ["users", "new"] => Some(Route::NewUser),
            ["users", "edit", u] => id(u).map(Route::EditUser),
            _ => None,
        };

        route.unwrap_or(Route::NotFound)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::Customers => "/customers".to_string(),
            Route::NewCustomer => "/customers/new".to_string(),
            Route::EditCustomer(id) => format!("/customers/edit/{id}"),
            Route::Customer(id) => format!("/customers/{id}"),
            Route::NewOrder(id) => format!("/customers/{id}/orders/new"),
            Route::OrderDetails {
                customer_id,
                order_id,
            } => format!("/customers/{customer_id}/orders/{order_id}"),
            Route::EditOrder {
                customer_id,
                order_id,
            } => format!("/customers/{customer_id}/orders/{order_id}/edit"),
            Route::Orders => "/orders".to_string(),
            Route::Products => "/products".to_string(),
            Route::NewProduct => "/products/new".to_string(),
            Route::EditProduct(id) => format!("/products/edit/{id}"),
            Route::Users => "/users".to_string(),
            Route::NewUser => "/users/new".to_string(),
            Route::EditUser(id) => format!("/users/edit/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Permission needed to open the route; `None` for public routes.
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            Route::Login | Route::NotFound => None,
            Route::Dashboard => Some(Permission::ViewDashboard),
            Route::Customers
            | Route::NewCustomer
            | Route::EditCustomer(_)
            | Route::Customer(_) => Some(Permission::ManageCustomers),
            Route::NewOrder(_)
            | Route::OrderDetails { .. }
            | Route::EditOrder { .. }
            | Route::Orders => Some(Permission::ManageOrders),
            Route::Products | Route::NewProduct | Route::EditProduct(_) => {
                Some(Permission::ManageProducts)
            }
            Route::Users | Route::NewUser | Route::EditUser(_) => Some(Permission::ManageUsers),
        }
    }

    pub fn is_public(&self) -> bool {
        self.required_permission().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: &str = "0191d3f6-8c2a-7c3e-9a55-6f1f4f2b9a10";
    const ORDER: &str = "0191d3f6-8c2a-7c3e-9a55-6f1f4f2b9a11";

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/customers/"), Route::Customers);
        assert_eq!(Route::parse("/customers/new"), Route::NewCustomer);
        assert_eq!(Route::parse("/orders?page=2"), Route::Orders);
        assert_eq!(Route::parse("/users/new#top"), Route::NewUser);
    }

    #[test]
    fn parses_parameterized_routes() {
        let customer_id: CustomerId = CUSTOMER.parse().unwrap();
        let order_id: OrderId = ORDER.parse().unwrap();

        assert_eq!(
            Route::parse(&format!("/customers/{CUSTOMER}")),
            Route::Customer(customer_id)
        );
        assert_eq!(
            Route::parse(&format!("/customers/edit/{CUSTOMER}")),
            Route::EditCustomer(customer_id)
        );
        assert_eq!(
            Route::parse(&format!("/customers/{CUSTOMER}/orders/{ORDER}/edit")),
            Route::EditOrder {
                customer_id,
                order_id
            }
        );
    }

    #[test]
    fn malformed_ids_and_unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/customers/not-an-id"), Route::NotFound);
        assert_eq!(Route::parse("/reports"), Route::NotFound);
        assert_eq!(Route::parse("/products/edit/"), Route::NotFound);
    }

    #[test]
    fn path_round_trips_through_parse() {
        let customer_id = CustomerId::new();
        let order_id = OrderId::new();
        let routes = [
            Route::Login,
            Route::Dashboard,
            Route::NewOrder(customer_id),
            Route::OrderDetails {
                customer_id,
                order_id,
            },
            Route::EditProduct(ProductId::new()),
            Route::EditUser(UserId::new()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn only_login_and_not_found_are_public() {
        assert!(Route::Login.is_public());
        assert!(Route::NotFound.is_public());
        assert!(!Route::Dashboard.is_public());
        assert_eq!(Route::NewUser.required_permission(), Some(Permission::ManageUsers));
    }
}
