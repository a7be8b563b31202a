//! One module per REST resource. Each adds methods to `ApiClient`.

pub mod analytics;
pub mod auth;
pub mod customers;
pub mod orders;
pub mod products;
pub mod reports;
pub mod users;
