//! Customers module: customer records and the customer form.

pub mod customer;

pub use customer::{Customer, CustomerAddress, CustomerForm, NewCustomer};
