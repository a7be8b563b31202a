//! Products module.
//!
//! Product records as the REST service returns them, product form validation,
//! and the read-only `Catalog` snapshot the order composition engine prices
//! against.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{NewProduct, Product, ProductCategory, ProductForm};
