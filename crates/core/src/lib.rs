//! `backoffice-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no network, no storage):
//! identifiers, the decimal `Money` value object and the error model used by
//! every form and by the order composition engine.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, FieldError, ValidationErrors};
pub use id::{CustomerId, OrderId, OrderItemId, ProductId, UserId};
pub use money::Money;
pub use value_object::ValueObject;
