//! Orders module.
//!
//! Order records, the typed order form, and the order composition engine that
//! prices line selections against a catalog snapshot and assembles the
//! submission payload. Everything here is deterministic: no IO, no HTTP.

pub mod composition;
pub mod error;
pub mod form;
pub mod order;
pub mod submission;

pub use composition::{
    LineComputation, LineSelection, OrderComposer, OrderLine, compute_lines, compute_total,
    sanitize_quantity,
};
pub use error::{ComposeError, LineError};
pub use form::{DeliveryAddress, OrderForm};
pub use order::{Order, OrderAndItems, OrderItem, OrderStatus, PopulatedOrderItem};
pub use submission::{OrderSubmission, SubmissionLine, build_submission};
