//! `backoffice-client`
//!
//! **Responsibility:** talk to the back-office REST service.
//!
//! This crate provides:
//! - Configuration from the environment
//! - A typed `ApiClient` with one method per REST operation
//! - The catalog provider and submission sink the order composer relies on
//!
//! Every authenticated call takes the caller's `Session` explicitly.

pub mod client;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod response;
pub mod services;

pub use client::ApiClient;
pub use collaborators::{CatalogProvider, SubmissionSink, SubmissionTarget, submit_order};
pub use config::ClientConfig;
pub use error::ClientError;
pub use response::ApiResponse;
pub use services::analytics::{CategoryDistribution, DashboardData, LocationData, OrderByDay};
