use thiserror::Error;

use backoffice_orders::ComposeError;

/// Failure of a client operation.
///
/// Messages are prefixed with the operation (`"Fetch products failed: ..."`)
/// so they can be shown to the user as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{operation} failed: unable to reach server")]
    Unreachable {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("{operation} failed: {message}")]
    Unauthorized {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} failed: unexpected response ({message})")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// The order failed local checks; nothing was sent.
    #[error("order not submitted: {0}")]
    Rejected(#[from] ComposeError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status for errors reported by the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Unreachable { .. } => true,
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
