//! Client configuration, read from the environment.

use std::time::Duration;

use crate::error::ClientError;

pub const API_URL_VAR: &str = "BACKOFFICE_API_URL";
pub const TIMEOUT_VAR: &str = "BACKOFFICE_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST service, without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            api_url: normalize_url(&api_url.into())?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load `BACKOFFICE_API_URL` and `BACKOFFICE_HTTP_TIMEOUT_SECS`, falling
    /// back to defaults when unset.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: normalize_url(&api_url)?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("{API_URL_VAR} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "{API_URL_VAR} must use http or https"
        )));
    }
    Ok(trimmed.to_string())
}
