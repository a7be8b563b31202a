//! Response envelope used by the REST service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful responses wrap their payload in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull a human-readable message out of an error body.
///
/// The service reports errors as `{"error": {"message": ...}}` on most routes
/// and as `{"message": ...}` on a few; anything else yields `None`.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_data_payload() {
        let body = r#"{"success": true, "data": [1, 2, 3]}"#;
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data, vec![1, 2, 3]);
        assert_eq!(parsed.success, Some(true));
    }

    #[test]
    fn reads_both_error_shapes() {
        assert_eq!(
            error_message(r#"{"error": {"message": "Product not found"}}"#).as_deref(),
            Some("Product not found")
        );
        assert_eq!(
            error_message(r#"{"message": "Order not found"}"#).as_deref(),
            Some("Order not found")
        );
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"message": ""}"#), None);
    }
}
