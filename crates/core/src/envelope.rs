//! Uniform response envelope.
//!
//! Every endpoint wraps its payload in an [`Envelope`] instead of returning
//! ad-hoc JSON, so all responses share the same
//! `{status, message, data, timestamp}` shape.

use serde::Serialize;

use crate::types::Timestamp;

/// Closed set of envelope status tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Standard response envelope.
///
/// `data` is opaque to this layer: it is stored exactly as given and never
/// inspected or mutated. `timestamp` is captured at construction time and
/// serializes as RFC 3339, so envelope timestamps sort correctly as text.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    pub data: T,
    pub timestamp: Timestamp,
}

impl<T> Envelope<T> {
    /// Wrap `data` with an explicit status tag and message.
    pub fn new(data: T, status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Successful envelope with an empty message.
    pub fn success(data: T) -> Self {
        Self::new(data, Status::Success, "")
    }

    /// Successful envelope with a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self::new(data, Status::Success, message)
    }

    /// Error envelope with a message.
    pub fn error(data: T, message: impl Into<String>) -> Self {
        Self::new(data, Status::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_defaults_to_empty_message() {
        let envelope = Envelope::success(7);
        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.data, 7);
    }

    #[test]
    fn data_passes_through_unmodified() {
        let payload = json!([{"id": 1, "name": "foo"}, {"id": 2, "name": "bar"}]);
        let envelope = Envelope::success(payload.clone());
        assert_eq!(envelope.data, payload);

        let empty = Envelope::success(serde_json::Value::Null);
        assert_eq!(empty.data, serde_json::Value::Null);
    }

    #[test]
    fn timestamps_are_non_decreasing_across_calls() {
        let first = Envelope::success(());
        let second = Envelope::success(());
        assert!(first.timestamp <= second.timestamp);
    }

    #[test]
    fn serializes_to_the_standard_shape() {
        let envelope = Envelope::with_message(json!([{"id": 1, "name": "foo"}]), "item created");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "item created");
        assert_eq!(value["data"], json!([{"id": 1, "name": "foo"}]));

        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(!timestamp.is_empty());
        chrono::DateTime::parse_from_rfc3339(timestamp).expect("timestamp must be RFC 3339");
    }

    #[test]
    fn error_envelope_carries_the_error_tag() {
        let envelope = Envelope::error((), "boom");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "boom");
    }
}
