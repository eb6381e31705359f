use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub const SUCCESS_CODE: u16 = 200;

/// JSON body every backend endpoint answers with.
///
/// The backend drops `data` when it is falsy, so a missing `data` and an
/// explicit `null` both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn new(code: u16, data: Option<T>) -> Self {
        Self {
            code,
            status: None,
            data,
            detail: None,
        }
    }

    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// `data`, but only when the envelope reports success.
    pub fn success_data(&self) -> Option<&T> {
        if self.is_success() {
            self.data.as_ref()
        } else {
            None
        }
    }
}

/// Decode a response body into an envelope.
///
/// The backend mirrors `code` into the HTTP status, so error statuses still
/// carry an envelope and are decoded like any other body. Only when the body
/// is not an envelope does the HTTP status decide the error kind.
pub fn parse_envelope<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
) -> Result<ApiEnvelope<T>, ClientError> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&http_status) => Err(ClientError::Http {
            status: http_status,
        }),
        Err(e) => Err(ClientError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_is_none() {
        let env: ApiEnvelope<bool> = parse_envelope(200, r#"{"code":200,"status":"ok"}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, None);
        assert_eq!(env.status.as_deref(), Some("ok"));
    }

    #[test]
    fn null_or_missing_data_with_untyped_payload() {
        let env: ApiEnvelope<serde_json::Value> =
            parse_envelope(200, r#"{"code":200,"data":null}"#).unwrap();
        assert_eq!(env.data, None);
        let env: ApiEnvelope<serde_json::Value> = parse_envelope(200, r#"{"code":200}"#).unwrap();
        assert_eq!(env.data, None);
    }

    #[test]
    fn error_status_with_envelope_body_decodes() {
        let env: ApiEnvelope<bool> =
            parse_envelope(500, r#"{"code":500,"status":"error","detail":"boom"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.detail.as_deref(), Some("boom"));
        assert_eq!(env.success_data(), None);
    }

    #[test]
    fn error_status_with_html_body_is_http_error() {
        let err = parse_envelope::<bool>(502, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err, ClientError::Http { status: 502 });
    }

    #[test]
    fn ok_status_with_garbage_is_decode_error() {
        let err = parse_envelope::<bool>(200, "not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn success_data_hidden_on_failure_code() {
        let env = ApiEnvelope::new(403, Some(true));
        assert_eq!(env.success_data(), None);
        let env = ApiEnvelope::new(200, Some(true));
        assert_eq!(env.success_data(), Some(&true));
    }
}
