//! Error taxonomy shared by every remote call.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Failure of one remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP error {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided explanation, or the status text.
        detail: String,
    },
    /// The server rejected the credentials.
    #[error("Not authorized")]
    Unauthorized,
    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Decode(String),
    /// A call that needs a token was attempted without one.
    #[error("No auth token available")]
    MissingToken,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: BTreeMap<String, Vec<String>>,
}

impl ApiError {
    /// Build the error for a non-success response from its status and raw body.
    ///
    /// Bodies of the form `{"errors": {"body": ["can't be empty"]}}` are folded
    /// into `"body can't be empty"`; anything else falls back to `fallback`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        if status == 401 || status == 403 {
            return Self::Unauthorized;
        }
        let detail = describe_error_body(body).unwrap_or_else(|| fallback.to_string());
        Self::Status {
            status,
            detail,
        }
    }
}

fn describe_error_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let parts: Vec<String> = parsed
        .errors
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| format!("{field} {message}"))
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

/// A timestamp that does not follow `yyyy-MM-ddTHH:mm:ss.SSSX`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp `{raw}`: {reason}")]
pub struct DateError {
    /// The offending input.
    pub raw: String,
    /// Parser explanation.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn folds_validation_errors_into_detail() {
        let body = r#"{"errors":{"body":["can't be empty"],"title":["is too long"]}}"#;
        let err = ApiError::from_response(422, body, "Unprocessable Entity");
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                detail: "body can't be empty; title is too long".to_string(),
            }
        );
    }

    #[test]
    fn falls_back_to_status_text_for_opaque_bodies() {
        let err = ApiError::from_response(500, "<html>oops</html>", "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP error 500: Internal Server Error");
    }

    #[test]
    fn maps_auth_statuses_to_unauthorized() {
        assert_eq!(ApiError::from_response(401, "", ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(403, "{}", ""), ApiError::Unauthorized);
    }
}
