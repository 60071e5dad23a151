//! Uniform result returned by every client operation

use crate::error::Error;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Message used when an error carries no description of its own
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Outcome of one remote call
///
/// Every failure mode (transport, non-2xx status, undecodable body) collapses
/// into `Failure`, so callers branch on the variant instead of handling errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The call succeeded and the body decoded as `T`
    Success { data: T },
    /// The call failed; `message` describes why
    Failure { message: String },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Success { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            ApiResponse::Failure {
                message: UNKNOWN_ERROR.to_string(),
            }
        } else {
            ApiResponse::Failure { message }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Payload of a successful call
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Message of a failed call
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure { message } => Some(message),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResponse::Success { data } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            ApiResponse::Success { data } => Ok(data),
            ApiResponse::Failure { message } => Err(message),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success { data } => ApiResponse::Success { data: f(data) },
            ApiResponse::Failure { message } => ApiResponse::Failure { message },
        }
    }
}

impl<T> From<std::result::Result<T, Error>> for ApiResponse<T> {
    fn from(result: std::result::Result<T, Error>) -> Self {
        match result {
            Ok(data) => ApiResponse::success(data),
            Err(e) => ApiResponse::failure(e.to_string()),
        }
    }
}

/// Renders as `{"success":true,"data":...}` or `{"success":false,"error":"..."}`
impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            ApiResponse::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ApiResponse::Failure { message } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let ok: ApiResponse<u32> = ApiResponse::success(7);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&7));
        assert_eq!(ok.error(), None);

        let failed: ApiResponse<u32> = ApiResponse::failure("HTTP 404: Not Found");
        assert!(failed.is_failure());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error(), Some("HTTP 404: Not Found"));
        assert_eq!(failed.into_result(), Err("HTTP 404: Not Found".to_string()));
    }

    #[test]
    fn test_empty_message_falls_back() {
        let failed: ApiResponse<()> = ApiResponse::failure("");
        assert_eq!(failed.error(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn test_from_error() {
        let response: ApiResponse<()> = Err(Error::Api {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        })
        .into();
        assert_eq!(response.error(), Some("HTTP 500: Internal Server Error"));
    }

    #[test]
    fn test_map_keeps_failure() {
        let failed: ApiResponse<Vec<u8>> = ApiResponse::failure("boom");
        assert_eq!(failed.map(|v| v.len()), ApiResponse::failure("boom"));

        let ok = ApiResponse::success(vec![1u8, 2, 3]).map(|v| v.len());
        assert_eq!(ok.into_data(), Some(3));
    }

    #[test]
    fn test_serialize_shape() {
        let ok = ApiResponse::success(json!([{ "id": "e1" }]));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "success": true, "data": [{ "id": "e1" }] })
        );

        let failed: ApiResponse<serde_json::Value> = ApiResponse::failure("HTTP 401: Unauthorized");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "success": false, "error": "HTTP 401: Unauthorized" })
        );
    }
}
