use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the remote client.
///
/// Never returned as `Err`; the client folds them into
/// [`ApiResult::Failure`] using the `Display` text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("API Error: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Uniform outcome of every remote operation.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(String),
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(data) => ApiResult::Success(f(data)),
            ApiResult::Failure(message) => ApiResult::Failure(message),
        }
    }

    /// Keeps the data, or falls back when the request failed.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            ApiResult::Success(data) => data,
            ApiResult::Failure(_) => fallback,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T> From<Result<T, ApiError>> for ApiResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => ApiResult::Success(data),
            Err(err) => ApiResult::Failure(err.to_string()),
        }
    }
}

impl<T> From<ApiResult<T>> for Result<T, String> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(message) => Err(message),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let envelope = match self {
            ApiResult::Success(data) => Envelope {
                success: true,
                data: Some(data),
                error: None,
            },
            ApiResult::Failure(message) => Envelope {
                success: false,
                data: None,
                error: Some(message.clone()),
            },
        };
        envelope.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResult<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let envelope = Envelope::<T>::deserialize(deserializer)?;
        match (envelope.success, envelope.data) {
            (true, Some(data)) => Ok(ApiResult::Success(data)),
            (true, None) => Err(serde::de::Error::missing_field("data")),
            (false, _) => Ok(ApiResult::Failure(
                envelope.error.unwrap_or_default(),
            )),
        }
    }
}
