//! Response envelope and loading state types

use serde::{Deserialize, Serialize};

use super::event::AppError;

/// Standard response envelope
///
/// The shape does not tie `success` to `data` or `message`; callers decide
/// how to read a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Response payload
    pub data: T,

    /// Human-readable message
    pub message: String,

    /// Optional numeric status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with an empty message
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, "")
    }

    /// Create a successful response with a message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            code: None,
        }
    }

    /// Create a failed response; the payload is still carried
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            message: message.into(),
            code: None,
        }
    }

    /// Attach a numeric status code
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Check if the response is a failure
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> T {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: f(self.data),
            message: self.message,
            code: self.code,
        }
    }
}

impl<T> ApiResponse<Option<T>> {
    /// Wrap an operation result: `Ok` becomes a success, `Err` a failure
    /// carrying the error message and no data
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::success(Some(data)),
            Err(err) => {
                tracing::debug!(code = %err.code, message = %err.message, "Wrapping failed result");
                Self::failure(None, err.message)
            }
        }
    }
}

/// Loading/error state of an asynchronous operation
///
/// `error` is nullable rather than optional and is always serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingState {
    pub loading: bool,
    pub error: Option<String>,
}

impl LoadingState {
    /// Not loading, no error
    pub fn idle() -> Self {
        Self::default()
    }

    /// Loading, no error
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    /// Settled with an error
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: Some(error.into()),
        }
    }

    /// Begin loading, clearing any previous error
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle successfully
    pub fn finish(&mut self) {
        self.loading = false;
        self.error = None;
    }

    /// Settle with an error
    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    /// Check if an error is recorded
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Check if loading has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}
