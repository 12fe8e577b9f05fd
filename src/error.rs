// ============================================================================
// ERRORS - gateway failures and the messages the views show for them
// ============================================================================

use serde_json::Value;

use crate::models::ProposalField;

/// Failure of a REST call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Backend unreachable (connection refused, DNS, CORS, timeout)
    #[error("Network Error: {0}")]
    Network(String),

    #[error("Request failed with status code {status}")]
    Client { status: u16, body: Option<String> },

    #[error("Request failed with status code {status}")]
    Server { status: u16, body: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let body = body.filter(|b| !b.trim().is_empty());
        if status >= 500 {
            ApiError::Server { status, body }
        } else {
            ApiError::Client { status, body }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    fn body(&self) -> Option<&str> {
        match self {
            ApiError::Client { body, .. } | ApiError::Server { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Message carried by the response body: a plain/JSON string body wins,
    /// then the `message` field of a JSON object.
    pub fn response_message(&self) -> Option<String> {
        let body = self.body()?;
        let message = match serde_json::from_str::<Value>(body) {
            Ok(Value::String(text)) => Some(text),
            Ok(Value::Object(map)) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
            Ok(_) => None,
            Err(_) => Some(body.to_owned()),
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

/// Required field left empty; raised before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField(ProposalField),
}

/// Login / register failure with the text to show on the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn from_api(err: &ApiError, fallback: &str) -> Self {
        let message = err
            .response_message()
            .or_else(|| Some(err.to_string()).filter(|m| !m.is_empty()))
            .unwrap_or_else(|| fallback.to_string());
        Self { message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("Could not write '{0}' to localStorage")]
    Write(String),

    #[error("Could not remove '{0}' from localStorage")]
    Remove(String),
}

/// Failure of the submit form
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self, backend_port: u16) -> String {
        match self {
            SubmitError::Validation(err) => err.to_string(),
            SubmitError::Api(err) => submit_failure_message(err, backend_port),
        }
    }
}

pub const LOAD_FAILED: &str = "Failed to load proposals. Please try again later.";
pub const UPDATE_FAILED: &str = "Failed to update proposal";
pub const REVIEW_FAILED: &str = "Failed to save review";
pub const TRASH_LOAD_FAILED: &str = "Failed to load deleted proposals.";
pub const RESTORE_FAILED: &str = "Failed to restore proposal";

pub fn network_message(backend_port: u16) -> String {
    format!(
        "Cannot connect to server. Please ensure the backend is running on port {}.",
        backend_port
    )
}

pub fn submit_failure_message(err: &ApiError, backend_port: u16) -> String {
    match err {
        ApiError::Network(_) => network_message(backend_port),
        ApiError::Client { status: 400, .. } => {
            "Invalid data. Please check your input and try again.".to_string()
        }
        ApiError::Server { .. } => "Server error. Please try again later.".to_string(),
        other => format!(
            "Failed to submit proposal: {}",
            other.response_message().unwrap_or_else(|| other.to_string())
        ),
    }
}

pub fn delete_failure_message(err: &ApiError) -> String {
    if err.is_not_found() {
        "Proposal not found".to_string()
    } else {
        "Failed to delete proposal".to_string()
    }
}
