use thiserror::Error;

/// Errors returned by record store implementations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Credentials were rejected (HTTP 401/403)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The store refused the request (HTTP 400)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Any other non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// JSON parsing or serialization error
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}

impl StoreError {
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    pub fn operation_failed<S: Into<String>>(message: S) -> Self {
        Self::OperationFailed(message.into())
    }
}
