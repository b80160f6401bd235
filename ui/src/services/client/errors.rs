use thiserror::Error;

/// Shown for every failure that does not carry a server-provided message
pub const FALLBACK_ERROR_MESSAGE: &str = "通信エラーが発生しました。時間を置いて試してください。";

/// Users API client errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The server answered with an error status and a displayable message
    #[error("{message}")]
    ServerRejection { status: u16, message: String },

    /// No response was received
    #[error("Network error: {message}")]
    Network { message: String },

    /// Error status whose body is not `{ "error": { "message": ... } }`
    #[error("Invalid error response (status {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },
}

impl ClientError {
    /// Message the form displays for this error
    pub fn display_message(&self) -> String {
        match self {
            ClientError::ServerRejection { message, .. } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ServerRejection { status, .. }
            | ClientError::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
