//! Request handling errors and their JSON-RPC renderings

use serde_json::Value;
use thiserror::Error;

use crate::{protocol::jsonrpc::JsonRpcError, schema::ValidationError};

/// A failure while handling a `message/send` request
///
/// Every variant renders as a structured JSON-RPC error envelope; nothing
/// propagates to the caller as a bare transport-level fault.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// The request body was not valid JSON
    #[error("request body is not valid JSON: {0}")]
    Parse(String),

    /// The body was valid JSON but not a valid request envelope
    #[error("malformed request envelope: {0}")]
    InvalidEnvelope(String),

    /// The message carried no structured-data part
    #[error("message contains no data part")]
    MissingPayload,

    /// The data part did not validate as a task configuration
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RequestError {
    /// Render as a JSON-RPC error object
    pub fn to_error_object(&self) -> JsonRpcError {
        match self {
            RequestError::Parse(detail) => JsonRpcError::parse_error(detail.clone()),
            RequestError::InvalidEnvelope(detail) => JsonRpcError::invalid_request(detail.clone()),
            RequestError::MissingPayload => {
                JsonRpcError::invalid_params(Value::String(self.to_string()))
            }
            RequestError::Validation(err) => JsonRpcError::invalid_params(err.to_data()),
        }
    }
}
