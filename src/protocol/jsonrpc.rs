//! JSON-RPC 2.0 envelopes for the A2A protocol binding
//!
//! Inbound `message/send` requests arrive wrapped in JSON-RPC 2.0 request
//! envelopes; task results and errors are returned in the matching response
//! envelopes. Deserialization is lenient: abbreviated caller payloads may
//! omit `jsonrpc`, `id`, and `method`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{message::Message, task::Task};

/// JSON-RPC 2.0 protocol version tag
pub const JSONRPC_VERSION: &str = "2.0";

/// Invalid JSON was received by the server
pub const PARSE_ERROR: i64 = -32700;

/// The JSON sent is not a valid request object
pub const INVALID_REQUEST: i64 = -32600;

/// The method does not exist or is not available
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Invalid method parameters
pub const INVALID_PARAMS: i64 = -32602;

/// Internal JSON-RPC error
pub const INTERNAL_ERROR: i64 = -32603;

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// JSON-RPC request envelope carrying a `message/send` invocation
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    /// Protocol version tag
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,

    /// Caller-assigned request identifier
    #[serde(default)]
    pub id: Option<Value>,

    /// RPC method name (e.g. "message/send")
    #[serde(default)]
    pub method: Option<String>,

    /// Invocation parameters
    pub params: MessageSendParams,
}

/// Parameters of a `message/send` invocation
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSendParams {
    /// The message submitted to the agent
    pub message: Message,

    /// Optional caller-supplied metadata
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// JSON-RPC success response envelope wrapping a task result
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// Protocol version tag
    pub jsonrpc: String,

    /// Server-generated response identifier
    pub id: String,

    /// The completed task
    pub result: Task,
}

impl JsonRpcResponse {
    /// Wrap a task result under a fresh response identifier
    pub fn new(result: Task) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Uuid::now_v7().to_string(),
            result,
        }
    }
}

/// JSON-RPC error response envelope
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcErrorResponse {
    /// Protocol version tag
    pub jsonrpc: String,

    /// Identifier of the request that failed, null when it was never
    /// recovered from the payload
    pub id: Option<Value>,

    /// The error object
    pub error: JsonRpcError,
}

impl JsonRpcErrorResponse {
    /// Build an error response echoing the request id when known
    pub fn new(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error,
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    /// Error code
    pub code: i64,

    /// Short human-readable summary
    pub message: String,

    /// Additional structured diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Create an error object
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach structured diagnostics
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The request body was not valid JSON
    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, "Invalid JSON payload").with_data(Value::String(detail.into()))
    }

    /// The request body was valid JSON but not a valid request envelope
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, "Request payload validation error")
            .with_data(Value::String(detail.into()))
    }

    /// The invocation parameters were invalid
    pub fn invalid_params(data: Value) -> Self {
        Self::new(INVALID_PARAMS, "Invalid parameters").with_data(data)
    }
}
