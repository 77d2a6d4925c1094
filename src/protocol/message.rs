//! A2A message types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message in the A2A protocol
///
/// Messages are the primary unit of communication between agents.
/// Each message has a role (user or agent) and one or more parts
/// (text or structured data).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    ///
    /// Abbreviated caller payloads may omit the role; it defaults to `user`.
    #[serde(default)]
    pub role: Role,

    /// Message content parts (at least one required)
    pub parts: Vec<MessagePart>,

    /// Optional message identifier
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Optional task identifier (for associating message with a task)
    #[serde(rename = "taskId", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Optional context identifier (for multi-turn conversations)
    #[serde(rename = "contextId", skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Optional metadata for the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

impl Message {
    /// Create a new message with text content
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![MessagePart::Text { text: text.into() }],
            message_id: None,
            task_id: None,
            context_id: None,
            metadata: None,
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Set the message ID
    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Add a message part
    pub fn with_part(mut self, part: MessagePart) -> Self {
        self.parts.push(part);
        self
    }

    /// Find the first structured-data part, if any
    pub fn first_data_part(&self) -> Option<&Value> {
        self.parts.iter().find_map(|part| match part {
            MessagePart::Data { data } => Some(data),
            _ => None,
        })
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an AI agent
    Agent,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// A part of a message or artifact
///
/// A part carries exactly one of: text, structured data. Inbound parts may
/// carry an extra discriminator field (`kind` or `type`); it is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MessagePart {
    /// Text content
    Text {
        /// The text content
        text: String,
    },

    /// Structured data
    Data {
        /// The structured data
        data: Value,
    },
}

impl MessagePart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a data part
    pub fn data(data: Value) -> Self {
        Self::Data { data }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello, agent!");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.parts.len(), 1);

        match &msg.parts[0] {
            MessagePart::Text { text } => assert_eq!(text, "Hello, agent!"),
            _ => panic!("Expected text part"),
        }
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::agent("Success!").with_message_id("msg-123");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "agent");
        assert_eq!(json["messageId"], "msg-123");
        assert_eq!(json["parts"][0]["text"], "Success!");

        // Unset optionals are omitted
        assert!(json.get("taskId").is_none());
        assert!(json.get("contextId").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_message_role_defaults_to_user() {
        let msg: Message = serde_json::from_value(json!({
            "parts": [{"text": "hello"}]
        }))
        .unwrap();

        assert_eq!(msg.role, Role::User);
    }

    #[test]
    fn test_part_deserialization_tolerates_discriminator() {
        let part: MessagePart = serde_json::from_value(json!({
            "kind": "text",
            "text": "hello"
        }))
        .unwrap();
        assert_eq!(part, MessagePart::text("hello"));

        let part: MessagePart = serde_json::from_value(json!({
            "type": "data",
            "data": {"key": "value"}
        }))
        .unwrap();
        assert_eq!(part, MessagePart::data(json!({"key": "value"})));
    }

    #[test]
    fn test_first_data_part() {
        let msg = Message::user("ignored").with_part(MessagePart::data(json!({"k": 1})));
        assert_eq!(msg.first_data_part(), Some(&json!({"k": 1})));

        let msg = Message::user("text only");
        assert!(msg.first_data_part().is_none());
    }

    #[test]
    fn test_round_trip_serialization() {
        let original = Message::agent("Hello")
            .with_part(MessagePart::data(json!({"key": "value"})))
            .with_message_id("msg-123");

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();

        assert_eq!(original, deserialized);
    }
}
