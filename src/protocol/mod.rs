//! Core A2A protocol types and definitions

use serde::{Deserialize, Serialize};

pub mod agent;
pub mod jsonrpc;
pub mod message;
pub mod task;

pub use agent::{AgentCapabilities, AgentCard, AgentProvider, AgentSkill};
pub use message::{Message, MessagePart, Role};
pub use task::{Task, TaskState, TaskStatus};

/// Artifacts represent task outputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// Unique identifier of the Artifact
    #[serde(rename = "artifactId")]
    pub artifact_id: String,

    /// A human readable name for the Artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A human readable description of the Artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Contents of the Artifact. Must contain at least one part
    pub parts: Vec<MessagePart>,
}

impl Artifact {
    /// Create a new artifact from its parts
    pub fn new(artifact_id: impl Into<String>, parts: Vec<MessagePart>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            name: None,
            description: None,
            parts,
        }
    }

    /// Set the artifact name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
