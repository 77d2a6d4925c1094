//! A2A task types and lifecycle states

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{message::Message, Artifact};

/// A task in the A2A protocol
///
/// Tasks represent units of work performed by agents. This agent constructs
/// each task within a single request handling cycle: the task is built
/// directly in the `completed` state and is never stored or looked up again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// Identifier grouping related tasks/messages
    #[serde(rename = "contextId")]
    pub context_id: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Outputs produced by the task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
}

impl Task {
    /// Create a new task
    pub fn new(id: impl Into<String>, context_id: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            context_id: context_id.into(),
            status,
            artifacts: Vec::new(),
        }
    }

    /// Attach an artifact to the task
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Check if the task is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.state.is_terminal()
    }
}

/// Status of a task: a lifecycle state plus an optional status message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// The current lifecycle state
    pub state: TaskState,

    /// Optional message associated with this status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// When this status was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TaskStatus {
    /// Create a status with the given state and no message
    pub fn new(state: TaskState) -> Self {
        Self {
            state,
            message: None,
            timestamp: Some(Utc::now()),
        }
    }

    /// Create a completed status carrying a status message
    pub fn completed(message: Message) -> Self {
        Self {
            state: TaskState::Completed,
            message: Some(message),
            timestamp: Some(Utc::now()),
        }
    }
}

/// Task lifecycle state
///
/// Task lifecycle: submitted → working → completed/failed/canceled/rejected.
/// Non-terminal holding states: input-required, auth-required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task has been received and is queued for processing
    Submitted,

    /// Task is currently being processed
    Working,

    /// Task requires additional input from the client
    InputRequired,

    /// Task requires authentication or authorization
    AuthRequired,

    /// Task completed successfully
    Completed,

    /// Task failed with an error
    Failed,

    /// Task was canceled by the client
    Canceled,

    /// Task was rejected by the agent
    Rejected,
}

impl TaskState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Failed | TaskState::Canceled | TaskState::Rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::MessagePart;

    use super::*;

    #[test]
    fn test_completed_task_construction() {
        let status = TaskStatus::completed(Message::agent("Success!"));
        let task = Task::new("task-123", "ctx-456", status)
            .with_artifact(Artifact::new("artifact-1", vec![MessagePart::text("HI")]));

        assert_eq!(task.id, "task-123");
        assert_eq!(task.context_id, "ctx-456");
        assert_eq!(task.status.state, TaskState::Completed);
        assert!(task.is_terminal());
        assert_eq!(task.artifacts.len(), 1);
    }

    #[test]
    fn test_task_state_terminality() {
        assert!(TaskState::Completed.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(TaskState::Canceled.is_terminal());
        assert!(!TaskState::Working.is_terminal());
        assert!(!TaskState::InputRequired.is_terminal());
    }

    #[test]
    fn test_task_serialization() {
        let status = TaskStatus::completed(Message::agent("Success!"));
        let task = Task::new("task-123", "ctx-456", status)
            .with_artifact(Artifact::new("artifact-1", vec![MessagePart::text("HI")]));

        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], "task-123");
        assert_eq!(json["contextId"], "ctx-456");
        assert_eq!(json["status"]["state"], "completed");
        assert_eq!(json["status"]["message"]["parts"][0]["text"], "Success!");
        assert!(json["status"]["timestamp"].is_string());
        assert_eq!(json["artifacts"][0]["artifactId"], "artifact-1");

        // camelCase only, no snake_case leakage
        assert!(json.get("context_id").is_none());
    }

    #[test]
    fn test_task_state_kebab_case() {
        assert_eq!(
            serde_json::to_value(TaskState::InputRequired).unwrap(),
            "input-required"
        );
        assert_eq!(
            serde_json::to_value(TaskState::AuthRequired).unwrap(),
            "auth-required"
        );
        assert_eq!(serde_json::to_value(TaskState::Completed).unwrap(), "completed");
        assert_eq!(serde_json::to_value(TaskState::Canceled).unwrap(), "canceled");
    }

    #[test]
    fn test_status_without_message_omits_field() {
        let status = TaskStatus {
            state: TaskState::Working,
            message: None,
            timestamp: None,
        };
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["state"], "working");
        assert!(json.get("message").is_none());
        assert!(json.get("timestamp").is_none());
    }
}
