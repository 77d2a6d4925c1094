//! Text transformation skills and task assembly

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::protocol::{AgentSkill, Artifact, Message, MessagePart, Task, TaskStatus};

/// A text-in, text-out skill
///
/// The transform is async so a skill may reach out to the network or a
/// database; the built-in skill completes without suspending.
#[async_trait]
pub trait TextSkill: Send + Sync {
    /// Stable skill identifier, as advertised on the agent card
    fn id(&self) -> &'static str;

    /// The skill block advertised on the agent card
    fn descriptor(&self) -> AgentSkill;

    /// Transform the input text
    async fn apply(&self, input: &str) -> String;
}

/// Uppercases every character of the input
///
/// The fold is Unicode-aware and locale-independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCaps;

#[async_trait]
impl TextSkill for AllCaps {
    fn id(&self) -> &'static str {
        "all-caps"
    }

    fn descriptor(&self) -> AgentSkill {
        AgentSkill {
            id: self.id().to_string(),
            name: "Capitalize all letters".to_string(),
            description: "Capitalize all letters provided".to_string(),
            tags: vec!["capitalize".to_string()],
            examples: None,
            input_modes: Some(vec!["text".to_string()]),
            output_modes: Some(vec!["text".to_string()]),
        }
    }

    async fn apply(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

/// Run `skill` over `text` and assemble the completed task envelope
///
/// The transformed text travels in the task's sole artifact; the status
/// message is the fixed "Success!" acknowledgement existing callers key on.
pub async fn handle_task(
    skill: &dyn TextSkill,
    text: &str,
    task_id: String,
    context_id: String,
) -> Task {
    let transformed = skill.apply(text).await;
    debug!(skill = skill.id(), %transformed, "text transformed");

    let output = MessagePart::text(transformed);
    let artifact = Artifact::new(Uuid::now_v7().to_string(), vec![output]);

    let status_message =
        Message::agent("Success!").with_message_id(Uuid::now_v7().to_string());

    let task = Task::new(task_id, context_id, TaskStatus::completed(status_message))
        .with_artifact(artifact);

    debug!(task_id = %task.id, completed_at = %Utc::now(), "task end");
    task
}
