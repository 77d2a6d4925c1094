//! Agent discovery and capability types

use serde::{Deserialize, Serialize};

/// Agent Card for agent discovery
///
/// The Agent Card is published at `/.well-known/agent.json` and describes
/// the agent's identity, supported input/output modes, and skills.
///
/// Unset optional fields serialize as explicit `null`: discovery clients
/// in the wild expect the full field set to be present on the card, unlike
/// task envelopes where unset fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// Externally visible base URL of the agent
    pub url: String,

    /// Agent version
    pub version: String,

    /// MIME types accepted as input
    pub default_input_modes: Vec<String>,

    /// MIME types produced as output
    pub default_output_modes: Vec<String>,

    /// Declared capability set
    pub capabilities: AgentCapabilities,

    /// Skills this agent advertises
    pub skills: Vec<AgentSkill>,

    /// Organization providing the agent
    pub provider: Option<AgentProvider>,

    /// URL to agent documentation
    pub documentation_url: Option<String>,
}

/// Agent capabilities
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    /// Supports streaming responses
    pub streaming: Option<bool>,

    /// Supports push notifications via webhooks
    pub push_notifications: Option<bool>,

    /// Exposes task state transition history
    pub state_transition_history: Option<bool>,
}

impl AgentCapabilities {
    /// Create capabilities with no flags declared
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare push notification support
    pub fn with_push_notifications(mut self) -> Self {
        self.push_notifications = Some(true);
        self
    }

    /// Declare streaming support
    pub fn with_streaming(mut self) -> Self {
        self.streaming = Some(true);
        self
    }
}

/// A skill advertised on the agent card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    /// Stable skill identifier
    pub id: String,

    /// Human-readable skill name
    pub name: String,

    /// What the skill does
    pub description: String,

    /// Search tags
    pub tags: Vec<String>,

    /// Example invocations
    pub examples: Option<Vec<String>>,

    /// Input mode tags accepted by this skill
    pub input_modes: Option<Vec<String>>,

    /// Output mode tags produced by this skill
    pub output_modes: Option<Vec<String>>,
}

/// Agent provider information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentProvider {
    /// Organization name
    pub organization: String,

    /// Organization URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> AgentCard {
        AgentCard {
            name: "Test Agent".to_string(),
            description: "A test agent".to_string(),
            url: "http://localhost:5000".to_string(),
            version: "1.0.0".to_string(),
            default_input_modes: vec!["text/plain".to_string()],
            default_output_modes: vec!["text/plain".to_string()],
            capabilities: AgentCapabilities::new().with_push_notifications(),
            skills: vec![AgentSkill {
                id: "all-caps".to_string(),
                name: "Capitalize all letters".to_string(),
                description: "Capitalize all letters provided".to_string(),
                tags: vec!["capitalize".to_string()],
                examples: None,
                input_modes: Some(vec!["text".to_string()]),
                output_modes: Some(vec!["text".to_string()]),
            }],
            provider: Some(AgentProvider {
                organization: "Telex".to_string(),
                url: "https://telex.im".to_string(),
            }),
            documentation_url: Some("http://localhost:5000/docs".to_string()),
        }
    }

    #[test]
    fn test_card_field_naming() {
        let json = serde_json::to_value(sample_card()).unwrap();

        assert_eq!(json["name"], "Test Agent");
        assert_eq!(json["defaultInputModes"][0], "text/plain");
        assert_eq!(json["defaultOutputModes"][0], "text/plain");
        assert_eq!(json["documentationUrl"], "http://localhost:5000/docs");
        assert_eq!(json["capabilities"]["pushNotifications"], true);
        assert_eq!(json["provider"]["organization"], "Telex");
    }

    #[test]
    fn test_card_renders_unset_optionals_as_null() {
        let json = serde_json::to_value(sample_card()).unwrap();

        assert!(json["capabilities"]["streaming"].is_null());
        assert!(json["capabilities"]["stateTransitionHistory"].is_null());
        assert!(json["skills"][0]["examples"].is_null());
    }

    #[test]
    fn test_card_round_trip() {
        let card = sample_card();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: AgentCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
