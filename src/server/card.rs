//! Capability descriptor construction
//!
//! The card is a pure function of the request's externally observed base
//! URL; everything else on it is a fixed constant. It is rebuilt on every
//! discovery request, which keeps the handler stateless.

use axum::http::HeaderMap;

use crate::{
    protocol::{AgentCapabilities, AgentCard, AgentProvider},
    skill::TextSkill,
};

/// Name advertised on the agent card
pub const AGENT_NAME: &str = "Capitalizer";

/// Version advertised on the agent card
pub const AGENT_VERSION: &str = "1.0.1";

/// Header naming an externally supplied base path prefix
const EXTERNAL_BASE_HEADER: &str = "x-external-base-url";

/// Header naming the external scheme when behind a proxy
const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Compute the externally visible base URL for the current request
///
/// The result is the request's own base URL with any trailing slash
/// stripped, suffixed with the prefix delivered in `x-external-base-url`
/// (absent means no prefix).
pub fn external_base_url(host: &str, headers: &HeaderMap) -> String {
    let scheme = headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    let prefix = headers
        .get(EXTERNAL_BASE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let base = format!("{scheme}://{host}");
    format!("{}{prefix}", base.trim_end_matches('/'))
}

/// Build the capability descriptor advertised at the discovery endpoint
pub fn descriptor(base_url: &str, skill: &dyn TextSkill) -> AgentCard {
    AgentCard {
        name: AGENT_NAME.to_string(),
        description: "Capitalizes stuff".to_string(),
        url: base_url.to_string(),
        version: AGENT_VERSION.to_string(),
        default_input_modes: vec!["text/plain".to_string()],
        default_output_modes: vec!["text/plain".to_string()],
        capabilities: AgentCapabilities::new().with_push_notifications(),
        skills: vec![skill.descriptor()],
        provider: Some(AgentProvider {
            organization: "Telex".to_string(),
            url: "https://telex.im".to_string(),
        }),
        documentation_url: Some(format!("{base_url}/docs")),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use crate::skill::AllCaps;

    use super::*;

    #[test]
    fn test_base_url_without_prefix() {
        let headers = HeaderMap::new();
        assert_eq!(
            external_base_url("host:5000", &headers),
            "http://host:5000"
        );
    }

    #[test]
    fn test_base_url_with_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(EXTERNAL_BASE_HEADER, HeaderValue::from_static("/my-prefix"));

        assert_eq!(
            external_base_url("host:5000", &headers),
            "http://host:5000/my-prefix"
        );
    }

    #[test]
    fn test_base_url_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_PROTO_HEADER, HeaderValue::from_static("https"));

        assert_eq!(
            external_base_url("agent.example.com", &headers),
            "https://agent.example.com"
        );
    }

    #[test]
    fn test_descriptor_is_derived_from_base_url() {
        let card = descriptor("http://host:5000/my-prefix", &AllCaps);

        assert_eq!(card.name, AGENT_NAME);
        assert_eq!(card.version, AGENT_VERSION);
        assert_eq!(card.url, "http://host:5000/my-prefix");
        assert_eq!(
            card.documentation_url.as_deref(),
            Some("http://host:5000/my-prefix/docs")
        );
        assert_eq!(card.capabilities.push_notifications, Some(true));
        assert_eq!(card.skills[0].id, "all-caps");
    }

    #[test]
    fn test_descriptor_is_idempotent() {
        let a = descriptor("http://host:5000", &AllCaps);
        let b = descriptor("http://host:5000", &AllCaps);
        assert_eq!(a, b);
    }
}
