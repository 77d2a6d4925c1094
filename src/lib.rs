//! # Capitalizer Agent
//!
//! A server-side implementation of an Agent2Agent (A2A) text agent.
//!
//! The agent exposes a single skill (uppercasing text) behind the A2A
//! discovery and messaging surface: a capability card served at
//! `/.well-known/agent.json` and a JSON-RPC `message/send` endpoint on
//! `POST /`. Every request is handled independently; tasks, messages, and
//! artifacts are value objects that live for exactly one exchange.
//!
//! ## Features
//!
//! - **A2A wire compatible**: camelCase task/message envelopes, kebab-case
//!   task states, JSON-RPC 2.0 request/response framing
//! - **Typed validation**: inbound task configuration is parsed into typed
//!   structures with field-level diagnostics on failure
//! - **Async**: built on tokio and axum
//!
//! ## Example
//!
//! ```rust,no_run
//! use capitalizer_agent::{config::ServerConfig, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.addr()).await?;
//!     axum::serve(listener, server::router(server::AppState::default())).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod protocol;
pub mod schema;
pub mod server;
pub mod skill;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        protocol::{AgentCard, Artifact, Message, MessagePart, Role, Task, TaskState, TaskStatus},
        schema::{Parameter, ParameterValue, TaskConfig, ValidationError},
        skill::{AllCaps, TextSkill},
    };
}
