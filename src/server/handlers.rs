//! HTTP entrypoints

use axum::{
    body::Bytes,
    extract::{Host, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    protocol::{
        jsonrpc::{JsonRpcErrorResponse, JsonRpcResponse, SendMessageRequest},
        AgentCard,
    },
    schema::{TaskConfig, ValidationError},
    skill,
};

use super::{card, error::RequestError, AppState};

/// `GET /`: a small landing fragment announcing the agent
pub async fn index() -> Html<&'static str> {
    Html(r#"<p style="font-size:30px">Capitalizer agent</p>"#)
}

/// `GET /.well-known/agent.json`: the capability descriptor
///
/// The card's URL is derived from this request's own base URL plus the
/// optional `x-external-base-url` prefix header.
pub async fn agent_card(
    State(state): State<AppState>,
    Host(host): Host,
    headers: HeaderMap,
) -> Json<AgentCard> {
    let base_url = card::external_base_url(&host, &headers);
    Json(card::descriptor(&base_url, state.skill.as_ref()))
}

/// `POST /`: JSON-RPC `message/send`
///
/// Both outcomes are JSON bodies with HTTP 200: a success envelope wrapping
/// the completed task, or an error envelope describing the rejection.
pub async fn send_message(State(state): State<AppState>, body: Bytes) -> Response {
    let raw: Value = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(e) => return reject(None, RequestError::Parse(e.to_string())),
    };

    // Hold on to the caller's request id so rejections can echo it.
    let request_id = raw.get("id").cloned();

    match dispatch(&state, raw).await {
        Ok(response) => {
            debug!(response = ?response, "sending response");
            Json(response).into_response()
        }
        Err(err) => reject(request_id, err),
    }
}

async fn dispatch(state: &AppState, raw: Value) -> Result<JsonRpcResponse, RequestError> {
    let request: SendMessageRequest = serde_json::from_value(raw)
        .map_err(|e| RequestError::InvalidEnvelope(e.to_string()))?;

    let data = request
        .params
        .message
        .first_data_part()
        .ok_or(RequestError::MissingPayload)?;

    let config = TaskConfig::parse(data)?;
    let text = config.target_text.as_text().ok_or_else(|| {
        RequestError::from(ValidationError::single(
            "target_text.value",
            "expected a single string",
        ))
    })?;

    let task_id = Uuid::now_v7().to_string();
    let context_id = Uuid::now_v7().to_string();
    info!(%task_id, %context_id, "task start");

    let task = skill::handle_task(state.skill.as_ref(), text, task_id, context_id).await;

    Ok(JsonRpcResponse::new(task))
}

fn reject(request_id: Option<Value>, err: RequestError) -> Response {
    warn!(%err, "request rejected");
    Json(JsonRpcErrorResponse::new(request_id, err.to_error_object())).into_response()
}
