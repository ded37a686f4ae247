//! Shopping assistant route handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::agent::{ChatService, ChatTurn};
use crate::error::Result;
use crate::middleware::CustomerIdentity;
use crate::state::AppState;

/// Request body: the full conversation so far, ending with the user's
/// latest message. The service is stateless; the client carries the
/// transcript.
#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    pub messages: Vec<ChatTurn>,
}

/// Response body: the assistant's new turns.
#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub messages: Vec<ChatTurn>,
}

/// Run one assistant exchange.
pub async fn send(
    State(state): State<AppState>,
    identity: CustomerIdentity,
    Json(body): Json<ChatRequestBody>,
) -> Result<Json<ChatResponseBody>> {
    let service = ChatService::new(
        state.claude(),
        state.sanity(),
        state.sanity(),
        state.tool_context(),
    );

    let messages = service.respond(identity.customer(), &body.messages).await?;

    Ok(Json(ChatResponseBody { messages }))
}
