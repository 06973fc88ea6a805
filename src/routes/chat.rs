use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Reject malformed conversations before anything goes on the wire.
    payload.validate()?;

    let response = state.relay.relay(&payload.turns).await?;
    Ok(Json(response))
}
