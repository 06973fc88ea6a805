use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppError,
    message::{ContactAck, ContactMessage},
    state::SharedState,
};

pub async fn contact_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ContactMessage>,
) -> Result<Json<ContactAck>, AppError> {
    payload.validate()?;

    state.contact.submit(&payload).await?;
    Ok(Json(ContactAck { ok: true }))
}
