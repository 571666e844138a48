use crate::api::AppState;
use crate::engine::format::clock_label;
use crate::error::AppError;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    /// Stable list key (wallet + timestamp).
    pub key: String,
    pub user: String,
    pub wallet: String,
    pub text: String,
    pub timestamp_ms: i64,
    /// Wall-clock label, e.g. "2:05pm".
    pub time_display: String,
}

pub async fn get_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageDto>>, AppError> {
    let mut messages = state.source.fetch_messages().await?;

    // Oldest first; stable sort keeps upstream order for equal timestamps.
    messages.sort_by_key(|m| m.timestamp);

    let dtos = messages
        .into_iter()
        .map(|m| MessageDto {
            key: m.key(),
            user: m.user.clone(),
            wallet: m.wallet.to_string(),
            text: m.text.clone(),
            timestamp_ms: m.timestamp.as_ms(),
            time_display: clock_label(m.timestamp),
        })
        .collect();

    Ok(Json(dtos))
}
