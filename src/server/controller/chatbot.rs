use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        controller::{extract::AppQuery, param::ChatbotParam},
        error::AppError,
        service::chatbot::ChatbotService,
        state::AppState,
    },
};

pub static CHATBOT_TAG: &str = "chatbot";

/// Answer a free-text question about outlets.
///
/// Recognizes outlet categories (e.g. "24 hours", "drive through") and locations taken
/// from outlet addresses, then lists the matching outlets. Unrecognized questions get
/// a message with example queries.
#[utoipa::path(
    get,
    path = "/chatbot/query",
    tag = CHATBOT_TAG,
    params(ChatbotParam),
    responses(
        (status = 200, description = "Chatbot reply", body = MessageDto),
        (status = 400, description = "Missing query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn chatbot_query(
    State(state): State<AppState>,
    AppQuery(param): AppQuery<ChatbotParam>,
) -> Result<impl IntoResponse, AppError> {
    let message = ChatbotService::new(&state.db, &state.locations)
        .answer(&param.query)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
