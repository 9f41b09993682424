use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::ChatError;
use crate::domain::{ChatMessage, ChatRole, Conversation};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct ChatBody {
    pub messages: Vec<ChatMessageBody>,
}

#[derive(Deserialize)]
pub struct ChatMessageBody {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[tracing::instrument(skip(state, body), fields(messages = body.messages.len()))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> impl IntoResponse {
    let mut conversation = Conversation::default();
    for message in body.messages {
        let role = match message.role.parse::<ChatRole>() {
            Ok(r) => r,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e }))
                    .into_response();
            }
        };
        conversation.push(ChatMessage::new(role, message.content));
    }

    match state.chat_service.complete(&conversation).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply })).into_response(),
        Err(e) => chat_error_response(e),
    }
}

fn chat_error_response(error: ChatError) -> axum::response::Response {
    let status = match &error {
        ChatError::EmptyInput | ChatError::EmptyConversation => StatusCode::BAD_REQUEST,
        ChatError::MissingApiKey => StatusCode::UNAUTHORIZED,
        ChatError::NoModels => StatusCode::INTERNAL_SERVER_ERROR,
        ChatError::AllModelsFailed { .. } => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
