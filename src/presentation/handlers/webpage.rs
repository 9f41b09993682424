use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::{ChatError, WebpageServiceError};
use crate::domain::LanguageTag;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct WebpageTranslateBody {
    pub url: String,
    pub target: String,
}

#[derive(Serialize)]
pub struct WebpageTranslateResponse {
    pub translated_text: String,
}

#[tracing::instrument(skip(state, body), fields(url = %body.url, target = %body.target))]
pub async fn translate_webpage_handler(
    State(state): State<AppState>,
    Json(body): Json<WebpageTranslateBody>,
) -> impl IntoResponse {
    let target = match body.target.parse::<LanguageTag>() {
        Ok(t) => t,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state.webpage_service.translate_page(&body.url, target).await {
        Ok(translated_text) => {
            (StatusCode::OK, Json(WebpageTranslateResponse { translated_text })).into_response()
        }
        Err(e) => webpage_error_response(e),
    }
}

fn webpage_error_response(error: WebpageServiceError) -> axum::response::Response {
    let status = match &error {
        WebpageServiceError::EmptyUrl | WebpageServiceError::InvalidUrl(_) => {
            StatusCode::BAD_REQUEST
        }
        WebpageServiceError::Fetch(_) => StatusCode::BAD_GATEWAY,
        WebpageServiceError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WebpageServiceError::Translation(ChatError::MissingApiKey) => StatusCode::UNAUTHORIZED,
        WebpageServiceError::Translation(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
