use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::TranslationError;
use crate::domain::{LanguageTag, SourceLanguage, TranslationRequest};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct TranslateBody {
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
    pub target: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source: Option<String>,
}

#[tracing::instrument(skip(state, body), fields(target = %body.target))]
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(body): Json<TranslateBody>,
) -> impl IntoResponse {
    let source = match body.source.as_deref().unwrap_or("auto").parse::<SourceLanguage>() {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    let target = match body.target.parse::<LanguageTag>() {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };

    let request = TranslationRequest::new(body.text, source, target);

    match state.translation_service.translate(&request).await {
        Ok(translation) => (
            StatusCode::OK,
            Json(TranslateResponse {
                translated_text: translation.text,
                detected_source: translation.detected_source.map(|t| t.to_string()),
            }),
        )
            .into_response(),
        Err(e) => translation_error_response(e),
    }
}

fn bad_request(message: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

pub(super) fn translation_error_response(error: TranslationError) -> axum::response::Response {
    let status = match &error {
        TranslationError::EmptyInput | TranslationError::SameLanguage(_) => {
            StatusCode::BAD_REQUEST
        }
        TranslationError::NoProviders => StatusCode::INTERNAL_SERVER_ERROR,
        TranslationError::AllProvidersFailed { .. } => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
