use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::TextExtractorError;
use crate::application::services::DocumentServiceError;
use crate::domain::{ContentType, LanguageTag, SourceLanguage};
use crate::infrastructure::pdf::{compose_pdf, PageLayout};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Pdf,
}

#[derive(Serialize)]
pub struct DocumentTranslateResponse {
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source: Option<String>,
    pub failed_chunks: Vec<usize>,
    pub download_name: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn translate_document_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file: Option<(String, ContentType, Vec<u8>)> = None;
    let mut source = SourceLanguage::Auto;
    let mut target: Option<LanguageTag> = None;
    let mut output = OutputFormat::Text;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        match field.name().unwrap_or_default() {
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let content_type = match ContentType::from_mime(&mime) {
                    Some(ct) => ct,
                    None => {
                        tracing::warn!(content_type = %mime, "Unsupported content type");
                        return (
                            StatusCode::UNSUPPORTED_MEDIA_TYPE,
                            Json(ErrorResponse {
                                error: format!("Unsupported content type: {}", mime),
                            }),
                        )
                            .into_response();
                    }
                };
                let data = match field.bytes().await {
                    Ok(d) => d.to_vec(),
                    Err(e) => return bad_request(format!("Failed to read file: {}", e)),
                };
                file = Some((filename, content_type, data));
            }
            "source" => match read_text_field(field).await {
                Ok(value) => match value.parse() {
                    Ok(s) => source = s,
                    Err(e) => return bad_request(e),
                },
                Err(response) => return response,
            },
            "target" => match read_text_field(field).await {
                Ok(value) => match value.parse() {
                    Ok(t) => target = Some(t),
                    Err(e) => return bad_request(e),
                },
                Err(response) => return response,
            },
            "output" => match read_text_field(field).await {
                Ok(value) => match value.as_str() {
                    "text" => output = OutputFormat::Text,
                    "pdf" => output = OutputFormat::Pdf,
                    other => {
                        return bad_request(format!("Unknown output format: {}", other));
                    }
                },
                Err(response) => return response,
            },
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let Some((filename, content_type, data)) = file else {
        return bad_request("No file uploaded".to_string());
    };
    let Some(target) = target else {
        return bad_request("No target language provided".to_string());
    };

    let result = state
        .document_service
        .translate_document(&data, filename, content_type, source, target)
        .await;

    let (document, translation) = match result {
        Ok(r) => r,
        Err(e) => return document_error_response(e),
    };

    match output {
        OutputFormat::Text => (
            StatusCode::OK,
            Json(DocumentTranslateResponse {
                translated_text: translation.text,
                detected_source: translation.detected_source.map(|t| t.to_string()),
                failed_chunks: translation.failed_chunks,
                download_name: document.translated_filename("txt"),
            }),
        )
            .into_response(),
        OutputFormat::Pdf => {
            let layout = PageLayout {
                max_chars_per_line: state.settings.pdf_layout.max_chars_per_line,
                ..PageLayout::default()
            };
            let download_name = document.translated_filename("pdf");
            match compose_pdf(&translation.text, &download_name, &layout) {
                Ok(bytes) => (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, "application/pdf".to_string()),
                        (
                            header::CONTENT_DISPOSITION,
                            format!("attachment; filename=\"{}\"", download_name),
                        ),
                    ],
                    bytes,
                )
                    .into_response(),
                Err(e) => {
                    tracing::error!(error = %e, "PDF rendering failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse {
                            error: e.to_string(),
                        }),
                    )
                        .into_response()
                }
            }
        }
    }
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
) -> Result<String, axum::response::Response> {
    field
        .text()
        .await
        .map_err(|e| bad_request(format!("Failed to read field: {}", e)))
}

fn bad_request(message: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

fn document_error_response(error: DocumentServiceError) -> axum::response::Response {
    let status = match &error {
        DocumentServiceError::EmptyInput => StatusCode::BAD_REQUEST,
        DocumentServiceError::Extraction(TextExtractorError::UnsupportedContentType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        DocumentServiceError::Extraction(TextExtractorError::NoTextFound(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DocumentServiceError::Extraction(_) => StatusCode::BAD_GATEWAY,
        DocumentServiceError::AllChunksFailed { .. } => StatusCode::BAD_GATEWAY,
        DocumentServiceError::Translation(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
