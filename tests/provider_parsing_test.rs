use linguara::infrastructure::extraction::AnnotateResponse;
use linguara::infrastructure::providers::{
    GenerateContentResponse, MyMemoryResponse, TranslateResponse,
};

#[test]
fn given_successful_google_payload_when_parsing_then_translation_and_detection_are_read() {
    let json = r#"{
        "data": {
            "translations": [
                {"translatedText": "bonjour", "detectedSourceLanguage": "en"}
            ]
        }
    }"#;

    let parsed: TranslateResponse = serde_json::from_str(json).unwrap();

    let item = parsed.data.unwrap().translations.into_iter().next().unwrap();
    assert_eq!(item.translated_text, "bonjour");
    assert_eq!(item.detected_source_language.as_deref(), Some("en"));
    assert!(parsed.error.is_none());
}

#[test]
fn given_google_error_payload_when_parsing_then_message_is_available() {
    let json = r#"{"error": {"message": "API key not valid", "code": 400}}"#;

    let parsed: TranslateResponse = serde_json::from_str(json).unwrap();

    assert!(parsed.data.is_none());
    assert_eq!(parsed.error.unwrap().message.as_deref(), Some("API key not valid"));
}

#[test]
fn given_successful_mymemory_payload_when_parsing_then_translation_is_read() {
    let json = r#"{
        "responseData": {"translatedText": "hola", "detectedLanguage": "en"},
        "responseStatus": 200
    }"#;

    let parsed: MyMemoryResponse = serde_json::from_str(json).unwrap();

    let data = parsed.response_data.unwrap();
    assert_eq!(data.translated_text, "hola");
    assert_eq!(data.detected_language.as_deref(), Some("en"));
}

#[test]
fn given_mymemory_failure_payload_when_parsing_then_details_are_available() {
    let json = r#"{"responseDetails": "INVALID LANGUAGE PAIR"}"#;

    let parsed: MyMemoryResponse = serde_json::from_str(json).unwrap();

    assert!(parsed.response_data.is_none());
    assert_eq!(parsed.response_details.as_deref(), Some("INVALID LANGUAGE PAIR"));
}

#[test]
fn given_gemini_completion_payload_when_parsing_then_first_candidate_text_is_read() {
    let json = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "bonjour le monde"}], "role": "model"}}
        ]
    }"#;

    let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();

    let text = parsed
        .candidates
        .unwrap()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.text)
        .unwrap();
    assert_eq!(text, "bonjour le monde");
}

#[test]
fn given_gemini_error_payload_when_parsing_then_message_is_available() {
    let json = r#"{"error": {"message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;

    let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();

    assert!(parsed.candidates.is_none());
    assert_eq!(
        parsed.error.unwrap().message.as_deref(),
        Some("Resource has been exhausted")
    );
}

#[test]
fn given_vision_annotation_payload_when_parsing_then_full_text_is_read() {
    let json = r#"{
        "responses": [
            {"fullTextAnnotation": {"text": "Page one text", "pages": []}}
        ]
    }"#;

    let parsed: AnnotateResponse = serde_json::from_str(json).unwrap();

    let annotation = parsed
        .responses
        .unwrap()
        .into_iter()
        .next()
        .and_then(|r| r.full_text_annotation)
        .unwrap();
    assert_eq!(annotation.text, "Page one text");
}

#[test]
fn given_empty_vision_response_when_parsing_then_no_annotation() {
    let json = r#"{"responses": [{}]}"#;

    let parsed: AnnotateResponse = serde_json::from_str(json).unwrap();

    let first = parsed.responses.unwrap().into_iter().next().unwrap();
    assert!(first.full_text_annotation.is_none());
}
