use linguara::application::ports::{TextExtractor, TextExtractorError};
use linguara::domain::{ContentType, Document};
use linguara::infrastructure::extraction::HtmlAdapter;

fn html_document(name: &str) -> Document {
    Document::new(name.to_string(), ContentType::Html, 0)
}

#[tokio::test]
async fn given_headings_and_paragraphs_when_extracting_then_headings_carry_markers() {
    let html = br#"
        <html><body>
            <h1>Main Title</h1>
            <p>First paragraph of body text.</p>
            <h2>Subsection</h2>
            <p>Second paragraph.</p>
        </body></html>
    "#;
    let adapter = HtmlAdapter::new();

    let text = adapter.extract(html, &html_document("page.html")).await.unwrap();
    let lines: Vec<&str> = text.split("\n\n").collect();

    assert_eq!(lines[0], "## Main Title ##");
    assert_eq!(lines[1], "First paragraph of body text.");
    assert_eq!(lines[2], "## Subsection ##");
    assert_eq!(lines[3], "Second paragraph.");
}

#[tokio::test]
async fn given_script_and_style_content_when_extracting_then_it_is_dropped() {
    let html = br#"
        <html><head><style>p { color: red; }</style></head>
        <body>
            <script>var secret = "tracking";</script>
            <noscript>Enable JavaScript</noscript>
            <iframe src="ad.html">inline ad</iframe>
            <p>Visible text only.</p>
        </body></html>
    "#;
    let adapter = HtmlAdapter::new();

    let text = adapter.extract(html, &html_document("page.html")).await.unwrap();

    assert_eq!(text, "Visible text only.");
    assert!(!text.contains("tracking"));
    assert!(!text.contains("color"));
    assert!(!text.contains("Enable JavaScript"));
}

#[tokio::test]
async fn given_list_items_when_extracting_then_each_becomes_a_line() {
    let html = br#"<html><body><ul><li>one</li><li>two</li></ul></body></html>"#;
    let adapter = HtmlAdapter::new();

    let text = adapter.extract(html, &html_document("page.html")).await.unwrap();

    assert_eq!(text, "one\n\ntwo");
}

#[tokio::test]
async fn given_nested_markup_in_heading_when_extracting_then_text_is_flattened() {
    let html = br#"<html><body><h1>Big <em>bold</em>   title</h1></body></html>"#;
    let adapter = HtmlAdapter::new();

    let text = adapter.extract(html, &html_document("page.html")).await.unwrap();

    assert_eq!(text, "## Big bold title ##");
}

#[tokio::test]
async fn given_page_without_text_content_when_extracting_then_no_text_found() {
    let html = br#"<html><body><script>1</script><div></div></body></html>"#;
    let adapter = HtmlAdapter::new();

    let result = adapter.extract(html, &html_document("empty.html")).await;

    assert!(matches!(result, Err(TextExtractorError::NoTextFound(_))));
}

#[tokio::test]
async fn given_non_html_document_when_extracting_then_unsupported() {
    let adapter = HtmlAdapter::new();
    let document = Document::new("doc.pdf".to_string(), ContentType::Pdf, 0);

    let result = adapter.extract(b"%PDF-1.4", &document).await;

    assert!(matches!(
        result,
        Err(TextExtractorError::UnsupportedContentType(_))
    ));
}
