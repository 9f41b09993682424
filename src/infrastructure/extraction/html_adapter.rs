use async_trait::async_trait;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, Document};

/// Delimiter wrapped around heading text so the rendering layer can
/// distinguish headings from body lines after translation.
pub const HEADING_MARK: &str = "##";

const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "iframe"];
const HEADING_ELEMENTS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const BODY_ELEMENTS: [&str; 2] = ["p", "li"];

/// Heading-aware plain-text extraction from HTML. Headings come out as
/// `## <text> ##` lines, paragraphs and list items as plain lines;
/// script, style, noscript and iframe subtrees are dropped.
#[derive(Default)]
pub struct HtmlAdapter;

impl HtmlAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn html_to_dom(data: &[u8]) -> RcDom {
    let html = String::from_utf8_lossy(data);
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap_or_default()
}

fn node_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Concatenated text of all descendant text nodes, skipped subtrees
/// excluded.
fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => {
            out.push_str(&contents.borrow());
        }
        NodeData::Element { name, .. } => {
            if SKIPPED_ELEMENTS.contains(&name.local.as_ref()) {
                return;
            }
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

fn collect_lines(node: &Handle, lines: &mut Vec<String>) {
    if let Some(name) = node_name(node) {
        if SKIPPED_ELEMENTS.contains(&name.as_str()) {
            return;
        }
        if HEADING_ELEMENTS.contains(&name.as_str()) {
            let mut text = String::new();
            collect_text(node, &mut text);
            let text = normalize_whitespace(&text);
            if !text.is_empty() {
                lines.push(format!("{HEADING_MARK} {text} {HEADING_MARK}"));
            }
            return;
        }
        if BODY_ELEMENTS.contains(&name.as_str()) {
            let mut text = String::new();
            collect_text(node, &mut text);
            let text = normalize_whitespace(&text);
            if !text.is_empty() {
                lines.push(text);
            }
            return;
        }
    }

    for child in node.children.borrow().iter() {
        collect_lines(child, lines);
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl TextExtractor for HtmlAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractorError> {
        if document.content_type != ContentType::Html {
            return Err(TextExtractorError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let dom = html_to_dom(data);
        let mut lines = Vec::new();
        collect_lines(&dom.document, &mut lines);

        if lines.is_empty() {
            return Err(TextExtractorError::NoTextFound(document.filename.clone()));
        }

        tracing::debug!(line_count = lines.len(), "HTML text extraction complete");
        Ok(lines.join("\n\n"))
    }
}
