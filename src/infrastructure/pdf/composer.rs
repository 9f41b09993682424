//! Fixed-layout PDF authoring for translated text.
//!
//! The layout is deliberately simple: greedy word-wrap to a fixed
//! character budget per line, lines placed top-to-bottom at constant
//! spacing on A4 pages, a new page whenever the remaining vertical
//! space cannot fit another line. Pagination has no awareness of
//! sentence or paragraph boundaries.

use printpdf::{BuiltinFont, Mm, PdfDocument};

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("pdf rendering failed: {0}")]
    RenderingFailed(String),
}

/// Page geometry and line budget. `Default` is A4 with 15 mm margins,
/// 11 pt body text and a 90-character line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
    pub line_height_mm: f32,
    pub font_size_pt: f32,
    pub max_chars_per_line: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 15.0,
            line_height_mm: 6.0,
            font_size_pt: 11.0,
            max_chars_per_line: 90,
        }
    }
}

impl PageLayout {
    /// Number of text lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.height_mm - 2.0 * self.margin_mm;
        (usable / self.line_height_mm).floor() as usize
    }
}

/// Greedy word-wrap to at most `max_chars` characters per line. A
/// single word longer than the budget is split mid-word rather than
/// overflowing.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    assert!(max_chars > 0, "line budget must be positive");

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if word_chars > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > max_chars {
                lines.push(rest.drain(..max_chars).collect());
            }
            current = rest.into_iter().collect();
            current_chars = current.chars().count();
            continue;
        }

        let needed = if current.is_empty() {
            word_chars
        } else {
            current_chars + 1 + word_chars
        };

        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_chars = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Distributes wrapped lines over pages of fixed capacity.
pub fn plan_pages(lines: &[String], layout: &PageLayout) -> Vec<Vec<String>> {
    let capacity = layout.lines_per_page().max(1);
    lines
        .chunks(capacity)
        .map(|page| page.to_vec())
        .collect()
}

/// Renders `text` into a single-column PDF and returns the file bytes.
pub fn compose_pdf(text: &str, title: &str, layout: &PageLayout) -> Result<Vec<u8>, ComposeError> {
    let lines = wrap_text(text, layout.max_chars_per_line);
    let pages = plan_pages(&lines, layout);

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(layout.width_mm),
        Mm(layout.height_mm),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ComposeError::RenderingFailed(e.to_string()))?;

    let mut page_refs = vec![(first_page, first_layer)];
    for index in 1..pages.len() {
        let (page, layer) = doc.add_page(
            Mm(layout.width_mm),
            Mm(layout.height_mm),
            format!("Layer {}", index + 1),
        );
        page_refs.push((page, layer));
    }

    for (page_lines, (page, layer)) in pages.iter().zip(page_refs) {
        let current_layer = doc.get_page(page).get_layer(layer);
        let mut y = layout.height_mm - layout.margin_mm;

        for line in page_lines {
            y -= layout.line_height_mm;
            current_layer.use_text(
                line.as_str(),
                layout.font_size_pt,
                Mm(layout.margin_mm),
                Mm(y),
                &font,
            );
        }
    }

    let mut buffer = Vec::new();
    {
        let mut writer = std::io::BufWriter::new(&mut buffer);
        doc.save(&mut writer)
            .map_err(|e| ComposeError::RenderingFailed(e.to_string()))?;
    }
    Ok(buffer)
}
