mod composite_extractor;
mod html_adapter;
mod pdf_text_adapter;
mod vision_ocr_adapter;

pub use composite_extractor::CompositeExtractor;
pub use html_adapter::HtmlAdapter;
pub use pdf_text_adapter::PdfTextAdapter;
pub use vision_ocr_adapter::{AnnotateResponse, OcrCapability, VisionOcrAdapter};
