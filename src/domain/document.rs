use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Pdf,
    Html,
    PlainText,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.split(';').next().unwrap_or(mime).trim() {
            "application/pdf" => Some(ContentType::Pdf),
            "text/html" | "application/xhtml+xml" => Some(ContentType::Html),
            "text/plain" => Some(ContentType::PlainText),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            ContentType::Pdf => "application/pdf",
            ContentType::Html => "text/html",
            ContentType::PlainText => "text/plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            size_bytes,
        }
    }

    /// Download artifact name: `translated_<stem>.<ext>`.
    pub fn translated_filename(&self, extension: &str) -> String {
        let stem = self
            .filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(self.filename.as_str());
        format!("translated_{}.{}", stem, extension)
    }
}
