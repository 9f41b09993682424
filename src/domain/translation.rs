use super::language::{LanguageTag, SourceLanguage};

/// A single translation request as issued against a provider chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: SourceLanguage,
    pub target: LanguageTag,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: SourceLanguage, target: LanguageTag) -> Self {
        Self {
            text: text.into(),
            source,
            target,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// A concrete source equal to the target is a no-op request and is
    /// rejected before any provider is contacted.
    pub fn is_same_language(&self) -> bool {
        self.source.as_tag() == Some(&self.target)
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: self.source.clone(),
            target: self.target.clone(),
        }
    }
}

/// Successful provider output.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Populated when the request asked for auto-detection and the
    /// provider reported what it detected.
    pub detected_source: Option<LanguageTag>,
}

impl Translation {
    pub fn new(text: impl Into<String>, detected_source: Option<LanguageTag>) -> Self {
        Self {
            text: text.into(),
            detected_source,
        }
    }
}
