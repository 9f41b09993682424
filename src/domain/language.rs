use std::fmt;
use std::str::FromStr;

/// A language identifier as understood by the remote providers,
/// e.g. "en", "fr", "pt-BR".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("language tag must not be empty".to_string());
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("invalid language tag: {}", s));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source language of a translation request. `Auto` asks the provider
/// to detect the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLanguage {
    Auto,
    Tag(LanguageTag),
}

impl SourceLanguage {
    pub fn as_tag(&self) -> Option<&LanguageTag> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Tag(tag) => Some(tag),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }
}

impl FromStr for SourceLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "auto" => Ok(SourceLanguage::Auto),
            other => other.parse().map(SourceLanguage::Tag),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLanguage::Auto => write!(f, "auto"),
            SourceLanguage::Tag(tag) => write!(f, "{}", tag),
        }
    }
}
