//! Language support for document templates
//!
//! The generated project documents are written in Japanese; English variants
//! exist as fallbacks for some of them. The `Other` variant allows extension.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported languages for generated documents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Japanese (the original document language)
    #[default]
    Japanese,
    /// English
    English,
    /// Other languages (ISO 639-1 code)
    Other(String),
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
            Language::Other(code) => code,
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &str {
        match self {
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::Other(code) => code,
        }
    }

    /// Parse from ISO 639-1 code or common name
    pub fn from_code(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ja" | "japanese" | "日本語" | "ja-jp" => Language::Japanese,
            "en" | "english" => Language::English,
            other => Language::Other(other.to_string()),
        }
    }

    /// Check if this is a known language (not Other)
    pub fn is_known(&self) -> bool {
        !matches!(self, Language::Other(_))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from_code(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from_code(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Japanese.code(), "ja");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Other("zh".to_string()).code(), "zh");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ja"), Language::Japanese);
        assert_eq!(Language::from_code("Japanese"), Language::Japanese);
        assert_eq!(Language::from_code("日本語"), Language::Japanese);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code("zh"), Language::Other("zh".to_string()));
    }

    #[test]
    fn test_default_is_japanese() {
        assert_eq!(Language::default(), Language::Japanese);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Language::Japanese), "Japanese");
        assert_eq!(format!("{}", Language::English), "English");
    }

    #[test]
    fn test_from_string() {
        let lang: Language = "en".into();
        assert_eq!(lang, Language::English);

        let lang: Language = String::from("japanese").into();
        assert_eq!(lang, Language::Japanese);
    }
}
