//! Internationalization module
//!
//! Arabic is the default locale and is served without a URL prefix;
//! English pages live under `/en`. Translation tables hold the UI strings
//! and the phrase templates used when synthesizing link titles.

mod ar;
mod en;

use crate::core::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Site language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::Ar, Language::En];
pub const DEFAULT_LANGUAGE: Language = Language::Ar;

impl Language {
    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a language code, returning None for anything unsupported
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Detect the language from a URL path.
    /// A leading `/en` segment means English; everything else is Arabic.
    pub fn from_url_path(path: &str) -> Self {
        match path.split('/').nth(1) {
            Some("en") => Language::En,
            _ => Language::Ar,
        }
    }

    /// The other supported language
    pub fn alternate(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    /// URL prefix for hrefs in this language (empty for the default)
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Language::Ar => "",
            Language::En => "/en",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| Error::InvalidLanguage(s.to_string()))
    }
}

/// Build a localized site path. Arabic paths are returned unchanged,
/// English paths get the `/en` prefix.
pub fn localized_path(path: &str, lang: Language) -> String {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    match lang {
        Language::Ar => normalized,
        Language::En if normalized == "/" => "/en".to_string(),
        Language::En => format!("/en{}", normalized),
    }
}

/// Internationalization manager
pub struct I18n {
    current_lang: Language,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: Language) -> Self {
        let mut i18n = Self {
            current_lang: lang,
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: Language) {
        self.current_lang = lang;
        self.translations = match lang {
            Language::Ar => ar::get_translations(),
            Language::En => en::get_translations(),
        };

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, falling back to the key itself
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Fill the `{name}` placeholder of a template string
    pub fn format(&self, key: &str, name: &str) -> String {
        self.get(key).replace("{name}", name)
    }

    /// Get all translations
    pub fn get_all(&self) -> HashMap<String, String> {
        self.translations.clone()
    }

    /// Get the current language
    pub fn current_language(&self) -> Language {
        self.current_lang
    }

    /// Get available languages with their native names
    pub fn available_languages() -> Vec<(Language, &'static str)> {
        vec![
            (Language::Ar, "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}"),
            (Language::En, "English"),
        ]
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}
