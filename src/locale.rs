// Locale - Language context for sentence segmentation and casing
//
// The host resolves the active dictation language once and passes a
// `LocaleInfo` into the operations that depend on it.

use whichlang::{detect_language, Lang};

use crate::error::EditingError;

/// Segmentation rule set selected by the primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleClass {
    /// Sentences end with ASCII punctuation followed by whitespace.
    #[default]
    Western,
    /// Full-width terminators (`。`, `！`, `？`) end a sentence on their own.
    Cjk,
}

impl LocaleClass {
    fn for_language(language: &str) -> Self {
        match language {
            "ja" | "zh" => Self::Cjk,
            _ => Self::Western,
        }
    }
}

/// Languages written without spaces between words
const NO_SPACE_LANGUAGES: &[&str] = &["ja", "zh", "th", "lo", "km", "my"];

/// Languages whose scripts have no upper/lower case distinction
const CASELESS_LANGUAGES: &[&str] = &[
    "ja", "zh", "ko", "th", "lo", "km", "my", "ar", "fa", "ur", "he", "hi", "bn", "ta", "te",
    "mr", "gu", "kn", "ml", "pa",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    tag: String,
    language: String,
    class: LocaleClass,
}

impl Default for LocaleInfo {
    fn default() -> Self {
        Self {
            tag: "en-US".to_string(),
            language: "en".to_string(),
            class: LocaleClass::Western,
        }
    }
}

impl LocaleInfo {
    /// Parse a language tag such as `en-US`, `ja_JP` or `zh`.
    ///
    /// Only the primary subtag is interpreted; it must be 2-3 ASCII letters.
    pub fn parse(tag: &str) -> Result<Self, EditingError> {
        let trimmed = tag.trim();
        let primary = trimmed.split(['-', '_']).next().unwrap_or_default();

        let valid = (2..=3).contains(&primary.len())
            && primary.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(EditingError::InvalidLocaleTag(tag.to_string()));
        }

        let language = primary.to_ascii_lowercase();
        Ok(Self {
            tag: trimmed.to_string(),
            class: LocaleClass::for_language(&language),
            language,
        })
    }

    /// Guess the locale from a sample of the text being edited.
    pub fn detect(text: &str) -> Self {
        let lang = detect_language(text);
        tracing::debug!("LocaleInfo: detected {:?}", lang);
        let tag = tag_for_lang(lang);

        Self {
            tag: tag.to_string(),
            language: tag.to_string(),
            class: LocaleClass::for_language(tag),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn class(&self) -> LocaleClass {
        self.class
    }

    /// Whether words are separated by spaces (smart spacing applies)
    pub fn considers_spaces(&self) -> bool {
        !NO_SPACE_LANGUAGES.contains(&self.language.as_str())
    }

    /// Whether the script distinguishes upper and lower case (smart capitalization applies)
    pub fn uses_letter_case(&self) -> bool {
        !CASELESS_LANGUAGES.contains(&self.language.as_str())
    }

    /// Upper-case a single character following this locale's rules.
    pub fn to_upper(&self, ch: char) -> String {
        match (self.language.as_str(), ch) {
            ("tr" | "az", 'i') => "\u{0130}".to_string(),
            _ => ch.to_uppercase().collect(),
        }
    }

    /// Capitalize the first non-whitespace character of `text`.
    pub fn capitalize_first(&self, text: &str) -> String {
        let Some((pos, first)) = text.char_indices().find(|(_, c)| !c.is_whitespace()) else {
            return text.to_string();
        };

        if !first.is_lowercase() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len() + 2);
        result.push_str(&text[..pos]);
        result.push_str(&self.to_upper(first));
        result.push_str(&text[pos + first.len_utf8()..]);
        result
    }
}

fn tag_for_lang(lang: Lang) -> &'static str {
    match lang {
        Lang::Ara => "ar",
        Lang::Cmn => "zh",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Hin => "hi",
        Lang::Ita => "it",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Nld => "nl",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Spa => "es",
        Lang::Swe => "sv",
        Lang::Tur => "tr",
        Lang::Vie => "vi",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        let en = LocaleInfo::parse("en-US").unwrap();
        assert_eq!(en.language(), "en");
        assert_eq!(en.tag(), "en-US");
        assert_eq!(en.class(), LocaleClass::Western);

        let ja = LocaleInfo::parse("ja_JP").unwrap();
        assert_eq!(ja.language(), "ja");
        assert_eq!(ja.class(), LocaleClass::Cjk);

        let zh = LocaleInfo::parse("ZH").unwrap();
        assert_eq!(zh.language(), "zh");
        assert_eq!(zh.class(), LocaleClass::Cjk);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LocaleInfo::parse("").is_err());
        assert!(LocaleInfo::parse("e").is_err());
        assert!(LocaleInfo::parse("english").is_err());
        assert!(LocaleInfo::parse("12-US").is_err());
    }

    #[test]
    fn test_spacing_and_case_flags() {
        let en = LocaleInfo::default();
        assert!(en.considers_spaces());
        assert!(en.uses_letter_case());

        let ja = LocaleInfo::parse("ja").unwrap();
        assert!(!ja.considers_spaces());
        assert!(!ja.uses_letter_case());

        // Korean separates words but has no case
        let ko = LocaleInfo::parse("ko-KR").unwrap();
        assert!(ko.considers_spaces());
        assert!(!ko.uses_letter_case());
    }

    #[test]
    fn test_capitalize_first() {
        let en = LocaleInfo::default();
        assert_eq!(en.capitalize_first("more text"), "More text");
        assert_eq!(en.capitalize_first("  leading"), "  Leading");
        assert_eq!(en.capitalize_first("Already"), "Already");
        assert_eq!(en.capitalize_first("\"quoted"), "\"quoted");
        assert_eq!(en.capitalize_first(""), "");
        assert_eq!(en.capitalize_first("élan"), "Élan");
    }

    #[test]
    fn test_turkish_dotted_capital() {
        let tr = LocaleInfo::parse("tr-TR").unwrap();
        assert_eq!(tr.capitalize_first("istanbul"), "İstanbul");
        assert_eq!(LocaleInfo::default().capitalize_first("istanbul"), "Istanbul");
    }

    #[test]
    fn test_detect_japanese() {
        let info = LocaleInfo::detect("私はテニスが好きです。バスケットボールも好きです。");
        assert_eq!(info.class(), LocaleClass::Cjk);
    }

    #[test]
    fn test_detect_english() {
        let info = LocaleInfo::detect("The quick brown fox jumps over the lazy dog.");
        assert_eq!(info.language(), "en");
        assert_eq!(info.class(), LocaleClass::Western);
    }
}
