// Dictation Settings - Host-provided configuration
//
// The host serializes its preferences as JSON; missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::error::EditingError;
use crate::locale::LocaleInfo;

/// Locale value asking the engine to detect the language from the text
pub const AUTO_LOCALE: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictationSettings {
    /// Language tag such as `en-US`, or `auto`
    pub locale: String,
    pub smart_spacing: bool,
    pub smart_capitalization: bool,
}

impl Default for DictationSettings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            smart_spacing: true,
            smart_capitalization: true,
        }
    }
}

impl DictationSettings {
    /// Parse and validate settings JSON.
    pub fn from_json(json: &str) -> Result<Self, EditingError> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.locale != AUTO_LOCALE {
            LocaleInfo::parse(&settings.locale)?;
        }
        Ok(settings)
    }

    /// Resolve the locale, detecting it from `sample_text` in `auto` mode.
    pub fn locale_info(&self, sample_text: &str) -> LocaleInfo {
        if self.locale == AUTO_LOCALE {
            if sample_text.trim().is_empty() {
                return LocaleInfo::default();
            }
            return LocaleInfo::detect(sample_text);
        }

        LocaleInfo::parse(&self.locale).unwrap_or_else(|e| {
            tracing::warn!("DictationSettings: {}, using default locale", e);
            LocaleInfo::default()
        })
    }
}
