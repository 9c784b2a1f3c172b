// Errors - Failures on the configuration side of the engine
//
// Editing operations never fail; they report "no match" through `Option`.
// Only the host-supplied settings and locale tags can be rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditingError {
    #[error("invalid dictation settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    #[error("invalid locale tag: {0:?}")]
    InvalidLocaleTag(String),
}
