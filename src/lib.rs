// Dictation Engine - Caret arithmetic for speech dictation editing commands
//
// This library provides FFI-safe interfaces for Swift integration.

pub mod bridge;
pub mod config;
pub mod editing;
pub mod error;
pub mod host_logger;
pub mod locale;

pub use config::DictationSettings;
pub use editing::{
    delete_phrase, get_insert_before_index, get_replace_phrase_data, insert_before,
    nav_next_sent, nav_prev_sent, prepare_commit_text, replace_phrase, select_between,
    smart_capitalization, smart_spacing, PhraseDeletion, SelectionRange, TextEdit,
};
pub use error::EditingError;
pub use locale::{LocaleClass, LocaleInfo};
