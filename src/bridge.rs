// FFI Bridge - Swift-Rust interop using swift-bridge
//
// Carets cross the boundary as i64. "Not found" results are reported with
// `is_found() == false` on the opaque types, or -1 for plain indices.

use crate::config::DictationSettings;
use crate::editing;
use crate::host_logger;
use crate::locale::LocaleInfo;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type ReplacePhraseData;

        fn is_found(&self) -> bool;
        fn new_index(&self) -> i64;
        fn delete_length(&self) -> i64;
    }

    extern "Rust" {
        type TextSelection;

        fn is_found(&self) -> bool;
        fn start(&self) -> i64;
        fn end(&self) -> i64;
    }

    extern "Rust" {
        type EditOutcome;

        fn is_found(&self) -> bool;
        fn text(&self) -> String;
        fn caret(&self) -> i64;
    }

    extern "Rust" {
        fn get_replace_phrase_data(
            value: String,
            caret_index: i64,
            delete_phrase: String,
        ) -> ReplacePhraseData;
        fn get_insert_before_index(value: String, caret_index: i64, before_phrase: String) -> i64;
        fn select_between(
            value: String,
            caret_index: i64,
            start_phrase: String,
            end_phrase: String,
        ) -> TextSelection;
        fn nav_next_sent(value: String, caret_index: i64, locale: String) -> i64;
        fn nav_prev_sent(value: String, caret_index: i64, locale: String) -> i64;
        fn smart_spacing(value: String, caret_index: i64, commit_text: String) -> String;
        fn smart_capitalization(
            value: String,
            caret_index: i64,
            commit_text: String,
            locale: String,
        ) -> String;
        fn replace_phrase(
            value: String,
            caret_index: i64,
            delete_phrase: String,
            insert_phrase: String,
        ) -> EditOutcome;
        fn delete_phrase(value: String, caret_index: i64, phrase: String) -> EditOutcome;
        fn insert_before(
            value: String,
            caret_index: i64,
            insert_phrase: String,
            before_phrase: String,
        ) -> EditOutcome;
        fn prepare_commit_text(
            value: String,
            caret_index: i64,
            commit_text: String,
            settings_json: String,
        ) -> String;
        fn init_logging(verbose: bool) -> bool;
    }
}

pub struct ReplacePhraseData(Option<editing::PhraseDeletion>);

impl ReplacePhraseData {
    fn is_found(&self) -> bool {
        self.0.is_some()
    }

    fn new_index(&self) -> i64 {
        self.0.map_or(-1, |d| d.new_index as i64)
    }

    fn delete_length(&self) -> i64 {
        self.0.map_or(0, |d| d.delete_length as i64)
    }
}

pub struct TextSelection(Option<editing::SelectionRange>);

impl TextSelection {
    fn is_found(&self) -> bool {
        self.0.is_some()
    }

    fn start(&self) -> i64 {
        self.0.map_or(-1, |r| r.start as i64)
    }

    fn end(&self) -> i64 {
        self.0.map_or(-1, |r| r.end as i64)
    }
}

pub struct EditOutcome(Option<editing::TextEdit>);

impl EditOutcome {
    fn is_found(&self) -> bool {
        self.0.is_some()
    }

    fn text(&self) -> String {
        self.0.as_ref().map(|e| e.text.clone()).unwrap_or_default()
    }

    fn caret(&self) -> i64 {
        self.0.as_ref().map_or(-1, |e| e.caret as i64)
    }
}

/// Convert a host caret, saturating values that do not fit.
fn caret(caret_index: i64) -> isize {
    isize::try_from(caret_index).unwrap_or(if caret_index < 0 { isize::MIN } else { isize::MAX })
}

/// Resolve a host locale tag, falling back to the default on bad input.
fn locale_info(value: &str, tag: &str) -> LocaleInfo {
    DictationSettings {
        locale: tag.to_string(),
        ..DictationSettings::default()
    }
    .locale_info(value)
}

fn get_replace_phrase_data(
    value: String,
    caret_index: i64,
    delete_phrase: String,
) -> ReplacePhraseData {
    ReplacePhraseData(editing::get_replace_phrase_data(
        &value,
        caret(caret_index),
        &delete_phrase,
    ))
}

fn get_insert_before_index(value: String, caret_index: i64, before_phrase: String) -> i64 {
    editing::get_insert_before_index(&value, caret(caret_index), &before_phrase)
        .map_or(-1, |index| index as i64)
}

fn select_between(
    value: String,
    caret_index: i64,
    start_phrase: String,
    end_phrase: String,
) -> TextSelection {
    TextSelection(editing::select_between(
        &value,
        caret(caret_index),
        &start_phrase,
        &end_phrase,
    ))
}

fn nav_next_sent(value: String, caret_index: i64, locale: String) -> i64 {
    let locale = locale_info(&value, &locale);
    editing::nav_next_sent(&value, caret(caret_index), &locale) as i64
}

fn nav_prev_sent(value: String, caret_index: i64, locale: String) -> i64 {
    let locale = locale_info(&value, &locale);
    editing::nav_prev_sent(&value, caret(caret_index), &locale) as i64
}

fn smart_spacing(value: String, caret_index: i64, commit_text: String) -> String {
    editing::smart_spacing(&value, caret(caret_index), &commit_text)
}

fn smart_capitalization(
    value: String,
    caret_index: i64,
    commit_text: String,
    locale: String,
) -> String {
    let locale = locale_info(&value, &locale);
    editing::smart_capitalization(&value, caret(caret_index), &commit_text, &locale)
}

fn replace_phrase(
    value: String,
    caret_index: i64,
    delete_phrase: String,
    insert_phrase: String,
) -> EditOutcome {
    EditOutcome(editing::replace_phrase(
        &value,
        caret(caret_index),
        &delete_phrase,
        &insert_phrase,
    ))
}

fn delete_phrase(value: String, caret_index: i64, phrase: String) -> EditOutcome {
    EditOutcome(editing::delete_phrase(&value, caret(caret_index), &phrase))
}

fn insert_before(
    value: String,
    caret_index: i64,
    insert_phrase: String,
    before_phrase: String,
) -> EditOutcome {
    EditOutcome(editing::insert_before(
        &value,
        caret(caret_index),
        &insert_phrase,
        &before_phrase,
    ))
}

fn prepare_commit_text(
    value: String,
    caret_index: i64,
    commit_text: String,
    settings_json: String,
) -> String {
    let settings = DictationSettings::from_json(&settings_json).unwrap_or_else(|e| {
        tracing::warn!("prepare_commit_text: {}, using default settings", e);
        DictationSettings::default()
    });
    editing::prepare_commit_text(&value, caret(caret_index), &commit_text, &settings)
}

fn init_logging(verbose: bool) -> bool {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    host_logger::init_logging(level)
}
