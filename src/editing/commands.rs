// Edit commands - Apply phrase operations to a buffer
//
// The lookup functions only report positions; these helpers splice the
// buffer and report where the caret should land afterwards.

use serde::Serialize;

use crate::config::DictationSettings;

use super::phrase::{get_insert_before_index, get_replace_phrase_data};
use super::smart::{smart_capitalization, smart_spacing};

/// Buffer and caret after an edit has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub text: String,
    pub caret: usize,
}

/// Replace chars `start..end` of `chars` with `insert`.
fn splice(chars: &[char], start: usize, end: usize, insert: &str) -> String {
    chars[..start]
        .iter()
        .copied()
        .chain(insert.chars())
        .chain(chars[end..].iter().copied())
        .collect()
}

fn insert_at(value: &str, index: usize, phrase: &str) -> TextEdit {
    let chars: Vec<char> = value.chars().collect();
    let padded = smart_spacing(value, index as isize, phrase);

    TextEdit {
        text: splice(&chars, index, index, &padded),
        caret: index + padded.chars().count(),
    }
}

/// Delete the closest `phrase` before the caret, with one neighboring space.
pub fn delete_phrase(value: &str, caret: isize, phrase: &str) -> Option<TextEdit> {
    replace_phrase(value, caret, phrase, "")
}

/// Replace the closest `delete_phrase` before the caret with `insert_phrase`.
///
/// The caret lands after the inserted text, or where the deleted phrase was
/// when `insert_phrase` is empty.
pub fn replace_phrase(
    value: &str,
    caret: isize,
    delete_phrase: &str,
    insert_phrase: &str,
) -> Option<TextEdit> {
    let data = get_replace_phrase_data(value, caret, delete_phrase)?;
    let chars: Vec<char> = value.chars().collect();
    let remaining = splice(
        &chars,
        data.new_index,
        data.new_index + data.delete_length,
        "",
    );

    let insert_phrase = insert_phrase.trim();
    if insert_phrase.is_empty() {
        tracing::debug!("delete_phrase: removed {:?}", delete_phrase);
        return Some(TextEdit {
            text: remaining,
            caret: data.new_index,
        });
    }

    tracing::debug!(
        "replace_phrase: {:?} -> {:?}",
        delete_phrase,
        insert_phrase
    );
    Some(insert_at(&remaining, data.new_index, insert_phrase))
}

/// Insert `insert_phrase` right before the closest `before_phrase`.
pub fn insert_before(
    value: &str,
    caret: isize,
    insert_phrase: &str,
    before_phrase: &str,
) -> Option<TextEdit> {
    let index = get_insert_before_index(value, caret, before_phrase)?;
    let insert_phrase = insert_phrase.trim();
    if insert_phrase.is_empty() {
        return None;
    }

    Some(insert_at(value, index, insert_phrase))
}

/// Prepare recognized speech for insertion at the caret.
///
/// Capitalization runs first so that spacing sees the final text; each step
/// is skipped when disabled in `settings` or meaningless for the locale.
pub fn prepare_commit_text(
    value: &str,
    caret: isize,
    commit_text: &str,
    settings: &DictationSettings,
) -> String {
    let locale = settings.locale_info(value);
    let mut text = commit_text.to_string();

    if settings.smart_capitalization && locale.uses_letter_case() {
        text = smart_capitalization(value, caret, &text, &locale);
    }
    if settings.smart_spacing && locale.considers_spaces() {
        text = smart_spacing(value, caret, &text);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(text: &str, caret: usize) -> Option<TextEdit> {
        Some(TextEdit {
            text: text.to_string(),
            caret,
        })
    }

    #[test]
    fn test_delete_phrase() {
        let value = "The cow jumped over the moon";
        assert_eq!(
            delete_phrase(value, 28, "cow"),
            edit("The jumped over the moon", 3)
        );
        assert_eq!(
            delete_phrase(value, 28, "the moon"),
            edit("The cow jumped over", 19)
        );
        assert_eq!(
            delete_phrase(value, 28, "the"),
            edit("The cow jumped over moon", 19)
        );
        assert_eq!(delete_phrase(value, 28, "dog"), None);
    }

    #[test]
    fn test_delete_phrase_at_start() {
        assert_eq!(delete_phrase("This is a test", 14, "this"), edit("is a test", 0));
        assert_eq!(delete_phrase("test", 4, "test"), edit("", 0));
    }

    #[test]
    fn test_replace_phrase() {
        let value = "The cow jumped over the moon";
        assert_eq!(
            replace_phrase(value, 28, "cow", "dog"),
            edit("The dog jumped over the moon", 7)
        );
        assert_eq!(
            replace_phrase(value, 28, "moon", "fence"),
            edit("The cow jumped over the fence", 29)
        );
        assert_eq!(
            replace_phrase(value, 28, "the", "a"),
            edit("The cow jumped over a moon", 21)
        );
        assert_eq!(
            replace_phrase(value, 28, "The cow", "A dog"),
            edit("A dog jumped over the moon", 6)
        );
        assert_eq!(replace_phrase(value, 28, "cat", "dog"), None);
    }

    #[test]
    fn test_replace_phrase_empty_insert_deletes() {
        let value = "This is a test";
        assert_eq!(
            replace_phrase(value, 14, "a", "  "),
            delete_phrase(value, 14, "a")
        );
    }

    #[test]
    fn test_replace_phrase_before_punctuation() {
        assert_eq!(
            replace_phrase("This is a test.", 15, "test", "trial"),
            edit("This is a trial.", 15)
        );
    }

    #[test]
    fn test_insert_before() {
        assert_eq!(
            insert_before("This is a test", 14, "simple", "test"),
            edit("This is a simple test", 17)
        );
        assert_eq!(
            insert_before("This is a test", 14, "Well,", "this"),
            edit("Well, This is a test", 6)
        );
        assert_eq!(insert_before("This is a test", 14, "simple", "exam"), None);
        assert_eq!(insert_before("This is a test", 14, " ", "test"), None);
    }

    #[test]
    fn test_text_edit_json() {
        let edit = delete_phrase("This is a test", 14, "a").unwrap();
        assert_eq!(
            serde_json::to_string(&edit).unwrap(),
            r#"{"text":"This is test","caret":7}"#
        );
    }

    #[test]
    fn test_prepare_commit_text() {
        let settings = DictationSettings::default();
        assert_eq!(
            prepare_commit_text("Some text.", 10, "more text", &settings),
            " More text"
        );
        assert_eq!(
            prepare_commit_text("Some text", 9, "more text", &settings),
            " more text"
        );
        assert_eq!(prepare_commit_text("", 0, "hello", &settings), "Hello");
    }

    #[test]
    fn test_prepare_commit_text_respects_settings() {
        let settings = DictationSettings {
            smart_capitalization: false,
            ..DictationSettings::default()
        };
        assert_eq!(
            prepare_commit_text("Some text.", 10, "more", &settings),
            " more"
        );

        let settings = DictationSettings {
            smart_spacing: false,
            ..DictationSettings::default()
        };
        assert_eq!(
            prepare_commit_text("Some text.", 10, "more", &settings),
            "More"
        );
    }

    #[test]
    fn test_prepare_commit_text_japanese() {
        let settings = DictationSettings {
            locale: "ja-JP".to_string(),
            ..DictationSettings::default()
        };
        assert_eq!(
            prepare_commit_text("私はテニスが好きです。", 11, "バスケ", &settings),
            "バスケ"
        );
    }
}
