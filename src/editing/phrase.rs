// Phrase lookup - Locate spoken phrases to the left of the caret
//
// Backs the "delete <phrase>", "replace <phrase> with ...", "insert ... before
// <phrase>" and "select from <phrase> to <phrase>" commands. Every search runs
// right-to-left from the caret so the closest occurrence wins.

use serde::Serialize;

use super::text::{chars_match, clamp_caret, joins_word};

/// Where a phrase deletion starts and how many chars it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhraseDeletion {
    pub new_index: usize,
    pub delete_length: usize,
}

/// A char range in the text buffer, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhraseMatch {
    start: usize,
    end: usize,
}

fn phrase_chars(phrase: &str) -> Vec<char> {
    phrase.trim().chars().collect()
}

/// Find the right-most whole-word occurrence of `phrase` that ends at or before `limit`.
///
/// A match may not start or end in the middle of a word. Neighbors are read
/// from the whole buffer, so a match cannot end inside a word that continues
/// past `limit`. Kana and ideographs have no word boundaries to respect.
fn find_last_phrase(chars: &[char], limit: usize, phrase: &[char]) -> Option<PhraseMatch> {
    let (&first, &last) = (phrase.first()?, phrase.last()?);
    let limit = limit.min(chars.len());
    if phrase.len() > limit {
        return None;
    }

    (0..=limit - phrase.len())
        .rev()
        .map(|start| PhraseMatch {
            start,
            end: start + phrase.len(),
        })
        .find(|m| {
            let starts_mid_word = m.start > 0 && joins_word(chars[m.start - 1], first);
            let ends_mid_word = m.end < chars.len() && joins_word(last, chars[m.end]);

            !starts_mid_word
                && !ends_mid_word
                && chars[m.start..m.end]
                    .iter()
                    .zip(phrase)
                    .all(|(&t, &p)| chars_match(t, p))
        })
}

/// Locate the closest `delete_phrase` before the caret and the range to delete.
///
/// One space next to the phrase is deleted with it so that no double space is
/// left behind: the space before the phrase when there is one, otherwise the
/// space after it.
///
/// Returns `None` when the buffer is empty, the caret is negative, or the
/// phrase does not occur (as whole words) entirely before the caret.
pub fn get_replace_phrase_data(
    value: &str,
    caret: isize,
    delete_phrase: &str,
) -> Option<PhraseDeletion> {
    let chars: Vec<char> = value.chars().collect();
    let caret = clamp_caret(caret, chars.len())?;
    let phrase = phrase_chars(delete_phrase);
    let found = find_last_phrase(&chars, caret, &phrase)?;

    let deletion = if found.start > 0 && chars[found.start - 1] == ' ' {
        PhraseDeletion {
            new_index: found.start - 1,
            delete_length: phrase.len() + 1,
        }
    } else if chars.get(found.end) == Some(&' ') {
        PhraseDeletion {
            new_index: found.start,
            delete_length: phrase.len() + 1,
        }
    } else {
        PhraseDeletion {
            new_index: found.start,
            delete_length: phrase.len(),
        }
    };

    tracing::debug!(
        "get_replace_phrase_data: {:?} at {} -> {:?}",
        delete_phrase,
        found.start,
        deletion
    );
    Some(deletion)
}

/// Start offset of the closest `before_phrase` before the caret.
pub fn get_insert_before_index(value: &str, caret: isize, before_phrase: &str) -> Option<usize> {
    let chars: Vec<char> = value.chars().collect();
    let caret = clamp_caret(caret, chars.len())?;
    find_last_phrase(&chars, caret, &phrase_chars(before_phrase)).map(|m| m.start)
}

/// Select from the start of `start_phrase` to the end of `end_phrase`.
///
/// Both phrases are matched independently, closest to the caret. Returns
/// `None` when the closest `start_phrase` begins after the closest
/// `end_phrase`. Identical phrases select the phrase itself.
pub fn select_between(
    value: &str,
    caret: isize,
    start_phrase: &str,
    end_phrase: &str,
) -> Option<SelectionRange> {
    let chars: Vec<char> = value.chars().collect();
    let caret = clamp_caret(caret, chars.len())?;
    let start_phrase = phrase_chars(start_phrase);
    let end_phrase = phrase_chars(end_phrase);

    let start = find_last_phrase(&chars, caret, &start_phrase)?;
    let end = find_last_phrase(&chars, caret, &end_phrase)?;
    if start.start > end.start {
        tracing::debug!("select_between: start at {} follows end at {}", start.start, end.start);
        return None;
    }

    let range = SelectionRange {
        start: start.start,
        end: end.end.max(start.end),
    };
    tracing::debug!("select_between: {:?}", range);
    Some(range)
}
