// Smart spacing and capitalization for dictated text
//
// Both functions return the text to insert at the caret; the buffer itself is
// never modified.

use crate::locale::{LocaleClass, LocaleInfo};

use super::text::{
    caret_or_start, is_attaching_punctuation, is_closing_punctuation, is_opening_punctuation,
    is_straight_quote,
};

/// Whether the char at `idx` opens a span (bracket, or a quote starting a word).
fn opens_span(chars: &[char], idx: usize) -> bool {
    let ch = chars[idx];
    is_opening_punctuation(ch)
        || (is_straight_quote(ch) && (idx == 0 || chars[idx - 1].is_whitespace()))
}

/// Pad `commit_text` with the spaces needed to insert it at the caret.
///
/// A leading space is added after a word or punctuation, but not after
/// whitespace or an opening bracket/quote, and not before text that starts
/// with attaching punctuation such as `!` or `,`. A trailing space is added
/// when the caret sits right before a word or an opening quote.
pub fn smart_spacing(value: &str, caret: isize, commit_text: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let (Some(first), Some(last)) = (commit_text.chars().next(), commit_text.chars().last()) else {
        return String::new();
    };
    if chars.is_empty() {
        return commit_text.to_string();
    }

    let caret = caret_or_start(caret, chars.len());
    let left = caret.checked_sub(1).map(|idx| (idx, chars[idx]));
    let right = chars.get(caret).map(|&ch| (caret, ch));

    let leading = left.is_some_and(|(idx, ch)| {
        !ch.is_whitespace()
            && !opens_span(&chars, idx)
            && !first.is_whitespace()
            && !is_attaching_punctuation(first)
    });
    let trailing = right.is_some_and(|(idx, ch)| {
        !ch.is_whitespace()
            && !is_attaching_punctuation(ch)
            && (!is_straight_quote(ch) || opens_span(&chars, idx))
            && !last.is_whitespace()
            && !is_opening_punctuation(last)
    });

    let mut result = String::with_capacity(commit_text.len() + 2);
    if leading {
        result.push(' ');
    }
    result.push_str(commit_text);
    if trailing {
        result.push(' ');
    }

    tracing::trace!("smart_spacing: {:?} -> {:?}", commit_text, result);
    result
}

fn ends_sentence(ch: char, class: LocaleClass) -> bool {
    match class {
        LocaleClass::Western => matches!(ch, '.' | '?' | '!'),
        LocaleClass::Cjk => matches!(ch, '.' | '?' | '!' | '。' | '！' | '？'),
    }
}

/// Capitalize `commit_text` when it starts a new sentence.
///
/// The text before the caret (ignoring trailing whitespace and closing
/// quotes) must be empty or end with sentence-ending punctuation.
pub fn smart_capitalization(
    value: &str,
    caret: isize,
    commit_text: &str,
    locale: &LocaleInfo,
) -> String {
    let chars: Vec<char> = value.chars().collect();
    let caret = caret_or_start(caret, chars.len());

    let before = &chars[..caret];
    let before = match before.iter().rposition(|c| !c.is_whitespace()) {
        Some(pos) => &before[..=pos],
        None => &before[..0],
    };

    let starts_sentence = match before.iter().rposition(|&c| !is_closing_punctuation(c)) {
        Some(pos) => ends_sentence(before[pos], locale.class()),
        None => true,
    };

    if starts_sentence {
        locale.capitalize_first(commit_text)
    } else {
        commit_text.to_string()
    }
}
