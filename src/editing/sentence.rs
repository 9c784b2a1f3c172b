// Sentence navigation - "next sentence" / "previous sentence" caret moves
//
// A sentence ends right after its terminator run (terminators plus any closing
// quotes or brackets). Trailing whitespace belongs to the gap, not the sentence.

use crate::locale::{LocaleClass, LocaleInfo};

use super::text::{caret_or_start, is_closing_punctuation};

/// Terminators that need whitespace (or the end of the buffer) after them
fn is_spaced_terminator(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!' | ';')
}

/// Full-width terminators that end a sentence on their own
fn is_full_width_terminator(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？' | '．')
}

fn is_terminator(ch: char, class: LocaleClass) -> bool {
    match class {
        LocaleClass::Western => is_spaced_terminator(ch),
        LocaleClass::Cjk => is_spaced_terminator(ch) || is_full_width_terminator(ch),
    }
}

/// Offsets where sentences end, in ascending order.
pub(crate) fn sentence_ends(chars: &[char], class: LocaleClass) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i], class) {
            i += 1;
            continue;
        }

        // Swallow "?!", "..." and closing quotes/brackets after the terminator
        let mut full_width = false;
        let mut end = i;
        while end < chars.len()
            && (is_terminator(chars[end], class) || is_closing_punctuation(chars[end]))
        {
            full_width |= class == LocaleClass::Cjk && is_full_width_terminator(chars[end]);
            end += 1;
        }

        let at_gap = end == chars.len() || chars[end].is_whitespace();
        if full_width || at_gap {
            ends.push(end);
        }
        i = end;
    }

    ends
}

/// Offset of the next sentence end after the caret, or the end of the buffer.
pub fn nav_next_sent(value: &str, caret: isize, locale: &LocaleInfo) -> usize {
    let chars: Vec<char> = value.chars().collect();
    let caret = caret_or_start(caret, chars.len());
    if chars.is_empty() {
        return caret;
    }

    let target = sentence_ends(&chars, locale.class())
        .into_iter()
        .find(|&end| end > caret)
        .unwrap_or(chars.len());

    tracing::trace!("nav_next_sent: {} -> {} ({:?})", caret, target, locale.class());
    target
}

/// Offset of the previous sentence end before the caret, or 0.
///
/// A sentence end separated from the caret only by whitespace is skipped, so
/// repeated calls keep moving backwards.
pub fn nav_prev_sent(value: &str, caret: isize, locale: &LocaleInfo) -> usize {
    let chars: Vec<char> = value.chars().collect();
    let caret = caret_or_start(caret, chars.len());
    if chars.is_empty() {
        return caret;
    }

    let target = sentence_ends(&chars, locale.class())
        .into_iter()
        .rev()
        .find(|&end| end < caret && chars[end..caret].iter().any(|c| !c.is_whitespace()))
        .unwrap_or(0);

    tracing::trace!("nav_prev_sent: {} -> {} ({:?})", caret, target, locale.class());
    target
}
