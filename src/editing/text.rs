// Text helpers shared by the editing operations
//
// Offsets are char (Unicode scalar) positions, not byte positions.

/// Resolve a host caret against a buffer of `len` chars.
///
/// Carets past the end are clamped; negative carets have no position.
pub(crate) fn clamp_caret(caret: isize, len: usize) -> Option<usize> {
    usize::try_from(caret).ok().map(|c| c.min(len))
}

/// Like `clamp_caret`, but a negative caret is pinned to the start.
pub(crate) fn caret_or_start(caret: isize, len: usize) -> usize {
    clamp_caret(caret, len).unwrap_or(0)
}

#[inline]
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Kana and ideographs, written without spaces between words.
#[inline]
pub(crate) fn is_unspaced_script(ch: char) -> bool {
    matches!(
        ch,
        '\u{3040}'..='\u{30FF}' // hiragana, katakana
            | '\u{31F0}'..='\u{31FF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF66}'..='\u{FF9F}'
            | '\u{20000}'..='\u{2FA1F}'
    )
}

/// Whether `a` followed by `b` reads as one word.
#[inline]
pub(crate) fn joins_word(a: char, b: char) -> bool {
    is_word_char(a) && is_word_char(b) && !is_unspaced_script(a) && !is_unspaced_script(b)
}

/// Case-insensitive char comparison; any whitespace matches any whitespace.
#[inline]
pub(crate) fn chars_match(text: char, phrase: char) -> bool {
    text == phrase
        || (text.is_whitespace() && phrase.is_whitespace())
        || text.to_lowercase().eq(phrase.to_lowercase())
}

/// Punctuation that attaches to the word before it (no space in between).
#[inline]
pub(crate) fn is_attaching_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | '!' | '?' | ';' | ':' | ')' | ']' | '}' | '%' | '…'
            | '\u{201D}' // ”
            | '\u{2019}' // ’
            | '。' | '、' | '！' | '？' | '，' | '）' | '」' | '』'
    )
}

/// Brackets and quotes that open a span (no space after them).
#[inline]
pub(crate) fn is_opening_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '(' | '[' | '{' | '¿' | '¡'
            | '\u{201C}' // “
            | '\u{2018}' // ‘
            | '（' | '「' | '『'
    )
}

/// Quotes and brackets that may close a sentence after its terminator.
#[inline]
pub(crate) fn is_closing_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}' | '）' | '」' | '』'
    )
}

#[inline]
pub(crate) fn is_straight_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_caret() {
        assert_eq!(clamp_caret(3, 10), Some(3));
        assert_eq!(clamp_caret(10, 10), Some(10));
        assert_eq!(clamp_caret(500, 10), Some(10));
        assert_eq!(clamp_caret(-1, 10), None);
        assert_eq!(caret_or_start(-7, 10), 0);
    }

    #[test]
    fn test_chars_match() {
        assert!(chars_match('A', 'a'));
        assert!(chars_match('é', 'É'));
        assert!(chars_match('\n', ' '));
        assert!(!chars_match('a', 'b'));
        assert!(!chars_match('.', ','));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('好'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char(' '));
    }

    #[test]
    fn test_joins_word() {
        assert!(joins_word('a', 'b'));
        assert!(joins_word('x', '9'));
        assert!(!joins_word('a', '-'));
        assert!(!joins_word('は', 'テ'));
        assert!(!joins_word('好', 'a'));
        assert!(is_unspaced_script('ス'));
        assert!(!is_unspaced_script('é'));
    }
}
