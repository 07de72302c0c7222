//! Universal-newline line splitting

use std::iter::FusedIterator;

/// Whether `ch` ends a line.
///
/// Covers `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR. `\r\n` is
/// handled as one break by [`split_lines`].
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split off the first line of `text`.
///
/// Returns the line without its terminator and the number of bytes consumed,
/// terminator included. `None` once `text` is empty.
pub(crate) fn next_line(text: &str) -> Option<(&str, usize)> {
    if text.is_empty() {
        return None;
    }

    match text.char_indices().find(|(_, ch)| is_line_break(*ch)) {
        Some((index, ch)) => {
            let mut consumed = index + ch.len_utf8();
            if ch == '\r' && text[consumed..].starts_with('\n') {
                consumed += 1;
            }
            Some((&text[..index], consumed))
        }
        None => Some((text, text.len())),
    }
}

/// Iterator over the lines of a string, see [`split_lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (line, consumed) = next_line(self.rest)?;
        self.rest = &self.rest[consumed..];
        Some(line)
    }
}

impl FusedIterator for Lines<'_> {}

/// Split `text` on line boundaries.
///
/// Terminators are dropped, a trailing terminator does not produce an empty
/// final line, and empty text has no lines.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}
