use std::io::{self, BufRead};

use tracing::trace;

/// Line and token reader over a single buffered stream.
///
/// Input is pulled one line at a time and only when the buffered line has
/// nothing left to hand out, so a caller can print a prompt, block on the
/// next read, and print the following prompt without reading ahead.
pub struct Scanner<R> {
    reader: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Returns the rest of the current line, or the next line if nothing is
    /// buffered, without its terminator. `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.cursor >= self.line.len() && !self.fill()? {
            return Ok(None);
        }
        let rest = strip_terminator(&self.line[self.cursor..]).to_string();
        self.cursor = self.line.len();
        Ok(Some(rest))
    }

    /// Returns the next whitespace-delimited token, reading as many lines
    /// as needed to find one. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.cursor..];
            if let Some(start) = rest.find(|c: char| !is_delimiter(c)) {
                let tail = &rest[start..];
                let len = tail.find(is_delimiter).unwrap_or(tail.len());
                let token = tail[..len].to_string();
                self.cursor += start + len;
                return Ok(Some(token));
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Pulls the next raw line. Bytes that are not UTF-8 become U+FFFD
    /// rather than failing the read.
    fn fill(&mut self) -> io::Result<bool> {
        let mut raw = Vec::new();
        let read = self.reader.read_until(b'\n', &mut raw)?;
        trace!(bytes = read, "read input line");
        self.line = String::from_utf8_lossy(&raw).into_owned();
        self.cursor = 0;
        Ok(read > 0)
    }
}

/// Token separators: Unicode whitespace minus the no-break spaces and NEL,
/// plus the ASCII information separators U+001C..=U+001F.
fn is_delimiter(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}

fn strip_terminator(s: &str) -> &str {
    match s.strip_suffix('\n') {
        Some(s) => s.strip_suffix('\r').unwrap_or(s),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner<Cursor<Vec<u8>>> {
        Scanner::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_line_keeps_inner_spaces() {
        let mut sc = scanner("  Jane   Doe \nrest\n");
        assert_eq!(sc.next_line().unwrap().as_deref(), Some("  Jane   Doe "));
        assert_eq!(sc.next_line().unwrap().as_deref(), Some("rest"));
        assert_eq!(sc.next_line().unwrap(), None);
    }

    #[test]
    fn test_line_strips_crlf() {
        let mut sc = scanner("Jane Doe\r\n");
        assert_eq!(sc.next_line().unwrap().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_line_without_terminator_at_eof() {
        let mut sc = scanner("last");
        assert_eq!(sc.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(sc.next_line().unwrap(), None);
    }

    #[test]
    fn test_tokens_span_lines_and_blank_lines() {
        let mut sc = scanner("29 \n\n\t55000.50\n   True");
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("29"));
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("55000.50"));
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("True"));
        assert_eq!(sc.next_token().unwrap(), None);
    }

    #[test]
    fn test_line_after_token_returns_remainder() {
        let mut sc = scanner("42 tail end\nnext\n");
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("42"));
        assert_eq!(sc.next_line().unwrap().as_deref(), Some(" tail end"));
        assert_eq!(sc.next_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_invalid_utf8_line_is_replaced() {
        let mut sc = Scanner::new(Cursor::new(b"Jos\xe9 Diaz\n29\n".to_vec()));
        assert_eq!(sc.next_line().unwrap().as_deref(), Some("Jos\u{fffd} Diaz"));
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("29"));
    }

    #[test]
    fn test_no_break_spaces_stay_inside_token() {
        let mut sc = scanner("29\u{a0}5 7\u{2007}1\u{202f}2 8\u{85}9\n");
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("29\u{a0}5"));
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("7\u{2007}1\u{202f}2"));
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("8\u{85}9"));
        assert_eq!(sc.next_token().unwrap(), None);
    }

    #[test]
    fn test_other_unicode_spaces_split_tokens() {
        let mut sc = scanner("a\u{3000}b\u{2003}c\u{1f}d\n");
        let tokens: Vec<String> = std::iter::from_fn(|| sc.next_token().unwrap()).collect();
        assert_eq!(tokens, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_does_not_read_ahead() {
        let mut sc = scanner("a b\nc\n");
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(sc.next_token().unwrap().as_deref(), Some("b"));
        // Only the first line has been pulled from the reader.
        assert_eq!(sc.into_inner().position(), 4);
    }
}
