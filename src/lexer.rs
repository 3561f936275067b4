//! Hand-rolled pull-style lexer for LP source text (spec §4.1).
//!
//! Scans characters directly off a line-oriented [`ByteSource`]; no
//! regex-automaton or parser-generator is involved, since the grammar is
//! deliberately staged as raw tokens → classified tokens → section-driven
//! recursive descent (spec §9 "Polymorphic tokens").

use crate::error::{LpError, LpResult, Position};
use crate::source::ByteSource;
use crate::token::{RawToken, Spanned};

/// A byte that terminates an identifier-like run (spec §4.1: "the maximal
/// run of bytes up to the next delimiter": whitespace or `\:+<>^=/-*`).
#[inline]
fn is_ident_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\\' | ':' | '+' | '<' | '>' | '^' | '=' | '/' | '-' | '*')
}

/// Scans a line-oriented byte source into a flat sequence of [`RawToken`]s.
pub struct Lexer<S> {
    source: S,
    line: String,
    idx: usize,
    line_no: usize,
    started: bool,
    eof: bool,
}

impl<S: ByteSource> Lexer<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source, line: String::new(), idx: 0, line_no: 0, started: false, eof: false }
    }

    fn position(&self) -> Position {
        Position { line: self.line_no.max(1), column: self.idx }
    }

    /// Produce the next raw token, or a stable `FILE_END` once the source is
    /// exhausted.
    ///
    /// # Errors
    /// Returns [`LpError::Lex`] on an unrecognised leading byte with no
    /// viable number or identifier, or an I/O error from the byte source.
    pub fn next_token(&mut self) -> LpResult<Spanned<RawToken>> {
        loop {
            if self.idx >= self.line.len() {
                if self.eof {
                    return Ok((self.position(), RawToken::FileEnd));
                }
                let emit_line_end = self.started;
                match self.source.next_line()? {
                    Some(line) => {
                        self.line_no += 1;
                        self.line = line.strip_suffix('\r').map(str::to_owned).unwrap_or(line);
                        self.idx = 0;
                        self.started = true;
                        if emit_line_end {
                            return Ok((self.position(), RawToken::LineEnd));
                        }
                        continue;
                    }
                    None => {
                        self.eof = true;
                        if emit_line_end {
                            return Ok((self.position(), RawToken::LineEnd));
                        }
                        return Ok((self.position(), RawToken::FileEnd));
                    }
                }
            }

            let start = self.position();
            let rest = &self.line[self.idx..];
            let c = rest.chars().next().expect("idx < line.len()");

            macro_rules! single {
                ($tok:expr) => {{
                    self.idx += c.len_utf8();
                    return Ok((start, $tok));
                }};
            }

            match c {
                '\\' => {
                    self.idx = self.line.len();
                    continue;
                }
                '[' => single!(RawToken::BracketOpen),
                ']' => single!(RawToken::BracketClose),
                '<' => single!(RawToken::Less),
                '>' => single!(RawToken::Greater),
                '=' => single!(RawToken::Equal),
                ':' => single!(RawToken::Colon),
                '+' => single!(RawToken::Plus),
                '-' => single!(RawToken::Minus),
                '*' => single!(RawToken::Asterisk),
                '/' => single!(RawToken::Slash),
                '^' => single!(RawToken::Caret),
                ' ' | '\t' => {
                    self.idx += c.len_utf8();
                    continue;
                }
                ';' | '\0' => {
                    self.idx = self.line.len();
                    continue;
                }
                _ => {
                    if let Some((value, consumed)) = parse_number(rest) {
                        self.idx += consumed;
                        return Ok((start, RawToken::Number(value)));
                    }
                    if let Some(consumed) = identifier_len(rest) {
                        let text = rest[..consumed].to_owned();
                        self.idx += consumed;
                        return Ok((start, RawToken::String(text)));
                    }
                    return Err(LpError::lex(start, c));
                }
            }
        }
    }

    /// Run the lexer to completion, collecting every token up to and
    /// including the trailing `FILE_END`.
    ///
    /// # Errors
    /// Propagates the first [`LpError::Lex`] or I/O error encountered.
    pub fn tokenize(mut self) -> LpResult<Vec<Spanned<RawToken>>> {
        let mut out = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_end = matches!(tok.1, RawToken::FileEnd);
            out.push(tok);
            if is_end {
                return Ok(out);
            }
        }
    }
}

/// Attempts to parse a floating-point literal (no leading sign — `+`/`-`
/// are separate tokens) from the start of `s`. Returns the value and the
/// number of bytes consumed, or `None` if no digit was found.
fn parse_number(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut saw_digit = i > 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        saw_digit = saw_digit || i > frac_start;
    }
    if !saw_digit {
        return None;
    }
    let mantissa_end = i;
    let mut end = mantissa_end;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digit_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digit_start {
            end = j;
        }
    }
    s[..end].parse::<f64>().ok().map(|v| (v, end))
}

/// Consumes the maximal run of bytes up to the next delimiter.
fn identifier_len(s: &str) -> Option<usize> {
    let mut end = 0;
    for c in s.chars() {
        if is_ident_delimiter(c) {
            break;
        }
        end += c.len_utf8();
    }
    (end > 0).then_some(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StringSource;

    fn tokens(input: &str) -> Vec<RawToken> {
        Lexer::new(StringSource::new(input)).tokenize().unwrap().into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn punctuation() {
        assert_eq!(tokens("[]<>=:+-*/^"), vec![
            RawToken::BracketOpen,
            RawToken::BracketClose,
            RawToken::Less,
            RawToken::Greater,
            RawToken::Equal,
            RawToken::Colon,
            RawToken::Plus,
            RawToken::Minus,
            RawToken::Asterisk,
            RawToken::Slash,
            RawToken::Caret,
            RawToken::FileEnd,
        ]);
    }

    #[test]
    fn numbers() {
        assert_eq!(tokens("42"), vec![RawToken::Number(42.0), RawToken::FileEnd]);
        assert_eq!(tokens("3.25"), vec![RawToken::Number(3.25), RawToken::FileEnd]);
        assert_eq!(tokens(".5"), vec![RawToken::Number(0.5), RawToken::FileEnd]);
        assert_eq!(tokens("123."), vec![RawToken::Number(123.0), RawToken::FileEnd]);
        assert_eq!(tokens("1.5e-3"), vec![RawToken::Number(0.0015), RawToken::FileEnd]);
    }

    #[test]
    fn identifiers() {
        assert_eq!(tokens("x1"), vec![RawToken::String("x1".to_owned()), RawToken::FileEnd]);
        assert_eq!(tokens("obj"), vec![RawToken::String("obj".to_owned()), RawToken::FileEnd]);
    }

    #[test]
    fn comment_discarded_through_line_end() {
        assert_eq!(tokens("x1 \\ comment\ny1"), vec![
            RawToken::String("x1".to_owned()),
            RawToken::LineEnd,
            RawToken::String("y1".to_owned()),
            RawToken::FileEnd,
        ]);
    }

    #[test]
    fn constraint_line() {
        assert_eq!(tokens("c1: 2 x1 + 3 x2 <= 10"), vec![
            RawToken::String("c1".to_owned()),
            RawToken::Colon,
            RawToken::Number(2.0),
            RawToken::String("x1".to_owned()),
            RawToken::Plus,
            RawToken::Number(3.0),
            RawToken::String("x2".to_owned()),
            RawToken::Less,
            RawToken::Equal,
            RawToken::Number(10.0),
            RawToken::FileEnd,
        ]);
    }

    #[test]
    fn unrecognised_byte_errors() {
        // A vertical tab is whitespace under `is_ident_delimiter` (so it can't
        // extend an identifier run) but isn't one of the explicitly dispatched
        // single-char tokens (only ' ' and '\t' are), so it falls through to
        // the lex-error path with neither a number nor an identifier to emit.
        let result = Lexer::new(StringSource::new("x1 \u{b} y1")).tokenize();
        assert!(matches!(result, Err(LpError::Lex { .. })));
    }

    #[test]
    fn file_end_is_stable() {
        let mut lexer = Lexer::new(StringSource::new("x1"));
        let _ = lexer.next_token().unwrap();
        let a = lexer.next_token().unwrap();
        let b = lexer.next_token().unwrap();
        assert_eq!(a.1, RawToken::FileEnd);
        assert_eq!(b.1, RawToken::FileEnd);
    }
}
