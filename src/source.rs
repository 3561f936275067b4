//! Byte source abstraction (spec §6).
//!
//! The core treats a plain file, an in-memory buffer, or any
//! externally-decompressed stream identically: it only needs line-by-line
//! `next_line` with an EOF signal. Decompression (e.g. gzip) stays entirely
//! outside the core — callers wrap their own [`std::io::Read`] and hand it
//! to [`ByteSource::from_reader`].

use std::io::BufRead;

/// Pull-style line source. `next_line` returns `Ok(None)` at EOF, which the
/// lexer turns into a single, stable `FILE_END` token.
pub trait ByteSource {
    /// Read the next line, without its trailing `\n`. A trailing `\r` (as
    /// produced by CRLF line endings) is stripped by the caller, not here.
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

/// A [`ByteSource`] over any buffered reader.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ByteSource for ReaderSource<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// A [`ByteSource`] over an in-memory string, split on newlines.
pub struct StringSource<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> StringSource<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { lines: input.lines() }
    }
}

impl ByteSource for StringSource<'_> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.lines.next().map(str::to_owned))
    }
}

/// Open a file as a [`ByteSource`].
///
/// # Errors
/// Returns an error if the file cannot be opened.
pub fn file_source(path: &std::path::Path) -> std::io::Result<ReaderSource<std::io::BufReader<std::fs::File>>> {
    let file = std::fs::File::open(path)?;
    Ok(ReaderSource::new(std::io::BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_source_yields_lines_then_none() {
        let mut src = StringSource::new("a\nb");
        assert_eq!(src.next_line().unwrap(), Some("a".to_owned()));
        assert_eq!(src.next_line().unwrap(), Some("b".to_owned()));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn reader_source_strips_newline_and_cr() {
        let mut src = ReaderSource::new(std::io::Cursor::new(b"a\r\nb\n".to_vec()));
        assert_eq!(src.next_line().unwrap(), Some("a\r".to_owned()));
        assert_eq!(src.next_line().unwrap(), Some("b".to_owned()));
        assert_eq!(src.next_line().unwrap(), None);
    }
}
