use memchr::{memchr_iter, memrchr};

use crate::{Error, Location};

/// Read position over an immutable input buffer.
///
/// `peek` yields the lookahead byte, or 0 once the input is exhausted; use
/// `is_eof` where an embedded NUL byte must be told apart from the end.
/// Line and column are 1-based, columns count bytes.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.position)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn advance(&mut self) {
        match self.input.as_bytes().get(self.position) {
            Some(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => return,
        }
        self.position += 1;
    }

    /// Skips `len` bytes. Callers only stop on ASCII bytes, which keeps the
    /// position on a char boundary.
    pub fn advance_by(&mut self, len: usize) {
        let end = (self.position + len).min(self.input.len());
        let run = &self.input.as_bytes()[self.position..end];
        match memrchr(b'\n', run) {
            Some(last) => {
                self.line += memchr_iter(b'\n', run).count();
                self.column = run.len() - last;
            }
            None => self.column += run.len(),
        }
        self.position = end;
    }

    /// Any byte at or below the space character counts as whitespace.
    pub fn skip_whitespace(&mut self) {
        while !self.is_eof() && self.peek() <= b' ' {
            self.advance();
        }
    }

    pub fn expect(&mut self, byte: u8, context: &str) -> Result<(), Error> {
        if !self.is_eof() && self.peek() == byte {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(context))
        }
    }

    pub fn rest_bytes(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.position..]
    }

    pub fn rest_str(&self, len: usize) -> &'a str {
        &self.input[self.position..self.position + len]
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }

    pub fn location(&self) -> Location {
        Location {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::parse(message, self.location())
    }

    /// Error naming what was expected and what was found instead.
    pub fn unexpected(&self, context: &str) -> Error {
        match self.input[self.position..].chars().next() {
            None => self.error(format!("{context}, found end of input")),
            Some(ch) if ch.is_control() => self.error(format!("{context}, found {ch:?}")),
            Some(ch) => self.error(format!("{context}, found `{ch}`")),
        }
    }
}

/// Line and column of a byte offset, for errors raised before a cursor exists.
pub(crate) fn location_at(bytes: &[u8], offset: usize) -> Location {
    let prefix = &bytes[..offset.min(bytes.len())];
    let line = 1 + memchr_iter(b'\n', prefix).count();
    let column = match memrchr(b'\n', prefix) {
        Some(last) => prefix.len() - last,
        None => prefix.len() + 1,
    };
    Location {
        offset,
        line,
        column,
    }
}
