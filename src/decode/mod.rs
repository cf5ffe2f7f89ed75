pub(crate) mod cursor;
pub(crate) mod parser;

use std::io::Read;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Error, ParseOptions, Result, Value};

use self::cursor::location_at;
use self::parser::Parser;

pub fn from_str(input: &str, options: &ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(input, options);
    match parser.parse_document() {
        Ok(value) => {
            tracing::trace!(bytes = input.len(), tag = %value.tag(), "parsed document");
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(
                offset = err.location.map(|location| location.offset),
                "parse failed: {err}"
            );
            Err(err)
        }
    }
}

pub fn from_slice(input: &[u8], options: &ParseOptions) -> Result<Value> {
    let text = std::str::from_utf8(input).map_err(|err| {
        let location = location_at(input, err.valid_up_to());
        Error::parse(format!("invalid utf-8: {err}"), location)
    })?;
    from_str(text, options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Value> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io(format!("read failed: {err}")))?;
    from_slice(&buf, options)
}

pub fn validate_str(input: &str, options: &ParseOptions) -> Result<()> {
    from_str(input, options).map(|_| ())
}

/// Parses independent buffers on the rayon pool. Each result corresponds to
/// the input at the same position.
#[cfg(feature = "parallel")]
pub fn parse_many(inputs: &[&str], options: &ParseOptions) -> Vec<Result<Value>> {
    inputs
        .par_iter()
        .map(|input| from_str(input, options))
        .collect()
}
