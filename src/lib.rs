//! An owned JSON value tree and the small recursive-descent parser that
//! builds it.
//!
//! ```
//! let mut doc = jsontree::parse(r#"{"name": "tree", "sizes": [1, 2]}"#).unwrap();
//! assert_eq!(doc.at("name").unwrap().string().unwrap(), "tree");
//!
//! *doc.at_mut("sizes").unwrap().at_mut(3).unwrap() = 4.into();
//! assert_eq!(doc.to_string(), r#"{"name":"tree","sizes":[1,2,null,4]}"#);
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod num;
pub mod options;
pub mod text;
pub mod timing;
pub mod value;

use std::io::{Read, Write};

pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{ControlChars, Indent, ParseOptions, WriteOptions};
pub use crate::timing::Timings;
pub use crate::value::{Object, Tag, Value, ValueIndex};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    decode::from_str(input, options)
}

pub fn parse_slice(input: &[u8]) -> Result<Value> {
    parse_slice_with_options(input, &ParseOptions::default())
}

pub fn parse_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    decode::from_slice(input, options)
}

pub fn parse_reader<R: Read>(reader: R) -> Result<Value> {
    parse_reader_with_options(reader, &ParseOptions::default())
}

pub fn parse_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Value> {
    decode::from_reader(reader, options)
}

#[cfg(feature = "parallel")]
pub use crate::decode::parse_many;

pub fn validate(input: &str) -> Result<()> {
    validate_with_options(input, &ParseOptions::default())
}

pub fn validate_with_options(input: &str, options: &ParseOptions) -> Result<()> {
    decode::validate_str(input, options)
}

pub fn to_string(value: &Value) -> String {
    encode::to_string_with_options(value, &WriteOptions::compact())
}

pub fn to_string_pretty(value: &Value) -> String {
    encode::to_string_with_options(value, &WriteOptions::pretty())
}

pub fn to_string_with_options(value: &Value, options: &WriteOptions) -> String {
    encode::to_string_with_options(value, options)
}

pub fn to_vec(value: &Value) -> Vec<u8> {
    encode::to_vec_with_options(value, &WriteOptions::compact())
}

pub fn to_writer<W: Write>(writer: W, value: &Value) -> Result<()> {
    to_writer_with_options(writer, value, &WriteOptions::compact())
}

pub fn to_writer_with_options<W: Write>(
    writer: W,
    value: &Value,
    options: &WriteOptions,
) -> Result<()> {
    encode::to_writer(writer, value, options)
}
