use memchr::memchr2;

use crate::constants::unescape;
use crate::{ControlChars, Object, ParseOptions, Result, Value};

use super::cursor::Cursor;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    control_chars: ControlChars,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            control_chars: options.control_chars,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Parses exactly one value; anything but whitespace after it fails the
    /// whole document.
    pub fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(self.cursor.unexpected("unexpected trailing content"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return Err(self.cursor.unexpected("expected value"));
        }
        match self.cursor.peek() {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string().map(Value::String),
            b'-' | b'0'..=b'9' => self.parse_number(),
            b't' => self.parse_literal("true", Value::Bool(true)),
            b'f' => self.parse_literal("false", Value::Bool(false)),
            b'n' => self.parse_literal("null", Value::Null),
            _ => Err(self.cursor.unexpected("expected value")),
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.cursor.error(format!(
                "nesting deeper than {} levels",
                self.max_depth
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.cursor.expect(b'{', "expected `{`")?;
        let mut map = Object::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == b'}' {
            self.cursor.advance();
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() || self.cursor.peek() != b'"' {
                return Err(self.cursor.unexpected("expected string key"));
            }
            let key = self.parse_string()?;
            self.cursor.skip_whitespace();
            self.cursor.expect(b':', "expected `:` after object key")?;
            let value = self.parse_value()?;
            // A repeated key is still parsed, but the first value stays.
            map.entry(key).or_insert(value);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                b',' => self.cursor.advance(),
                b'}' => {
                    self.cursor.advance();
                    break;
                }
                _ => return Err(self.cursor.unexpected("expected `,` or `}` in object")),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.cursor.expect(b'[', "expected `[`")?;
        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == b']' {
            self.cursor.advance();
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                b',' => self.cursor.advance(),
                b']' => {
                    self.cursor.advance();
                    break;
                }
                _ => return Err(self.cursor.unexpected("expected `,` or `]` in array")),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_string(&mut self) -> Result<String> {
        self.cursor.expect(b'"', "expected `\"`")?;
        let mut out = String::new();

        loop {
            let rest = self.cursor.rest_bytes();
            let Some(stop) = memchr2(b'"', b'\\', rest) else {
                self.cursor.advance_by(rest.len());
                return Err(self.cursor.error("unterminated string"));
            };

            let run = self.cursor.rest_str(stop);
            if self.control_chars == ControlChars::Reject {
                if let Some(bad) = run.bytes().position(|byte| byte < 0x20) {
                    self.cursor.advance_by(bad);
                    return Err(self.cursor.unexpected("control character in string"));
                }
            }
            out.push_str(run);
            self.cursor.advance_by(stop);

            if self.cursor.peek() == b'"' {
                self.cursor.advance();
                return Ok(out);
            }

            // Backslash: exactly one escape letter follows.
            self.cursor.advance();
            if self.cursor.is_eof() {
                return Err(self.cursor.error("unterminated string"));
            }
            let letter = self.cursor.peek();
            match unescape(letter) {
                Some(byte) => {
                    out.push(char::from(byte));
                    self.cursor.advance();
                }
                None if letter == b'u' => {
                    return Err(self.cursor.error("unicode escapes are not supported"));
                }
                None => return Err(self.cursor.unexpected("invalid escape")),
            }
        }
    }

    /// `-? digits (. digits)? ([eE] [+-]? digits)?`, converted with the
    /// locale-independent `f64` parser.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.cursor.position();
        if self.cursor.peek() == b'-' {
            self.cursor.advance();
        }
        self.parse_digits("expected digit")?;

        if self.cursor.peek() == b'.' {
            self.cursor.advance();
            self.parse_digits("expected digit after decimal point")?;
        }

        if matches!(self.cursor.peek(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.peek(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.parse_digits("expected exponent digit")?;
        }

        let text = self.cursor.slice_from(start);
        text.parse::<f64>()
            .map(Value::Number)
            .map_err(|err| self.cursor.error(format!("invalid number `{text}`: {err}")))
    }

    fn parse_digits(&mut self, context: &str) -> Result<()> {
        let start = self.cursor.position();
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.position() == start {
            return Err(self.cursor.unexpected(context));
        }
        Ok(())
    }

    fn parse_literal(&mut self, word: &'static str, value: Value) -> Result<Value> {
        for expected in word.bytes() {
            if self.cursor.is_eof() || self.cursor.peek() != expected {
                return Err(self
                    .cursor
                    .unexpected(&format!("invalid literal, expected `{word}`")));
            }
            self.cursor.advance();
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(input: &str) -> Result<Value> {
        let options = ParseOptions::default();
        Parser::new(input, &options).parse_document()
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("-0", -0.0)]
    #[case("42", 42.0)]
    #[case("-17", -17.0)]
    #[case("3.25", 3.25)]
    #[case("1e3", 1000.0)]
    #[case("1E+2", 100.0)]
    #[case("25e-1", 2.5)]
    #[case("1e10", 1e10)]
    #[case("-6.5e12", -6.5e12)]
    #[case("007", 7.0)]
    fn test_numbers(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse(input).unwrap(), Value::Number(expected));
    }

    #[rstest]
    #[case("-")]
    #[case("1.")]
    #[case("1.e5")]
    #[case("1e")]
    #[case("1e+")]
    #[case(".5")]
    #[case("+1")]
    #[case("--1")]
    fn test_malformed_numbers(#[case] input: &str) {
        assert!(parse(input).unwrap_err().is_parse(), "{input}");
    }

    #[rstest]
    fn test_overflowing_number_becomes_infinite() {
        assert_eq!(parse("1e400").unwrap(), Value::Number(f64::INFINITY));
        assert_eq!(parse("-1e400").unwrap(), Value::Number(f64::NEG_INFINITY));
    }

    #[rstest]
    #[case(r#""""#, "")]
    #[case(r#""abc""#, "abc")]
    #[case(r#""a\"b""#, "a\"b")]
    #[case(r#""\\\b\f\n\r\t""#, "\\\u{8}\u{c}\n\r\t")]
    #[case(r#""ünï ✓""#, "ünï ✓")]
    fn test_strings(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input).unwrap(), Value::String(expected.to_string()));
    }

    #[rstest]
    #[case(r#""abc"#, "unterminated string")]
    #[case(r#""abc\"#, "unterminated string")]
    #[case(r#""\u0041""#, "unicode escapes are not supported")]
    #[case(r#""\/""#, "invalid escape")]
    #[case(r#""\x""#, "invalid escape")]
    #[case("\"a\nb\"", "control character in string")]
    fn test_string_failures(#[case] input: &str, #[case] reason: &str) {
        let err = parse(input).unwrap_err();
        assert!(err.is_parse());
        assert!(err.message.starts_with(reason), "{}", err.message);
    }

    #[rstest]
    fn test_control_chars_passthrough() {
        let options = ParseOptions::new().with_control_chars(ControlChars::Passthrough);
        let value = Parser::new("\"a\tb\u{0}c\"", &options)
            .parse_document()
            .unwrap();
        assert_eq!(value, Value::String("a\tb\u{0}c".to_string()));
    }

    #[rstest]
    #[case("true", Value::Bool(true))]
    #[case("false", Value::Bool(false))]
    #[case("null", Value::Null)]
    #[case("  null \n", Value::Null)]
    fn test_literals(#[case] input: &str, #[case] expected: Value) {
        assert_eq!(parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("tru")]
    #[case("trUe")]
    #[case("nul")]
    #[case("fals")]
    #[case("truex")]
    #[case("nullnull")]
    fn test_malformed_literals(#[case] input: &str) {
        assert!(parse(input).unwrap_err().is_parse(), "{input}");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("[")]
    #[case("[1,]")]
    #[case("[1 2]")]
    #[case("[,1]")]
    #[case("{")]
    #[case("{\"a\"}")]
    #[case("{\"a\":}")]
    #[case("{\"a\":1,}")]
    #[case("{a:1}")]
    #[case("{\"a\":1 \"b\":2}")]
    #[case("[1]]")]
    #[case("{} {}")]
    #[case("@")]
    fn test_structural_failures(#[case] input: &str) {
        assert!(parse(input).unwrap_err().is_parse(), "{input:?}");
    }

    #[rstest]
    fn test_error_location_points_at_offending_byte() {
        let err = parse("{\n  \"a\": x\n}").unwrap_err();
        let location = err.location.unwrap();
        assert_eq!(location.offset, 9);
        assert_eq!((location.line, location.column), (2, 8));
        assert!(err.message.starts_with("expected value, found `x`"));
    }

    #[rstest]
    fn test_duplicate_key_keeps_first_value() {
        let value = parse(r#"{"k":1,"other":true,"k":2}"#).unwrap();
        let map = value.object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0).map(|(key, _)| key.as_str()), Some("k"));
        assert_eq!(map["k"], Value::Number(1.0));

        assert!(parse(r#"{"k":1,"k":tru}"#).unwrap_err().is_parse());
    }

    #[rstest]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(2);
        assert!(Parser::new("[[1]]", &options).parse_document().is_ok());
        assert!(Parser::new(r#"{"a":{"b":1}}"#, &options)
            .parse_document()
            .is_ok());

        let err = Parser::new("[[[1]]]", &options)
            .parse_document()
            .unwrap_err();
        assert!(err.message.starts_with("nesting deeper than 2 levels"));
    }
}
