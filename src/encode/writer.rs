use crate::num::number::write_number_into;
use crate::text::string::write_quoted_into;
use crate::{Object, Value, WriteOptions};

pub(crate) struct Writer {
    buffer: Vec<u8>,
    indent_unit: Option<String>,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn new(options: &WriteOptions) -> Self {
        let indent_unit = options
            .indent
            .map(|indent| " ".repeat(indent.get_spaces()));
        Self {
            buffer: Vec::new(),
            indent_unit,
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        // Only `str` slices and ASCII punctuation are ever pushed.
        String::from_utf8(self.buffer).unwrap_or_else(|err| {
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        })
    }

    pub fn finish_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.write_str("null"),
            Value::Bool(true) => self.write_str("true"),
            Value::Bool(false) => self.write_str("false"),
            Value::Number(n) => write_number_into(*n, &mut self.buffer),
            Value::String(s) => write_quoted_into(&mut self.buffer, s),
            Value::Array(items) => self.write_array(items, depth),
            Value::Object(map) => self.write_object(map, depth),
        }
    }

    fn write_array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.write_str("[]");
            return;
        }
        self.buffer.push(b'[');
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.buffer.push(b',');
            }
            self.write_line_break(depth + 1);
            self.write_value(item, depth + 1);
        }
        self.write_line_break(depth);
        self.buffer.push(b']');
    }

    fn write_object(&mut self, map: &Object, depth: usize) {
        if map.is_empty() {
            self.write_str("{}");
            return;
        }
        self.buffer.push(b'{');
        for (idx, (key, value)) in map.iter().enumerate() {
            if idx > 0 {
                self.buffer.push(b',');
            }
            self.write_line_break(depth + 1);
            write_quoted_into(&mut self.buffer, key);
            self.buffer.push(b':');
            if self.indent_unit.is_some() {
                self.buffer.push(b' ');
            }
            self.write_value(value, depth + 1);
        }
        self.write_line_break(depth);
        self.buffer.push(b'}');
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Newline plus indentation in pretty mode, nothing in compact mode.
    fn write_line_break(&mut self, depth: usize) {
        if self.indent_unit.is_none() {
            return;
        }
        self.buffer.push(b'\n');
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer
            .extend_from_slice(self.indent_cache[depth].as_bytes());
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        let Some(unit) = self.indent_unit.as_deref() else {
            return;
        };
        while self.indent_cache.len() <= depth {
            let next = format!("{}{unit}", self.indent_cache[self.indent_cache.len() - 1]);
            self.indent_cache.push(next);
        }
    }
}
