use crate::constants::{DEFAULT_INDENT, MAX_DEPTH};

/// What the parser does with raw control characters (below 0x20) inside a
/// string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlChars {
    #[default]
    Reject,
    Passthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub fn get_spaces(self) -> usize {
        let Indent::Spaces(count) = self;
        count
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(DEFAULT_INDENT)
    }
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub max_depth: usize,
    pub control_chars: ControlChars,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_control_chars(mut self, control_chars: ControlChars) -> Self {
        self.control_chars = control_chars;
        self
    }

    /// Shorthand for toggling between the rejecting and passthrough
    /// control character policies.
    pub fn with_strict(self, strict: bool) -> Self {
        self.with_control_chars(if strict {
            ControlChars::Reject
        } else {
            ControlChars::Passthrough
        })
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            control_chars: ControlChars::default(),
        }
    }
}

/// Output layout. `indent: None` writes compact JSON.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub indent: Option<Indent>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { indent: None }
    }

    pub fn pretty() -> Self {
        Self {
            indent: Some(Indent::default()),
        }
    }

    pub fn with_indent(mut self, indent: Option<Indent>) -> Self {
        self.indent = indent;
        self
    }
}
