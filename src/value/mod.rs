//! The owned JSON value tree.
//!
//! Every [`Value`] exclusively owns its children, so cloning a value copies the
//! whole subtree and dropping it releases the subtree depth-first. Shape only
//! changes through the write accessors: [`Value::at_mut`] promotes `null` to an
//! empty container, extends arrays with `null` filler, and inserts absent keys.

mod convert;
mod index;
mod pointer;

use std::fmt;

use indexmap::IndexMap;

use crate::encode;
use crate::{Error, Result, WriteOptions};

pub use index::ValueIndex;

/// Object storage. Keys are unique; entries keep insertion order.
pub type Object = IndexMap<String, Value>;

/// The active variant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    Number,
    Boolean,
    String,
    Array,
    Object,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Number => "number",
            Tag::Boolean => "boolean",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    Bool(bool),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub const fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Number(_) => Tag::Number,
            Value::Bool(_) => Tag::Boolean,
            Value::String(_) => Tag::String,
            Value::Array(_) => Tag::Array,
            Value::Object(_) => Tag::Object,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.tag().as_str()
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the number payload, or `TypeMismatch` for any other tag.
    pub fn number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(Error::type_mismatch(Tag::Number, other.tag())),
        }
    }

    pub fn boolean(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch(Tag::Boolean, other.tag())),
        }
    }

    pub fn string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(Tag::String, other.tag())),
        }
    }

    pub fn array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch(Tag::Array, other.tag())),
        }
    }

    pub fn array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch(Tag::Array, other.tag())),
        }
    }

    pub fn object(&self) -> Result<&Object> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(Error::type_mismatch(Tag::Object, other.tag())),
        }
    }

    pub fn object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(Error::type_mismatch(Tag::Object, other.tag())),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.number().ok()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.boolean().ok()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.string().ok()
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        self.array().ok()
    }

    pub fn as_object(&self) -> Option<&Object> {
        self.object().ok()
    }

    /// Immutable access by array index or object key.
    ///
    /// Fails with `TypeMismatch` when the tag does not match the index kind,
    /// `IndexOutOfRange` past the end of an array and `KeyNotFound` for an
    /// absent key. Never changes the tree.
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Mutable access by array index or object key.
    ///
    /// A `null` value is first promoted to an empty array (index) or empty
    /// object (key). Arrays grow with `null` filler until the index exists and
    /// absent keys are inserted as `null`. Any other tag fails with
    /// `TypeMismatch` and is left untouched.
    pub fn at_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }

    /// Like [`Value::at`], discarding the failure reason.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self).ok()
    }

    /// Number of elements, entries or UTF-8 bytes; `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.len()),
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Assigns `value`, returning the previous payload. The previous subtree is
    /// released when the returned value is dropped.
    pub fn replace(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(self, value.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = if f.alternate() {
            WriteOptions::pretty()
        } else {
            WriteOptions::compact()
        };
        f.write_str(&encode::to_string_with_options(self, &options))
    }
}
