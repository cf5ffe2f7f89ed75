use std::ops;

use super::{Object, Tag, Value};
use crate::{Error, Result};

/// Types usable with [`Value::at`] and [`Value::at_mut`]: `usize` addresses
/// array elements, string types address object entries.
///
/// This trait is sealed.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Array(items) => items
                .get(*self)
                .ok_or_else(|| Error::index_out_of_range(*self, items.len())),
            other => Err(Error::type_mismatch(Tag::Array, other.tag())),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        // No array can hold `usize::MAX + 1` elements; fail before touching
        // the tree.
        let Some(needed) = self.checked_add(1) else {
            return match value {
                Value::Null => Err(Error::index_out_of_range(*self, 0)),
                Value::Array(items) => Err(Error::index_out_of_range(*self, items.len())),
                other => Err(Error::type_mismatch(Tag::Array, other.tag())),
            };
        };
        if value.is_null() {
            *value = Value::Array(Vec::new());
        }
        match value {
            Value::Array(items) => {
                if items.len() < needed {
                    items.resize_with(needed, Value::default);
                }
                Ok(&mut items[*self])
            }
            other => Err(Error::type_mismatch(Tag::Array, other.tag())),
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Object(map) => map.get(self).ok_or_else(|| Error::key_not_found(self)),
            other => Err(Error::type_mismatch(Tag::Object, other.tag())),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        if value.is_null() {
            *value = Value::Object(Object::new());
        }
        match value {
            Value::Object(map) => Ok(map.entry(self.to_owned()).or_default()),
            other => Err(Error::type_mismatch(Tag::Object, other.tag())),
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T> ValueIndex for &T
where
    T: ?Sized + ValueIndex,
{
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

// Operator sugar. Contract violations panic with the accessor error message,
// the same way slice indexing panics out of bounds.
impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        match index.index_into(self) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<I: ValueIndex> ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        match index.index_into_mut(self) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
