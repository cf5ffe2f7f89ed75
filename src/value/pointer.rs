use std::borrow::Cow;

use smallvec::SmallVec;

use super::Value;

type Segments<'a> = SmallVec<[Cow<'a, str>; 8]>;

impl Value {
    /// Looks up a value by JSON Pointer (`/rows/0/id`). The empty pointer
    /// addresses `self`. Never promotes, inserts or extends.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let segments = split_pointer(pointer)?;
        segments
            .iter()
            .try_fold(self, |target, segment| match target {
                Value::Object(map) => map.get(&**segment),
                Value::Array(items) => parse_index(segment).and_then(|idx| items.get(idx)),
                _ => None,
            })
    }

    pub fn pointer_mut(&mut self, pointer: &str) -> Option<&mut Value> {
        let segments = split_pointer(pointer)?;
        segments
            .iter()
            .try_fold(self, |target, segment| match target {
                Value::Object(map) => map.get_mut(&**segment),
                Value::Array(items) => {
                    parse_index(segment).and_then(move |idx| items.get_mut(idx))
                }
                _ => None,
            })
    }
}

fn split_pointer(pointer: &str) -> Option<Segments<'_>> {
    if pointer.is_empty() {
        return Some(SmallVec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(unescape_segment).collect())
}

// `~1` must be decoded before `~0`, otherwise `~01` would turn into `/`.
fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.starts_with('+') || (segment.len() > 1 && segment.starts_with('0')) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::parse;

    #[rstest]
    #[case("", Some("{\"a/b\":[10,{\"c~d\":true}],\"e\":null}"))]
    #[case("/a~1b", Some("[10,{\"c~d\":true}]"))]
    #[case("/a~1b/0", Some("10"))]
    #[case("/a~1b/1/c~0d", Some("true"))]
    #[case("/e", Some("null"))]
    #[case("/a~1b/2", None)]
    #[case("/a~1b/01", None)]
    #[case("/a~1b/+1", None)]
    #[case("/missing", None)]
    #[case("/e/x", None)]
    #[case("no-slash", None)]
    fn test_pointer(#[case] pointer: &str, #[case] expected: Option<&str>) {
        let value = parse(r#"{"a/b":[10,{"c~d":true}],"e":null}"#).unwrap();
        let found = value.pointer(pointer).map(ToString::to_string);
        assert_eq!(found.as_deref(), expected);
    }

    #[rstest]
    fn test_pointer_mut_edits_in_place_without_growing() {
        let mut value = parse(r#"{"list":[1,2]}"#).unwrap();
        *value.pointer_mut("/list/1").unwrap() = "two".into();
        assert!(value.pointer_mut("/list/5").is_none());
        assert!(value.pointer_mut("/other").is_none());
        assert_eq!(value.to_string(), r#"{"list":[1,"two"]}"#);
    }
}
