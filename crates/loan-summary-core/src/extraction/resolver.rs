//! Candidate-path resolution over loosely-shaped loan records.
//!
//! Different issuers file the same fact under different keys, so every
//! logical column carries an ordered list of dotted paths. Segments address
//! mapping keys, or list positions when the current node is a list. The first
//! path that walks all the way to a non-empty value wins; nothing is merged
//! across paths.

use serde_json::{Map, Value};

/// Shape of a node reached during a path walk.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    Scalar(&'a Value),
    Absent,
}

impl<'a> Node<'a> {
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Node::Absent,
            Some(Value::Object(map)) => Node::Mapping(map),
            Some(Value::Array(items)) => Node::Sequence(items),
            Some(other) => Node::Scalar(other),
        }
    }

    /// Descend one path segment. Any shape mismatch yields `None`.
    fn child(self, segment: &str) -> Option<&'a Value> {
        match self {
            Node::Mapping(map) => map.get(segment),
            Node::Sequence(items) => {
                let idx = sequence_index(segment, items.len())?;
                items.get(idx)
            }
            Node::Scalar(_) | Node::Absent => None,
        }
    }
}

/// A resolved candidate: which path matched and what it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a, 'p> {
    pub path: &'p str,
    pub value: &'a Value,
}

/// Parse a list index. Negative indices count back from the end.
fn sequence_index(segment: &str, len: usize) -> Option<usize> {
    let idx: i64 = segment.trim().parse().ok()?;
    if idx >= 0 {
        usize::try_from(idx).ok()
    } else {
        let back = usize::try_from(idx.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

/// True when a terminal value counts as found.
///
/// Null, empty strings and empty containers fall through to the next
/// candidate. Zero and `false` are real values.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Walk a single dotted path from `root`.
pub fn walk<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = Node::classify(Some(current)).child(segment)?;
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Return the first candidate path that resolves to a present value,
/// together with the path that matched.
pub fn resolve_with_path<'a, 'p, S: AsRef<str>>(
    record: &'a Value,
    candidates: &'p [S],
) -> Option<Resolved<'a, 'p>> {
    for candidate in candidates {
        let path = candidate.as_ref();
        match walk(record, path) {
            Some(value) if is_present(value) => return Some(Resolved { path, value }),
            _ => log::trace!("path miss: {path}"),
        }
    }
    None
}

/// Return the value at the first candidate path that resolves to a present
/// value. Empty candidate lists resolve to `None`.
pub fn resolve<'a, S: AsRef<str>>(record: &'a Value, candidates: &[S]) -> Option<&'a Value> {
    resolve_with_path(record, candidates).map(|r| r.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_walks_mapping_keys() {
        let record = json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(walk(&record, "a.b.c"), Some(&json!("deep")));
        assert_eq!(walk(&record, "a.x.c"), None);
    }

    #[test]
    fn test_walks_list_indices() {
        let record = json!({"hist": [{"occ": "91%"}, {"occ": "88%"}]});
        assert_eq!(walk(&record, "hist.1.occ"), Some(&json!("88%")));
        assert_eq!(walk(&record, "hist.-1.occ"), Some(&json!("88%")));
        assert_eq!(walk(&record, "hist.2.occ"), None);
        assert_eq!(walk(&record, "hist.first.occ"), None);
    }

    #[test]
    fn test_scalar_cannot_be_descended() {
        let record = json!({"a": "text"});
        assert_eq!(walk(&record, "a.b"), None);
    }

    #[test]
    fn test_null_is_absent() {
        let record = json!({"a": null, "b": 1});
        assert_eq!(resolve(&record, &["a", "b"]), Some(&json!(1)));
    }

    #[test]
    fn test_zero_is_present() {
        let record = json!({"a": 0, "b": 5});
        assert_eq!(resolve(&record, &["a", "b"]), Some(&json!(0)));
    }

    #[test]
    fn test_empty_values_fall_through() {
        let record = json!({"a": "", "b": [], "c": {}, "d": "x"});
        let found = resolve_with_path(&record, &["a", "b", "c", "d"]).unwrap();
        assert_eq!(found.path, "d");
        assert_eq!(found.value, &json!("x"));
    }

    #[test]
    fn test_no_candidates() {
        let record = json!({"a": 1});
        let none: [&str; 0] = [];
        assert_eq!(resolve(&record, &none), None);
    }

    #[test]
    fn test_negative_index_out_of_range() {
        assert_eq!(sequence_index("-3", 2), None);
        assert_eq!(sequence_index("-2", 2), Some(0));
    }
}
