// Dotted-path resolution against JSON-like trees
//
// A namespace such as "session.user.activities" is walked one key per segment.
// Only objects can be descended into; the final segment may land on any value.

use serde_json::Value;

/// Separator between the keys of a namespace path
pub const PATH_SEPARATOR: char = '.';

/// Outcome of resolving a namespace path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Every segment resolved; holds the value at the end of the path
    Found(&'a Value),
    /// Some segment was missing or not an object
    NotFound,
}

impl<'a> Lookup<'a> {
    /// Returns true if the path fully resolved
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Converts the lookup into an `Option`
    pub fn as_option(&self) -> Option<&'a Value> {
        match *self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    /// Clones the resolved value, or yields `Value::Null` on a miss
    pub fn cloned_or_null(&self) -> Value {
        self.as_option().cloned().unwrap_or(Value::Null)
    }
}

impl<'a> From<Option<&'a Value>> for Lookup<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// Resolves a dot-separated `namespace` against `origin`.
///
/// An empty namespace resolves to `origin` itself. Any missing key, or any
/// attempt to descend into a non-object, yields [`Lookup::NotFound`].
pub fn extract_namespace<'a>(origin: &'a Value, namespace: &str) -> Lookup<'a> {
    if namespace.is_empty() {
        return Lookup::Found(origin);
    }

    let mut current = origin;
    for segment in namespace.split(PATH_SEPARATOR) {
        let next = match current {
            Value::Object(map) => map.get(segment),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Lookup::NotFound,
        }
    }

    Lookup::Found(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_returns_namespace_reduced_origin() {
        let origin = json!({
            "session": { "user": { "activities": { "running": "hooray" } } }
        });

        let result = extract_namespace(&origin, "session.user.activities");
        assert_eq!(result, Lookup::Found(&json!({ "running": "hooray" })));
    }

    #[test]
    fn test_missing_prefix_is_not_found() {
        let origin = json!({ "any": { "evil": { "person": "Jason" } } });

        assert_eq!(extract_namespace(&origin, "session.user"), Lookup::NotFound);
        assert_eq!(extract_namespace(&origin, "any.evil.dog"), Lookup::NotFound);
    }

    #[test]
    fn test_cannot_descend_through_non_objects() {
        let origin = json!({
            "system": { "status": "clean", "dummy": [ { "a": 1 } ], "none": null }
        });

        assert_eq!(extract_namespace(&origin, "system.status.length"), Lookup::NotFound);
        assert_eq!(extract_namespace(&origin, "system.dummy.0"), Lookup::NotFound);
        assert_eq!(extract_namespace(&origin, "system.none.x"), Lookup::NotFound);
    }

    #[test]
    fn test_leaf_values_of_any_kind() {
        let origin = json!({ "a": { "n": 0, "flag": false, "none": null, "list": [1, 2] } });

        assert_eq!(extract_namespace(&origin, "a.n"), Lookup::Found(&json!(0)));
        assert_eq!(extract_namespace(&origin, "a.flag"), Lookup::Found(&json!(false)));
        assert_eq!(extract_namespace(&origin, "a.none"), Lookup::Found(&Value::Null));
        assert_eq!(extract_namespace(&origin, "a.list"), Lookup::Found(&json!([1, 2])));
    }

    #[test]
    fn test_empty_namespace_returns_origin() {
        let origin = json!({ "status": "clean" });
        assert_eq!(extract_namespace(&origin, ""), Lookup::Found(&origin));
    }

    #[test]
    fn test_lookup_helpers() {
        let value = json!("Batman");
        let found = Lookup::Found(&value);
        assert!(found.is_found());
        assert_eq!(found.as_option(), Some(&value));
        assert_eq!(found.cloned_or_null(), json!("Batman"));

        assert!(!Lookup::NotFound.is_found());
        assert_eq!(Lookup::NotFound.as_option(), None);
        assert_eq!(Lookup::NotFound.cloned_or_null(), Value::Null);
        assert_eq!(Lookup::from(None), Lookup::NotFound);
    }
}
