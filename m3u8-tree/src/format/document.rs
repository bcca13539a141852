use std::mem::replace;

use smol_str::SmolStr;

use crate::format::{Object, Value, directives};

/// Result of parsing one playlist.
///
/// Maps every folded tag name (plus the reserved [`directives::URI_KEY`])
/// to its value, in the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document(Object);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a freshly parsed value under `key`.
    ///
    /// - absent key: stored as is, or as a one-element array when `always_array`
    /// - key holding a non-array: promoted to `[old, new]`
    /// - key holding an array: appended
    pub(crate) fn merge(&mut self, key: SmolStr, value: Value, always_array: bool) {
        match self.0.get_mut(&key) {
            None => {
                let value = if always_array {
                    Value::Array(vec![value])
                } else {
                    value
                };
                self.0.insert(key, value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let previous = replace(existing, Value::Bool(false));
                *existing = Value::Array(vec![previous, value]);
            }
        }
    }

    pub(crate) fn push_uri(&mut self, line: &str) {
        self.merge(directives::URI_KEY.into(), Value::String(line.into()), true);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-tag lines in file order
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.get(directives::URI_KEY)
            .and_then(Value::as_array)
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
    }

    pub fn as_object(&self) -> &Object {
        &self.0
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Object(value.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Document, Value};

    #[test]
    fn test_merge_scalar_then_promote() {
        let mut document = Document::new();
        document.merge("ext_x_version".into(), Value::Number(3.0), false);
        assert_eq!(document.get("ext_x_version"), Some(&Value::Number(3.0)));

        document.merge("ext_x_version".into(), Value::Number(4.0), false);
        assert_eq!(
            document.get("ext_x_version"),
            Some(&Value::Array(vec![Value::Number(3.0), Value::Number(4.0)]))
        );

        document.merge("ext_x_version".into(), Value::Number(5.0), false);
        assert_eq!(
            document
                .get("ext_x_version")
                .and_then(Value::as_array)
                .map(<[Value]>::len),
            Some(3)
        );
    }

    #[test]
    fn test_merge_always_array() {
        let mut document = Document::new();
        document.merge("extinf".into(), Value::Number(10.0), true);
        assert_eq!(
            document.get("extinf"),
            Some(&Value::Array(vec![Value::Number(10.0)]))
        );

        document.merge("extinf".into(), Value::Number(5.0), true);
        assert_eq!(
            document.get("extinf"),
            Some(&Value::Array(vec![Value::Number(10.0), Value::Number(5.0)]))
        );
    }

    #[test]
    fn test_into_value() {
        let mut document = Document::new();
        document.merge("ext_x_targetduration".into(), Value::Number(10.0), false);

        let value = Value::from(document);
        assert_eq!(
            value.get("ext_x_targetduration").and_then(Value::as_f64),
            Some(10.0)
        );
    }

    #[test]
    fn test_uris() {
        let mut document = Document::new();
        assert_eq!(document.uris().count(), 0);

        document.push_uri("a.ts");
        document.push_uri("b.ts");
        assert_eq!(document.uris().collect::<Vec<_>>(), vec!["a.ts", "b.ts"]);
        assert_eq!(document.len(), 1);
    }
}
