use std::{collections::HashMap, mem::replace};

use smol_str::SmolStr;

/// A node of a parsed playlist
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Flag tags (no payload) and `YES`/`NO` attributes
    Bool(bool),
    /// Short decimal literals
    Number(f64),
    /// Everything that is neither a number nor a boolean
    String(SmolStr),
    /// Attribute lists and positional grammars (`EXTINF`, `BYTERANGE`, `RESOLUTION`)
    Object(Object),
    /// Repeated tags and the URI lines
    Array(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Looks up `key` when this value is an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl From<SmolStr> for Value {
    fn from(value: SmolStr) -> Self {
        Self::String(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

/// String-keyed map which remembers the order keys were first inserted in
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: Vec<(SmolStr, Value)>,
    index: HashMap<SmolStr, usize>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value. An existing key keeps its position and the
    /// previous value is returned.
    pub fn insert(&mut self, key: impl Into<SmolStr>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&position) = self.index.get(&key) {
            return Some(replace(&mut self.entries[position].1, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.index
            .get(key)
            .map(|&position| &mut self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<SmolStr>> FromIterator<(K, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Object, Value};

    #[test]
    fn test_object_keeps_insertion_order() {
        let mut object = Object::new();
        object.insert("width", Value::Number(640.0));
        object.insert("height", Value::Number(360.0));
        object.insert("codecs", Value::from("avc1.4d401e"));

        assert_eq!(
            object.keys().collect::<Vec<_>>(),
            vec!["width", "height", "codecs"]
        );
    }

    #[test]
    fn test_object_replace_in_place() {
        let mut object = Object::new();
        object.insert("a", Value::Number(1.0));
        object.insert("b", Value::Number(2.0));

        let previous = object.insert("a", Value::Number(3.0));
        assert_eq!(previous, Some(Value::Number(1.0)));
        assert_eq!(object.len(), 2);
        assert_eq!(object.keys().next(), Some("a"));
        assert_eq!(object.get("a").and_then(Value::as_f64), Some(3.0));
    }

    #[test]
    fn test_object_equality_is_ordered() {
        let left: Object = [("a", Value::Bool(true)), ("b", Value::Bool(false))]
            .into_iter()
            .collect();
        let right: Object = [("b", Value::Bool(false)), ("a", Value::Bool(true))]
            .into_iter()
            .collect();

        assert_ne!(left, right);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn test_value_accessors() {
        let resolution: Object = [("width", Value::Number(1280.0))].into_iter().collect();
        let value = Value::from(resolution);

        assert_eq!(value.get("width").and_then(Value::as_f64), Some(1280.0));
        assert!(value.get("height").is_none());
        assert!(value.as_str().is_none());
        assert!(!value.is_array());
        assert_eq!(Value::from("VOD").as_str(), Some("VOD"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(Vec::<Value>::new()).as_array().map(<[Value]>::len), Some(0));
    }
}
