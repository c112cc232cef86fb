//! Key documents
//!
//! A [`KeyDocument`] is the parsed JSON object a key record is populated
//! from. Members are kept in document order with duplicates preserved, so
//! the parser sees exactly what the producer wrote.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use serde_json::{Map, Value};

use crate::{JwaError, error::Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyDocument {
    members: Vec<(String, Value)>,
}

impl KeyDocument {
    /// Parses JSON text; anything but a JSON object is an error
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Members in document order
    pub fn members(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Last value given for a member, if any
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

struct KeyDocumentVisitor;

impl<'de> Visitor<'de> for KeyDocumentVisitor {
    type Value = KeyDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            members.push((name, value));
        }
        Ok(KeyDocument { members })
    }
}

impl<'de> Deserialize<'de> for KeyDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(KeyDocumentVisitor)
    }
}

impl From<Map<String, Value>> for KeyDocument {
    fn from(map: Map<String, Value>) -> Self {
        KeyDocument {
            members: map.into_iter().collect(),
        }
    }
}

impl TryFrom<Value> for KeyDocument {
    type Error = JwaError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(JwaError::InvalidDocument(format!(
                "found {}",
                json_type(&other)
            ))),
        }
    }
}

impl TryFrom<&Value> for KeyDocument {
    type Error = JwaError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(KeyDocument {
                members: map
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect(),
            }),
            other => Err(JwaError::InvalidDocument(format!(
                "found {}",
                json_type(other)
            ))),
        }
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_document_order_and_duplicates() {
        let doc = KeyDocument::from_json_str(r#"{"y":"2","x":"1","y":"3"}"#).unwrap();
        let names: Vec<&str> = doc.members().map(|(name, _)| name).collect();
        assert_eq!(names, ["y", "x", "y"]);
        assert_eq!(doc.get("y"), Some(&json!("3")));
    }

    #[test]
    fn empty_object() {
        let doc = KeyDocument::from_json_str("{}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn rejects_non_object_text() {
        assert!(KeyDocument::from_json_str("[1, 2]").is_err());
        assert!(KeyDocument::from_json_str("\"crv\"").is_err());
        assert!(KeyDocument::from_json_str("{\"crv\":").is_err());
    }

    #[test]
    fn from_value() {
        let doc = KeyDocument::try_from(json!({"kty": "EC", "crv": "P-256"})).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("crv"), Some(&json!("P-256")));

        let borrowed = json!({"k": "c2VjcmV0"});
        assert_eq!(KeyDocument::try_from(&borrowed).unwrap().len(), 1);
    }

    #[test]
    fn from_non_object_value() {
        assert!(matches!(
            KeyDocument::try_from(json!(42)),
            Err(JwaError::InvalidDocument(msg)) if msg == "found number"
        ));
    }
}
