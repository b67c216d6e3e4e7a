//! serde-backed DocumentDecoder
//!
//! YAML goes through `serde_yaml_ng`, JSON through `serde_json`; both are
//! converted into `Node` with mapping order preserved. Repeated mapping keys
//! are syntax errors in both formats.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::domain::ports::{DocumentDecoder, SyntaxError};
use crate::domain::value_objects::{DeclarationFormat, Node};

#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDecoder;

impl SerdeDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for SerdeDecoder {
    fn decode(&self, bytes: &[u8], format: DeclarationFormat) -> Result<Node, SyntaxError> {
        match format {
            DeclarationFormat::Yaml => {
                let value: serde_yaml_ng::Value = serde_yaml_ng::from_slice(bytes).map_err(|e| {
                    let err = SyntaxError::new(format, e.to_string());
                    match e.location() {
                        Some(location) => err.at_line(location.line()),
                        None => err,
                    }
                })?;
                from_yaml(value)
            }
            DeclarationFormat::Json => {
                let JsonNode(node) = serde_json::from_slice(bytes)
                    .map_err(|e| SyntaxError::new(format, e.to_string()).at_line(e.line()))?;
                Ok(node)
            }
        }
    }
}

fn from_yaml(value: serde_yaml_ng::Value) -> Result<Node, SyntaxError> {
    use serde_yaml_ng::Value;

    Ok(match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Node::Int(i),
            None => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Node::String(s),
        Value::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut entries = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                entries.push((yaml_key(key)?, from_yaml(value)?));
            }
            Node::Mapping(entries)
        }
        Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml_ng::Value) -> Result<String, SyntaxError> {
    use serde_yaml_ng::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(SyntaxError::new(
            DeclarationFormat::Yaml,
            format!("mapping keys must be scalars, found {:?}", other),
        )),
    }
}

/// JSON document read straight into a `Node`.
///
/// `serde_json::Value` keeps only the last of repeated object keys; reading
/// through this visitor makes a repeated key a syntax error, as in YAML.
struct JsonNode(Node);

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonNodeVisitor).map(JsonNode)
    }
}

struct JsonNodeVisitor;

impl<'de> Visitor<'de> for JsonNodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(match i64::try_from(v) {
            Ok(i) => Node::Int(i),
            Err(_) => Node::Float(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(JsonNode(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, Node)> = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(format!("duplicate key `{}`", key)));
            }
            let JsonNode(value) = map.next_value()?;
            entries.push((key, value));
        }
        Ok(Node::Mapping(entries))
    }
}
