use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Error;
use crate::resolve::Response;
use crate::value::{ResolvedValue, TypeValue, Value};

/// Raw values serialize to the JSON shapes they mirror; enum members serialize as strings.
impl<'a> Serialize for Value<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(node) => serializer.serialize_str(node.value),
            Value::Float(node) => serializer.serialize_f64(node.value),
            Value::Int(node) => serializer.serialize_i64(node.value),
            Value::Boolean(node) => serializer.serialize_bool(node.value),
            Value::Enum(node) => serializer.serialize_str(node.value),
            Value::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.children.len()))?;
                for item in list.children.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.children.len()))?;
                for field in object.children.iter() {
                    map.serialize_entry(field.name, &field.value)?;
                }
                map.end()
            }
            Value::Null => serializer.serialize_unit(),
        }
    }
}

/// Resolved values serialize straight into the wire shape the downstream transport emits,
/// without an intermediate document; response-key order is preserved verbatim.
impl<'a> Serialize for ResolvedValue<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedValue::Null => serializer.serialize_unit(),
            ResolvedValue::Scalar(scalar) => scalar.value.serialize(serializer),
            ResolvedValue::ObjectIntermediate(object) => object.value.serialize(serializer),
            ResolvedValue::ListIntermediate(list) => {
                let mut seq = serializer.serialize_seq(Some(list.elements.len()))?;
                for element in list.elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ResolvedValue::ListResolved(list) => {
                let mut seq = serializer.serialize_seq(Some(list.elements.len()))?;
                for element in list.elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ResolvedValue::Type(value) => value.serialize(serializer),
        }
    }
}

impl<'a> Serialize for TypeValue<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, field_value) in self.iter() {
            map.serialize_entry(key, &field_value.value)?;
        }
        map.end()
    }
}

/// Errors serialize as the conventional `{"message": ...}` entries of a response envelope.
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("message", &self.print(false))?;
        map.end()
    }
}

impl<'a> Serialize for Response<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match &self.data {
            Some(data) => map.serialize_entry("data", data)?,
            None => map.serialize_entry("data", &())?,
        }
        if !self.errors.is_empty() {
            map.serialize_entry("errors", &self.errors)?;
        }
        map.end()
    }
}
