use crate::resolve::Response;
use crate::value::*;
use serde_json::{Map as JSMap, Value as JSValue};

/// Trait for converting raw values to [serde_json::Value]s.
pub trait ValueToJson: Sized {
    /// Convert the current value to a [serde_json::Value].
    fn to_json(&self) -> JSValue;
}

impl<'a> ValueToJson for Value<'a> {
    #[inline]
    fn to_json(&self) -> JSValue {
        match self {
            Value::List(list) => list.to_json(),
            Value::Object(object) => object.to_json(),
            Value::Int(node) => node.to_json(),
            Value::Float(node) => node.to_json(),
            Value::Boolean(node) => node.to_json(),
            Value::String(node) => node.to_json(),
            Value::Enum(node) => node.to_json(),
            Value::Null => JSValue::Null,
        }
    }
}

impl ValueToJson for IntValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl ValueToJson for FloatValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl ValueToJson for BooleanValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueToJson for StringValue<'a> {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueToJson for EnumValue<'a> {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueToJson for ListValue<'a> {
    fn to_json(&self) -> JSValue {
        JSValue::Array(self.children.iter().map(|value| value.to_json()).collect())
    }
}

impl<'a> ValueToJson for ObjectValue<'a> {
    fn to_json(&self) -> JSValue {
        let mut map = JSMap::new();
        for field in self.children.iter() {
            map.insert(field.name.to_string(), field.value.to_json());
        }
        JSValue::Object(map)
    }
}

/// Serialize a resolved value into a [serde_json::Value].
///
/// Leaves serialize their validated raw values; resolved objects serialize their response
/// entries in request order, which the order-preserving JSON map keeps intact. Intermediate
/// values only occur mid-pass and serialize through their raw data.
pub fn json_from_resolved<'a>(value: &ResolvedValue<'a>) -> JSValue {
    match value {
        ResolvedValue::Null => JSValue::Null,
        ResolvedValue::Scalar(scalar) => scalar.value.to_json(),
        ResolvedValue::ObjectIntermediate(object) => object.value.to_json(),
        ResolvedValue::ListIntermediate(list) => JSValue::Array(
            list.elements
                .iter()
                .map(json_from_resolved)
                .collect(),
        ),
        ResolvedValue::ListResolved(list) => JSValue::Array(
            list.elements
                .iter()
                .map(json_from_resolved)
                .collect(),
        ),
        ResolvedValue::Type(value) => json_from_type_value(value),
    }
}

/// Serialize a resolved object into a [serde_json::Value], preserving response-key order.
pub fn json_from_type_value<'a>(value: &TypeValue<'a>) -> JSValue {
    let mut map = JSMap::new();
    for (key, field_value) in value.iter() {
        map.insert(key.to_string(), json_from_resolved(&field_value.value));
    }
    JSValue::Object(map)
}

/// Render a full response envelope with `data` and, when any were collected, `errors`.
pub fn json_from_response<'a>(response: &Response<'a>) -> JSValue {
    let mut map = JSMap::new();
    map.insert(
        "data".to_string(),
        match &response.data {
            Some(data) => json_from_type_value(data),
            None => JSValue::Null,
        },
    );

    if !response.errors.is_empty() {
        let errors = response
            .errors
            .iter()
            .map(|error| {
                let mut entry = JSMap::new();
                entry.insert("message".to_string(), error.print(false).into());
                JSValue::Object(entry)
            })
            .collect();
        map.insert("errors".to_string(), JSValue::Array(errors));
    }

    JSValue::Object(map)
}
