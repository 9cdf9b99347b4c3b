use bumpalo::collections::Vec;
use serde_json::Value as JSValue;

use crate::error::{Error, ErrorKind, Result};
use crate::schema::SchemaType;
use crate::value::*;

/// Convert a [serde_json::Value] to a raw [Value] while casting it against a schema type.
///
/// This may be used to accept JSON data as resolver output or argument values: built-in scalars
/// are cast according to their serialization rules, non-null wrappers reject JSON `null`, and a
/// single value in a list position is wrapped into a singleton list. Everything else falls back
/// to the untyped conversion.
pub fn value_from_json_typed<'a>(
    ctx: &'a ExecContext,
    value: &JSValue,
    of_type: &SchemaType<'a>,
) -> Result<Value<'a>> {
    match (of_type, value) {
        (SchemaType::List(of_type), JSValue::Array(list)) => {
            let mut children = Vec::new_in(&ctx.arena);
            for item in list {
                children.push(value_from_json_typed(ctx, item, of_type)?);
            }
            Ok(Value::List(ListValue { children }))
        }
        (SchemaType::List(of_type), value) => {
            if matches!(value, JSValue::Null) {
                return Ok(Value::Null);
            }

            let child = value_from_json_typed(ctx, value, of_type)?;
            let mut children = Vec::new_in(&ctx.arena);
            children.push(child);
            Ok(Value::List(ListValue { children }))
        }

        (SchemaType::NotNull(_), JSValue::Null) => Err(Error::new(
            "received null for non-nullable type",
            ErrorKind::Configuration,
        )),

        (_, JSValue::Null) => Ok(Value::Null),

        (SchemaType::NotNull(of_type), value) => value_from_json_typed(ctx, value, of_type),

        (SchemaType::Scalar(scalar), JSValue::Bool(x)) if scalar.name == "Boolean" => {
            Ok(Value::Boolean((*x).into()))
        }

        (SchemaType::Scalar(scalar), JSValue::Number(num)) if scalar.name == "Boolean" => {
            Ok(Value::Boolean((num.as_u64().unwrap_or(0) != 0).into()))
        }

        (SchemaType::Scalar(scalar), JSValue::Number(num)) if scalar.name == "Int" => num
            .as_i64()
            .map(|x| Value::Int(x.into()))
            .ok_or_else(|| Error::new("received Float for Int type", ErrorKind::Configuration)),

        (SchemaType::Scalar(scalar), JSValue::Number(num)) if scalar.name == "Float" => {
            let num = num.as_f64().unwrap_or(0.0);
            if num.is_finite() {
                Ok(Value::Float(num.into()))
            } else {
                Err(Error::new(
                    "received non-finite Float for Float type",
                    ErrorKind::Configuration,
                ))
            }
        }

        (SchemaType::Scalar(scalar), JSValue::String(str))
            if scalar.name == "ID" || scalar.name == "String" =>
        {
            Ok(Value::String(ctx.alloc_str(str).into()))
        }

        (SchemaType::Scalar(scalar), JSValue::Number(num))
            if scalar.name == "ID" || scalar.name == "String" =>
        {
            Ok(Value::String(ctx.alloc_string(num.to_string()).into()))
        }

        (SchemaType::Enum(_), JSValue::String(str)) => {
            Ok(Value::Enum(EnumValue {
                value: ctx.alloc_str(str),
            }))
        }

        (_, value) => Ok(value_from_json(ctx, value)),
    }
}

/// Convert a [serde_json::Value] to a raw [Value] without casting it to a type.
pub fn value_from_json<'a>(ctx: &'a ExecContext, value: &JSValue) -> Value<'a> {
    match value {
        JSValue::Array(list) => {
            let mut children = Vec::new_in(&ctx.arena);
            for item in list {
                children.push(value_from_json(ctx, item));
            }
            Value::List(ListValue { children })
        }
        JSValue::Object(map) => {
            let mut children = Vec::new_in(&ctx.arena);
            for (key, value) in map.iter() {
                children.push(ObjectField {
                    name: ctx.alloc_str(key),
                    value: value_from_json(ctx, value),
                });
            }
            Value::Object(ObjectValue { children })
        }
        JSValue::Number(num) => num.as_i64().map(|x| Value::Int(x.into())).unwrap_or_else(|| {
            let float = num.as_f64().filter(|x| x.is_finite()).unwrap_or(0.0);
            Value::Float(float.into())
        }),
        JSValue::Bool(x) => Value::Boolean((*x).into()),
        JSValue::String(str) => Value::String(ctx.alloc_str(str).into()),
        JSValue::Null => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaScalar;
    use serde_json::json;

    #[test]
    fn casts_builtin_scalars() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let of_type = SchemaType::Scalar(int);

        assert_eq!(
            value_from_json_typed(&ctx, &json!(7), &of_type).unwrap(),
            Value::Int(7.into())
        );
        assert!(value_from_json_typed(&ctx, &json!(1.5), &of_type).is_err());
        assert_eq!(
            value_from_json_typed(&ctx, &json!(null), &of_type).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn null_for_non_null_is_rejected() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let of_type = SchemaType::Scalar(int).into_nonnull(&ctx);

        let error = value_from_json_typed(&ctx, &json!(null), &of_type).unwrap_err();
        assert_eq!(error.kind(), crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn single_value_wraps_into_singleton_list() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let of_type = SchemaType::Scalar(int).into_list(&ctx);

        match value_from_json_typed(&ctx, &json!(3), &of_type).unwrap() {
            Value::List(list) => {
                assert_eq!(list.children.len(), 1);
                assert_eq!(list.children[0], Value::Int(3.into()));
            }
            other => panic!("expected a list, got {:?}", other),
        };
    }

    #[test]
    fn untyped_objects_preserve_key_order() {
        let ctx = ExecContext::new();
        let value = value_from_json(&ctx, &json!({"b": 1, "a": [true, null]}));

        match value {
            Value::Object(object) => {
                let keys: std::vec::Vec<_> =
                    object.children.iter().map(|field| field.name).collect();
                assert_eq!(keys, vec!["b", "a"]);
            }
            other => panic!("expected an object, got {:?}", other),
        }
    }
}
