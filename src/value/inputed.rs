use crate::error::{Error, ErrorKind, Result};
use crate::schema::{SchemaInputField, SchemaInputObject, SchemaType};
use crate::value::{ExecContext, ListValue, ObjectField, ObjectValue, PrintValue, Value};
use bumpalo::collections::{CollectIn, Vec};

/// An immutable constructed input value, checked against a declared input type.
///
/// Inputed values are what argument positions hold after materialization: a literal for scalar
/// and enum positions, and composite forms that remember their schema type for list and input
/// object positions. They support raw extraction for the resolver calling convention, value
/// equality, and both compact and pretty-indented rendering via
/// [`PrintValue`](crate::value::PrintValue).
#[derive(Debug)]
pub enum InputedValue<'a> {
    /// A scalar, enum, or `null` literal.
    Literal(Value<'a>),
    /// A list of inputed values, remembering the list type it was constructed for.
    List(ListInputedValue<'a>),
    /// An input object, remembering its type, with declared defaults already filled in.
    Object(ObjectInputedValue<'a>),
}

#[derive(Debug)]
pub struct ListInputedValue<'a> {
    pub of_type: SchemaType<'a>,
    pub items: Vec<'a, InputedValue<'a>>,
}

#[derive(Debug)]
pub struct ObjectInputedValue<'a> {
    pub of_type: &'a SchemaInputObject<'a>,
    pub fields: Vec<'a, (&'a str, InputedValue<'a>)>,
}

impl<'a> InputedValue<'a> {
    /// Constructs an inputed value from a raw value and the input type it must conform to.
    ///
    /// Inputs reaching this crate were already validated by the external normalizer, so a
    /// violation here is a fatal configuration error rather than a recoverable one: `null` in a
    /// non-null position, a non-composite where an input object is declared, or an output kind
    /// appearing in input position all abort the pass.
    ///
    /// Two coercions are applied rather than rejected, matching how callers hand over values: a
    /// single non-list value in a list position becomes a singleton list, and an input object is
    /// completed with its declared defaults before its fields are constructed.
    pub fn create(
        ctx: &'a ExecContext,
        raw: Value<'a>,
        of_type: &SchemaType<'a>,
    ) -> Result<InputedValue<'a>> {
        match of_type {
            SchemaType::NotNull(inner) => {
                if raw.is_null() {
                    Err(Error::new(
                        format!(
                            "received null for non-null input type {}",
                            of_type.print_name()
                        ),
                        ErrorKind::Configuration,
                    ))
                } else {
                    InputedValue::create(ctx, raw, inner)
                }
            }
            SchemaType::List(inner) => match raw {
                Value::Null => Ok(InputedValue::Literal(Value::Null)),
                Value::List(list) => {
                    let mut items = Vec::new_in(&ctx.arena);
                    for item in list {
                        items.push(InputedValue::create(ctx, item, inner)?);
                    }
                    Ok(InputedValue::List(ListInputedValue {
                        of_type: *of_type,
                        items,
                    }))
                }
                single => {
                    let mut items = Vec::new_in(&ctx.arena);
                    items.push(InputedValue::create(ctx, single, inner)?);
                    Ok(InputedValue::List(ListInputedValue {
                        of_type: *of_type,
                        items,
                    }))
                }
            },
            SchemaType::InputObject(input_object) => match raw {
                Value::Null => Ok(InputedValue::Literal(Value::Null)),
                Value::Object(object) => {
                    let merged = apply_defaults(ctx, &object, input_object);
                    let mut fields = Vec::new_in(&ctx.arena);
                    for entry in merged {
                        let declared = input_object.get_field(entry.name).ok_or_else(|| {
                            Error::new(
                                format!(
                                    "unknown field {} supplied for input type {}",
                                    entry.name, input_object.name
                                ),
                                ErrorKind::Configuration,
                            )
                        })?;
                        let value = InputedValue::create(ctx, entry.value, &declared.input_type)?;
                        fields.push((entry.name, value));
                    }
                    Ok(InputedValue::Object(ObjectInputedValue {
                        of_type: *input_object,
                        fields,
                    }))
                }
                other => Err(Error::new_with_context(
                    format!(
                        "input type {} expects an ordered key-value structure",
                        input_object.name
                    ),
                    format!("got: {}", other.print_value()),
                    ErrorKind::Configuration,
                )),
            },
            SchemaType::Scalar(_) | SchemaType::Enum(_) => Ok(InputedValue::Literal(raw)),
            SchemaType::Object(_) | SchemaType::Interface(_) | SchemaType::Union(_) => {
                Err(Error::new(
                    format!(
                        "output type {} cannot appear in input position",
                        of_type.print_name()
                    ),
                    ErrorKind::Configuration,
                ))
            }
        }
    }

    /// Extracts the raw value carried by this inputed value, recursively.
    ///
    /// This is what resolver functions receive for their declared arguments.
    pub fn raw_value(&self, ctx: &'a ExecContext) -> Value<'a> {
        match self {
            InputedValue::Literal(value) => value.clone(),
            InputedValue::List(list) => Value::List(ListValue {
                children: list
                    .items
                    .iter()
                    .map(|item| item.raw_value(ctx))
                    .collect_in(&ctx.arena),
            }),
            InputedValue::Object(object) => Value::Object(ObjectValue {
                children: object
                    .fields
                    .iter()
                    .map(|(name, value)| ObjectField {
                        name,
                        value: value.raw_value(ctx),
                    })
                    .collect_in(&ctx.arena),
            }),
        }
    }

    /// Checks whether this inputed value is a `null` literal.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, InputedValue::Literal(Value::Null))
    }
}

impl<'a> PartialEq for InputedValue<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (InputedValue::Literal(left), InputedValue::Literal(right)) => left == right,
            (InputedValue::List(left), InputedValue::List(right)) => {
                left.of_type == right.of_type && left.items == right.items
            }
            (InputedValue::Object(left), InputedValue::Object(right)) => {
                left.of_type.name == right.of_type.name && left.fields == right.fields
            }
            _ => false,
        }
    }
}

/// Completes a supplied input object with its schema-declared defaults.
///
/// An explicitly supplied key is never overwritten, even when it holds `null` or another falsy
/// value. Missing keys are appended in declaration order. Where both the supplied value and the
/// default hold an object under the same key, the merge recurses one level into that key.
pub fn apply_defaults<'a>(
    ctx: &'a ExecContext,
    value: &ObjectValue<'a>,
    input_object: &SchemaInputObject<'a>,
) -> ObjectValue<'a> {
    let mut defaults = Vec::new_in(&ctx.arena);
    for field in input_object.fields.iter() {
        if let Some(default_value) = field.default_value {
            defaults.push(ObjectField {
                name: field.name,
                value: default_value.clone(),
            });
        }
    }

    merge(ctx, value, &ObjectValue { children: defaults })
}

fn merge<'a>(
    ctx: &'a ExecContext,
    core: &ObjectValue<'a>,
    supplement: &ObjectValue<'a>,
) -> ObjectValue<'a> {
    let mut children = core.children.clone();

    for entry in supplement.children.iter() {
        match children.iter_mut().find(|field| field.name == entry.name) {
            Some(existing) => {
                if let (Value::Object(core_object), Value::Object(default_object)) =
                    (&existing.value, &entry.value)
                {
                    existing.value = Value::Object(merge(ctx, core_object, default_object));
                }
            }
            None => children.push(entry.clone()),
        }
    }

    ObjectValue { children }
}

/// A materialized argument: the declaration it satisfies and the constructed value.
#[derive(Debug)]
pub struct ArgumentValue<'a> {
    pub argument: &'a SchemaInputField<'a>,
    pub value: InputedValue<'a>,
}

/// The materialized argument set of one field invocation, in declaration order.
///
/// Definition directives may replace values through [`ArgumentValues::set`] before the set is
/// flattened into the positional raw values the resolver receives.
#[derive(Debug)]
pub struct ArgumentValues<'a> {
    pub children: Vec<'a, ArgumentValue<'a>>,
}

impl<'a> ArgumentValues<'a> {
    pub fn new(ctx: &'a ExecContext) -> Self {
        ArgumentValues {
            children: Vec::new_in(&ctx.arena),
        }
    }

    /// Checks whether this argument set contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the argument stored under the given declared name.
    pub fn get(&self, name: &str) -> Option<&ArgumentValue<'a>> {
        self.children
            .iter()
            .find(|argument| argument.argument.name == name)
    }

    /// Replaces the value of a declared argument, returning whether the name was known.
    pub fn set(&mut self, name: &str, value: InputedValue<'a>) -> bool {
        match self
            .children
            .iter_mut()
            .find(|argument| argument.argument.name == name)
        {
            Some(argument) => {
                argument.value = value;
                true
            }
            None => false,
        }
    }

    /// Extracts raw values in declaration order for the resolver calling convention.
    pub fn values_for_resolver(&self, ctx: &'a ExecContext) -> std::vec::Vec<Value<'a>> {
        self.children
            .iter()
            .map(|argument| argument.value.raw_value(ctx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaScalar;
    use crate::value::{DefaultIn, PrintValue};

    fn object<'a>(ctx: &'a ExecContext, entries: &[(&'a str, Value<'a>)]) -> ObjectValue<'a> {
        let mut value = ObjectValue::default_in(&ctx.arena);
        for (name, entry) in entries {
            value.children.push(ObjectField {
                name: *name,
                value: entry.clone(),
            });
        }
        value
    }

    #[test]
    fn defaults_fill_missing_keys_only() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let mut filter = SchemaInputObject::new(&ctx, "Filter");
        filter.add_field(
            &ctx,
            SchemaInputField::with_default(
                "x",
                SchemaType::Scalar(int),
                ctx.alloc(Value::Int(0.into())),
            ),
        );
        filter.add_field(
            &ctx,
            SchemaInputField::with_default(
                "y",
                SchemaType::Scalar(int),
                ctx.alloc(Value::Int(2.into())),
            ),
        );

        let supplied = object(&ctx, &[("x", Value::Int(1.into()))]);
        let merged = apply_defaults(&ctx, &supplied, &filter);

        assert_eq!(merged.get("x"), Some(&Value::Int(1.into())));
        assert_eq!(merged.get("y"), Some(&Value::Int(2.into())));
        let keys: std::vec::Vec<_> = merged.children.iter().map(|field| field.name).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn defaults_recurse_into_shared_composite_keys() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let default_x = ctx.alloc(Value::Object(object(&ctx, &[("y", Value::Int(5.into()))])));

        let mut inner = SchemaInputObject::new(&ctx, "Inner");
        inner.add_field(&ctx, SchemaInputField::new("y", SchemaType::Scalar(int)));
        inner.add_field(&ctx, SchemaInputField::new("z", SchemaType::Scalar(int)));
        let inner = &*ctx.alloc(inner);

        let mut outer = SchemaInputObject::new(&ctx, "Outer");
        outer.add_field(
            &ctx,
            SchemaInputField::with_default("x", SchemaType::InputObject(inner), default_x),
        );

        let supplied = object(
            &ctx,
            &[("x", Value::Object(object(&ctx, &[("z", Value::Int(1.into()))])))],
        );
        let merged = apply_defaults(&ctx, &supplied, &outer);

        match merged.get("x") {
            Some(Value::Object(x)) => {
                let keys: std::vec::Vec<_> = x.children.iter().map(|field| field.name).collect();
                assert_eq!(keys, vec!["z", "y"]);
                assert_eq!(x.get("z"), Some(&Value::Int(1.into())));
                assert_eq!(x.get("y"), Some(&Value::Int(5.into())));
            }
            other => panic!("expected object under x, got {:?}", other),
        }
    }

    #[test]
    fn explicit_null_is_never_overwritten() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let mut filter = SchemaInputObject::new(&ctx, "Filter");
        filter.add_field(
            &ctx,
            SchemaInputField::with_default(
                "x",
                SchemaType::Scalar(int),
                ctx.alloc(Value::Int(7.into())),
            ),
        );

        let supplied = object(&ctx, &[("x", Value::Null)]);
        let merged = apply_defaults(&ctx, &supplied, &filter);
        assert_eq!(merged.get("x"), Some(&Value::Null));
    }

    #[test]
    fn non_composite_input_is_a_fatal_configuration_error() {
        let ctx = ExecContext::new();
        let filter = ctx.alloc(SchemaInputObject::new(&ctx, "Filter"));
        let result =
            InputedValue::create(&ctx, Value::Int(3.into()), &SchemaType::InputObject(filter));

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(!error.kind().is_recoverable());
    }

    #[test]
    fn single_value_coerces_to_singleton_list() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let list_type = SchemaType::Scalar(int).into_list(&ctx);

        let value = InputedValue::create(&ctx, Value::Int(4.into()), &list_type).unwrap();
        match &value {
            InputedValue::List(list) => {
                assert_eq!(list.items.len(), 1);
                assert_eq!(list.items[0], InputedValue::Literal(Value::Int(4.into())));
            }
            other => panic!("expected list, got {:?}", other),
        }

        let raw = value.raw_value(&ctx);
        match raw {
            Value::List(list) => assert_eq!(list.children.len(), 1),
            other => panic!("expected raw list, got {:?}", other),
        }
    }

    #[test]
    fn inputed_values_render_compact_and_pretty() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let list_type = SchemaType::Scalar(int).into_list(&ctx);

        let mut raw = ListValue::default_in(&ctx.arena);
        raw.children.push(Value::Int(1.into()));
        raw.children.push(Value::Int(2.into()));
        let value = InputedValue::create(&ctx, Value::List(raw), &list_type).unwrap();

        assert_eq!(value.print_value(), "[1, 2]");
        assert_eq!(value.pretty_print(), "[\n  1,\n  2\n]");

        let mut filter = SchemaInputObject::new(&ctx, "Filter");
        filter.add_field(&ctx, SchemaInputField::new("x", SchemaType::Scalar(int)));
        filter.add_field(
            &ctx,
            SchemaInputField::with_default(
                "y",
                SchemaType::Scalar(int),
                ctx.alloc(Value::Int(2.into())),
            ),
        );
        let filter = &*ctx.alloc(filter);

        let supplied = Value::Object(object(&ctx, &[("x", Value::Int(1.into()))]));
        let value =
            InputedValue::create(&ctx, supplied, &SchemaType::InputObject(filter)).unwrap();
        assert_eq!(value.print_value(), "{x: 1, y: 2}");
    }

    #[test]
    fn null_rejected_in_non_null_input_position() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let not_null = SchemaType::Scalar(int).into_nonnull(&ctx);

        let error = InputedValue::create(&ctx, Value::Null, &not_null).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
