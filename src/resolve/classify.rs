use crate::error::{Error, ErrorKind, Result};
use crate::schema::*;
use crate::value::*;
use crate::visit::TypeVisitor;
use bumpalo::collections::Vec;
use std::mem;

/// Classifies a resolver's raw output against the schema type it must conform to.
///
/// On success the raw value is wrapped into the matching [`ResolvedValue`] form: leaves are
/// validated and kept unchanged, objects become intermediates carrying their concrete type,
/// abstract types are disambiguated through their resolver callback, and list elements are
/// classified recursively with order and length preserved exactly.
///
/// A failing element of a list with a nullable inner type is recorded into `errors` and replaced
/// by `null`; every other failure is returned to the caller, which decides based on the declared
/// nullability whether to absorb it.
pub fn classify<'a>(
    ctx: &'a ExecContext,
    value: Value<'a>,
    of_type: &SchemaType<'a>,
    errors: &mut std::vec::Vec<Error>,
) -> Result<ResolvedValue<'a>> {
    let mut visitor = ClassifyVisitor { ctx, value, errors };
    of_type.accept(&mut visitor)
}

/// The classification pass over the schema type kinds.
///
/// Holds the raw value under classification; the value is taken out of the visitor at the single
/// kind that consumes it, which keeps the `NotNull` recursion free to delegate inward.
struct ClassifyVisitor<'a, 'e> {
    ctx: &'a ExecContext,
    value: Value<'a>,
    errors: &'e mut std::vec::Vec<Error>,
}

impl<'a, 'e> ClassifyVisitor<'a, 'e> {
    #[inline]
    fn take_value(&mut self) -> Value<'a> {
        mem::replace(&mut self.value, Value::Null)
    }
}

impl<'a, 'e> TypeVisitor<'a> for ClassifyVisitor<'a, 'e> {
    type Output = Result<ResolvedValue<'a>>;

    fn visit_scalar(&mut self, scalar: &'a SchemaScalar<'a>) -> Self::Output {
        let value = self.take_value();
        if value.is_null() {
            return Ok(ResolvedValue::Null);
        }

        if !scalar.validates(&value) {
            return Err(Error::new_with_context(
                format!("value does not satisfy type {}", scalar.name),
                format!("got: {}", value.print_value()),
                ErrorKind::InvalidResolvedValue,
            ));
        }

        Ok(ResolvedValue::Scalar(ScalarValue {
            of_type: SchemaType::Scalar(scalar),
            value,
        }))
    }

    fn visit_enum(&mut self, schema_enum: &'a SchemaEnum<'a>) -> Self::Output {
        let value = self.take_value();
        if value.is_null() {
            return Ok(ResolvedValue::Null);
        }

        if !schema_enum.validates(&value) {
            return Err(Error::new_with_context(
                format!("value does not satisfy type {}", schema_enum.name),
                format!("got: {}", value.print_value()),
                ErrorKind::InvalidResolvedValue,
            ));
        }

        Ok(ResolvedValue::Scalar(ScalarValue {
            of_type: SchemaType::Enum(schema_enum),
            value,
        }))
    }

    fn visit_object(&mut self, object: &'a SchemaObject<'a>) -> Self::Output {
        let value = self.take_value();
        if value.is_null() {
            return Ok(ResolvedValue::Null);
        }

        // An object field's declared type is always concrete, no runtime discovery needed.
        Ok(ResolvedValue::ObjectIntermediate(ObjectIntermediateValue {
            of_type: object,
            value,
        }))
    }

    fn visit_interface(&mut self, interface: &'a SchemaInterface<'a>) -> Self::Output {
        let value = self.take_value();
        if value.is_null() {
            return Ok(ResolvedValue::Null);
        }

        // The callback's choice is checked against the declared type by the engine's
        // conformance step, so a non-implementor cannot slip through here.
        let concrete = (interface.resolve_concrete)(&value);
        Ok(ResolvedValue::ObjectIntermediate(ObjectIntermediateValue {
            of_type: concrete,
            value,
        }))
    }

    fn visit_union(&mut self, schema_union: &'a SchemaUnion<'a>) -> Self::Output {
        let value = self.take_value();
        if value.is_null() {
            return Ok(ResolvedValue::Null);
        }

        let concrete = (schema_union.resolve_concrete)(&value);
        Ok(ResolvedValue::ObjectIntermediate(ObjectIntermediateValue {
            of_type: concrete,
            value,
        }))
    }

    fn visit_input_object(&mut self, input_object: &'a SchemaInputObject<'a>) -> Self::Output {
        Err(Error::new(
            format!(
                "input type {} can never appear as a resolved output value",
                input_object.name
            ),
            ErrorKind::Configuration,
        ))
    }

    fn visit_list(&mut self, inner: &'a SchemaType<'a>) -> Self::Output {
        let value = self.take_value();
        let list = match value {
            Value::Null => return Ok(ResolvedValue::Null),
            Value::List(list) => list,
            other => {
                return Err(Error::new_with_context(
                    format!("expected a sequence for type [{}]", inner.print_name()),
                    format!("got: {}", other.print_value()),
                    ErrorKind::InvalidResolvedValue,
                ))
            }
        };

        let mut elements = Vec::new_in(&self.ctx.arena);
        for item in list {
            let mut element_visitor = ClassifyVisitor {
                ctx: self.ctx,
                value: item,
                errors: &mut *self.errors,
            };
            match inner.accept(&mut element_visitor) {
                Ok(element) => elements.push(element),
                Err(error) if error.kind().is_recoverable() && !inner.is_non_null() => {
                    self.errors.push(error);
                    elements.push(ResolvedValue::Null);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(ResolvedValue::ListIntermediate(ListIntermediateValue {
            of_type: SchemaType::List(inner),
            elements,
        }))
    }

    fn visit_not_null(&mut self, inner: &'a SchemaType<'a>) -> Self::Output {
        if self.value.is_null() {
            return Err(Error::new(
                format!("received null for non-nullable type {}!", inner.print_name()),
                ErrorKind::InvalidResolvedValue,
            ));
        }

        inner.accept(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DefaultIn;

    fn list<'a>(ctx: &'a ExecContext, items: &[Value<'a>]) -> Value<'a> {
        let mut value = ListValue::default_in(&ctx.arena);
        for item in items {
            value.children.push(item.clone());
        }
        Value::List(value)
    }

    #[test]
    fn scalars_wrap_unchanged_and_reject_mismatches() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let mut errors = vec![];

        let resolved = classify(
            &ctx,
            Value::Int(42.into()),
            &SchemaType::Scalar(int),
            &mut errors,
        )
        .unwrap();
        assert_eq!(resolved.raw(), Some(&Value::Int(42.into())));

        let error = classify(
            &ctx,
            Value::String(StringValue::new(&ctx, "abc")),
            &SchemaType::Scalar(int),
            &mut errors,
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidResolvedValue);
        assert_eq!(
            error.print(true),
            "Invalid Resolved Value: value does not satisfy type Int\ngot: \"abc\""
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn null_is_valid_for_nullable_leaves() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let mut errors = vec![];

        let resolved =
            classify(&ctx, Value::Null, &SchemaType::Scalar(int), &mut errors).unwrap();
        assert!(resolved.is_null());
    }

    #[test]
    fn not_null_rejects_null_at_any_depth() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let not_null = SchemaType::Scalar(int).into_nonnull(&ctx);
        let mut errors = vec![];

        let error = classify(&ctx, Value::Null, &not_null, &mut errors).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidResolvedValue);
        assert_eq!(
            error.message(),
            "received null for non-nullable type Int!"
        );
    }

    #[test]
    fn non_sequence_for_list_type_is_invalid() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let list_type = SchemaType::Scalar(int).into_list(&ctx);
        let mut errors = vec![];

        let error = classify(&ctx, Value::Int(1.into()), &list_type, &mut errors).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidResolvedValue);
    }

    #[test]
    fn list_elements_preserve_order_and_nulls() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let list_type = SchemaType::Scalar(int).into_list(&ctx);
        let mut errors = vec![];

        let raw = list(
            &ctx,
            &[Value::Int(1.into()), Value::Null, Value::Int(3.into())],
        );
        let resolved = classify(&ctx, raw, &list_type, &mut errors).unwrap();
        match resolved {
            ResolvedValue::ListIntermediate(value) => {
                assert_eq!(value.elements.len(), 3);
                assert!(!value.elements[0].is_null());
                assert!(value.elements[1].is_null());
                assert!(!value.elements[2].is_null());
            }
            other => panic!("expected a classified list, got {:?}", other),
        }
        assert!(errors.is_empty());
    }

    #[test]
    fn failing_nullable_element_becomes_null_and_is_recorded() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let list_type = SchemaType::Scalar(int).into_list(&ctx);
        let mut errors = vec![];

        let raw = list(
            &ctx,
            &[
                Value::Int(1.into()),
                Value::String(StringValue::new(&ctx, "abc")),
            ],
        );
        let resolved = classify(&ctx, raw, &list_type, &mut errors).unwrap();
        match resolved {
            ResolvedValue::ListIntermediate(value) => {
                assert_eq!(value.elements.len(), 2);
                assert!(value.elements[1].is_null());
            }
            other => panic!("expected a classified list, got {:?}", other),
        }
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn failing_non_null_element_raises_out_of_the_list() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let list_type = SchemaType::Scalar(int)
            .into_nonnull(&ctx)
            .into_list(&ctx);
        let mut errors = vec![];

        let raw = list(&ctx, &[Value::Int(1.into()), Value::Null]);
        let error = classify(&ctx, raw, &list_type, &mut errors).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidResolvedValue);
        assert!(errors.is_empty());
    }

    #[test]
    fn abstract_types_delegate_to_their_callback() {
        let ctx = ExecContext::new();
        let dog = ctx.alloc(SchemaObject::new(&ctx, "Dog"));
        let resolve_concrete = concrete_resolver(&ctx, move |_| dog);
        let pet = ctx.alloc({
            let mut pet = SchemaUnion::new(&ctx, "Pet", resolve_concrete);
            pet.add_possible_type(&ctx, "Dog");
            pet
        });
        let mut errors = vec![];

        let resolved = classify(
            &ctx,
            Value::Boolean(true.into()),
            &SchemaType::Union(pet),
            &mut errors,
        )
        .unwrap();
        match resolved {
            ResolvedValue::ObjectIntermediate(value) => assert_eq!(value.of_type.name, "Dog"),
            other => panic!("expected an object intermediate, got {:?}", other),
        }
    }

    #[test]
    fn input_objects_never_classify_as_output() {
        let ctx = ExecContext::new();
        let filter = ctx.alloc(SchemaInputObject::new(&ctx, "Filter"));
        let mut errors = vec![];

        let error = classify(
            &ctx,
            Value::Null,
            &SchemaType::InputObject(filter),
            &mut errors,
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
