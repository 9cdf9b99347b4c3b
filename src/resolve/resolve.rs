use super::classify::classify;
use crate::error::{Error, ErrorKind, Result};
use crate::schema::*;
use crate::selection::{FieldSet, OperationKind, RequestedField};
use crate::value::*;
use crate::visit::TypeVisitor;
use bumpalo::collections::Vec;
use std::mem;

/// The outcome of a resolution pass: the resolved tree alongside every recoverable error that
/// was absorbed by null-propagation.
///
/// Both halves are always exposed together; a partial tree with substituted nulls is only
/// interpretable next to the errors that produced those nulls. `data` is `None` when a
/// recoverable failure propagated past the root, which the pass still reports as success.
#[derive(Debug)]
pub struct Response<'a> {
    pub data: Option<TypeValue<'a>>,
    pub errors: std::vec::Vec<Error>,
}

/// Resolves a normalized selection against a root object type and a raw root value.
///
/// Fields resolve strictly in request order, depth-first; each resolver call completes before
/// the next begins. Recoverable failures null the nearest nullable ancestor and are collected
/// into the response, while configuration errors and resolver domain errors abort the pass as
/// `Err`.
pub fn resolve_selection<'a>(
    ctx: &'a ExecContext,
    root_type: &'a SchemaObject<'a>,
    selection: &'a FieldSet<'a>,
    root_value: Value<'a>,
) -> Result<Response<'a>> {
    let mut errors = std::vec::Vec::new();
    let parent = ResolvedValue::ObjectIntermediate(ObjectIntermediateValue {
        of_type: root_type,
        value: root_value,
    });
    let mut visitor = ResolveVisitor {
        ctx,
        fields: Some(selection),
        parent,
        errors: &mut errors,
    };

    match visitor.visit_object(root_type) {
        Ok(ResolvedValue::Type(data)) => Ok(Response {
            data: Some(data),
            errors,
        }),
        Ok(_) => Err(Error::new(
            "root resolution produced a non-object result",
            ErrorKind::Configuration,
        )),
        Err(error) if error.kind().is_recoverable() => {
            errors.push(error);
            Ok(Response { data: None, errors })
        }
        Err(error) => Err(error),
    }
}

/// Resolves a normalized selection against the schema's root type for the given operation kind.
pub fn resolve_operation<'a>(
    ctx: &'a ExecContext,
    schema: &Schema<'a>,
    operation_kind: OperationKind,
    selection: &'a FieldSet<'a>,
    root_value: Value<'a>,
) -> Result<Response<'a>> {
    let root_type = schema.get_root_type(operation_kind).ok_or_else(|| {
        let kind = match operation_kind {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        };
        Error::new(
            format!("schema does not define a {} root type", kind),
            ErrorKind::Configuration,
        )
    })?;

    resolve_selection(ctx, root_type, selection, root_value)
}

/// The resolution pass over the schema type kinds.
///
/// One instance is scoped to a single selection level: the sub-selection being satisfied and the
/// already-classified parent value at that level. Recursion into sub-selections and list
/// elements constructs fresh instances, so sibling and nested resolutions never share mutable
/// state beyond the error sink.
struct ResolveVisitor<'a, 'e> {
    ctx: &'a ExecContext,
    fields: Option<&'a FieldSet<'a>>,
    parent: ResolvedValue<'a>,
    errors: &'e mut std::vec::Vec<Error>,
}

impl<'a, 'e> ResolveVisitor<'a, 'e> {
    /// Resolves a single requested field against its definition.
    ///
    /// The hook order around the resolver call is fixed: definition `start` hooks, argument
    /// directives, argument materialization, definition `before` hooks (which may mutate the
    /// argument set), the resolver itself, classification, the conformance check, definition
    /// `after` hooks, and finally recursion into the sub-selection for non-null composites.
    fn resolve_field(
        &mut self,
        field: &'a SchemaField<'a>,
        requested: &'a RequestedField<'a>,
    ) -> Result<FieldValue<'a>> {
        for usage in field.directives.iter() {
            usage.directive.definition_start(&usage.arguments, &self.parent);
        }

        for argument in requested.arguments.children.iter() {
            for invocation in argument.directives.iter() {
                invocation
                    .directive
                    .resolve_argument(&invocation.arguments, &argument.value);
            }
        }

        let mut arguments = ArgumentValues::new(self.ctx);
        for declared in field.arguments.iter() {
            let value = match requested.arguments.get(declared.name) {
                Some(supplied) => {
                    InputedValue::create(self.ctx, supplied.value.clone(), &declared.input_type)?
                }
                None => match declared.default_value {
                    Some(default_value) => {
                        InputedValue::create(self.ctx, default_value.clone(), &declared.input_type)?
                    }
                    None => InputedValue::Literal(Value::Null),
                },
            };
            arguments.children.push(ArgumentValue {
                argument: declared,
                value,
            });
        }

        for usage in field.directives.iter() {
            usage
                .directive
                .definition_before(&usage.arguments, &self.parent, &mut arguments);
        }

        let raw_arguments = arguments.values_for_resolver(self.ctx);
        let parent_raw = match &self.parent {
            ResolvedValue::ObjectIntermediate(parent) => &parent.value,
            _ => {
                return Err(Error::new(
                    format!("field {} resolved without an object parent", field.name),
                    ErrorKind::Configuration,
                ))
            }
        };
        let raw_value = (field.resolve)(self.ctx, parent_raw, &raw_arguments)?;

        let resolved = classify(self.ctx, raw_value, &field.output_type, self.errors)?;

        if let Some(of_type) = resolved.of_type() {
            if !of_type.is_instance_of(&field.output_type) {
                return Err(Error::new_with_context(
                    format!(
                        "resolver for field {} returned a value of an incompatible type",
                        field.name
                    ),
                    format!(
                        "expected {}, got {}",
                        field.output_type.print_name(),
                        of_type.print_name()
                    ),
                    ErrorKind::FieldResultTypeMismatch,
                ));
            }
        }

        for usage in field.directives.iter() {
            usage
                .directive
                .definition_after(&usage.arguments, &resolved, &arguments);
        }

        let value = match resolved.of_type() {
            None => ResolvedValue::Null,
            Some(of_type) => {
                let mut nested = ResolveVisitor {
                    ctx: self.ctx,
                    fields: requested.fields,
                    parent: resolved,
                    errors: &mut *self.errors,
                };
                of_type.accept(&mut nested)?
            }
        };

        Ok(FieldValue { field, value })
    }
}

impl<'a, 'e> TypeVisitor<'a> for ResolveVisitor<'a, 'e> {
    type Output = Result<ResolvedValue<'a>>;

    fn visit_object(&mut self, object: &'a SchemaObject<'a>) -> Self::Output {
        let requested_fields = match self.fields {
            Some(fields) => fields,
            None => {
                return Err(Error::new(
                    format!("object type {} resolved without a sub-selection", object.name),
                    ErrorKind::Configuration,
                ))
            }
        };

        let mut resolved = Vec::new_in(&self.ctx.arena);

        'fields: for requested in requested_fields.iter() {
            if let Some(condition) = &requested.type_condition {
                if !SchemaType::Object(object).is_instance_of(condition) {
                    continue 'fields;
                }
            }

            for invocation in requested.directives.iter() {
                match invocation.directive.before_field(&invocation.arguments) {
                    FieldOutcome::Skip => continue 'fields,
                    FieldOutcome::Continue => {}
                }
            }

            let field = match object.field(requested.name) {
                Some(field) => field,
                None => {
                    return Err(Error::new(
                        format!(
                            "unknown field {} requested on type {}",
                            requested.name, object.name
                        ),
                        ErrorKind::Configuration,
                    ))
                }
            };

            let field_value = match self.resolve_field(field, requested) {
                Ok(field_value) => field_value,
                Err(error)
                    if error.kind().is_recoverable() && !field.output_type.is_non_null() =>
                {
                    self.errors.push(error);
                    FieldValue {
                        field,
                        value: ResolvedValue::Null,
                    }
                }
                Err(error) => return Err(error),
            };

            for invocation in requested.directives.iter() {
                match invocation
                    .directive
                    .after_field(&invocation.arguments, &field_value)
                {
                    FieldOutcome::Skip => continue 'fields,
                    FieldOutcome::Continue => {}
                }
            }

            resolved.push((requested.alias_or_name(), field_value));
        }

        Ok(ResolvedValue::Type(TypeValue {
            of_type: object,
            fields: resolved,
        }))
    }

    fn visit_list(&mut self, inner: &'a SchemaType<'a>) -> Self::Output {
        let parent = mem::replace(&mut self.parent, ResolvedValue::Null);
        let list = match parent {
            ResolvedValue::ListIntermediate(list) => list,
            _ => {
                return Err(Error::new(
                    "list type visited without a classified sequence",
                    ErrorKind::Configuration,
                ))
            }
        };

        // Directives apply to fields, never to list elements; no element is ever dropped here.
        let mut resolved = Vec::new_in(&self.ctx.arena);
        for element in list.elements {
            match element.of_type() {
                None => resolved.push(ResolvedValue::Null),
                Some(of_type) => {
                    let mut nested = ResolveVisitor {
                        ctx: self.ctx,
                        fields: self.fields,
                        parent: element,
                        errors: &mut *self.errors,
                    };
                    match of_type.accept(&mut nested) {
                        Ok(value) => resolved.push(value),
                        Err(error)
                            if error.kind().is_recoverable() && !inner.is_non_null() =>
                        {
                            self.errors.push(error);
                            resolved.push(ResolvedValue::Null);
                        }
                        Err(error) => return Err(error),
                    }
                }
            }
        }

        Ok(ResolvedValue::ListResolved(ListResolvedValue {
            of_type: list.of_type,
            elements: resolved,
        }))
    }

    fn visit_not_null(&mut self, inner: &'a SchemaType<'a>) -> Self::Output {
        inner.accept(self)
    }

    fn visit_scalar(&mut self, _scalar: &'a SchemaScalar<'a>) -> Self::Output {
        Ok(mem::replace(&mut self.parent, ResolvedValue::Null))
    }

    fn visit_enum(&mut self, _schema_enum: &'a SchemaEnum<'a>) -> Self::Output {
        Ok(mem::replace(&mut self.parent, ResolvedValue::Null))
    }

    fn visit_interface(&mut self, interface: &'a SchemaInterface<'a>) -> Self::Output {
        // Classification always lands on a concrete member type before the engine recurses.
        Err(Error::new(
            format!("interface {} cannot own a resolved selection", interface.name),
            ErrorKind::Configuration,
        ))
    }

    fn visit_union(&mut self, schema_union: &'a SchemaUnion<'a>) -> Self::Output {
        Err(Error::new(
            format!("union {} cannot own a resolved selection", schema_union.name),
            ErrorKind::Configuration,
        ))
    }

    fn visit_input_object(&mut self, input_object: &'a SchemaInputObject<'a>) -> Self::Output {
        Err(Error::new(
            format!("input type {} cannot own a resolved selection", input_object.name),
            ErrorKind::Configuration,
        ))
    }
}
