//! # Normalized Selections
//!
//! The `graphql_resolve::selection` module contains the request structures the resolution engine
//! consumes. These are produced by an external validation and normalization step: variables are
//! substituted, fragments are expanded into per-field type conditions, and every referenced
//! field, argument, and directive is known to exist on the schema. The structures here are
//! immutable once constructed and only describe *what* was requested; the engine pairs them with
//! schema definitions to decide *how* to resolve them.
//!
//! A [`FieldSet`] is an ordered list of [`RequestedField`]s; that order is the response-key order
//! of the resolved result, verbatim.

use crate::schema::{ArgumentDirective, FieldDirective, SchemaType};
use crate::value::{DefaultIn, ExecContext, Value};
use bumpalo::collections::Vec;

/// The kind of operation a request resolves against.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// An Argument carrying a name and an already-resolved raw value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// An ordered list of resolved Arguments, as attached to directive invocations and usages.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the value supplied under the given argument name, if any.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.children
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| &argument.value)
    }
}

impl<'a> DefaultIn<'a> for Arguments<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Arguments {
            children: Vec::new_in(arena),
        }
    }
}

/// A request directive invocation: the directive paired with the resolved arguments it was
/// invoked with, e.g. `@skip(if: true)`.
pub struct DirectiveInvocation<'a> {
    pub directive: &'a dyn FieldDirective<'a>,
    pub arguments: Arguments<'a>,
}

impl<'a> DirectiveInvocation<'a> {
    #[inline]
    pub fn new(directive: &'a dyn FieldDirective<'a>, arguments: Arguments<'a>) -> Self {
        DirectiveInvocation {
            directive,
            arguments,
        }
    }
}

impl<'a> std::fmt::Debug for DirectiveInvocation<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveInvocation")
            .field("name", &self.directive.name())
            .finish_non_exhaustive()
    }
}

/// A directive invocation attached to a single argument value.
pub struct ArgumentDirectiveInvocation<'a> {
    pub directive: &'a dyn ArgumentDirective<'a>,
    pub arguments: Arguments<'a>,
}

impl<'a> ArgumentDirectiveInvocation<'a> {
    #[inline]
    pub fn new(directive: &'a dyn ArgumentDirective<'a>, arguments: Arguments<'a>) -> Self {
        ArgumentDirectiveInvocation {
            directive,
            arguments,
        }
    }
}

impl<'a> std::fmt::Debug for ArgumentDirectiveInvocation<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentDirectiveInvocation")
            .field("name", &self.directive.name())
            .finish_non_exhaustive()
    }
}

/// A resolved argument on a requested field, in the order it appeared in the request.
///
/// The engine reorders arguments into declaration order before they reach the resolver; the
/// request order here is only observable to argument directives.
#[derive(Debug)]
pub struct RequestedArgument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub directives: Vec<'a, ArgumentDirectiveInvocation<'a>>,
}

impl<'a> RequestedArgument<'a> {
    #[inline]
    pub fn new(ctx: &'a ExecContext, name: &'a str, value: Value<'a>) -> Self {
        RequestedArgument {
            name,
            value,
            directives: Vec::new_in(&ctx.arena),
        }
    }
}

/// The ordered resolved arguments of a requested field.
#[derive(Debug)]
pub struct RequestedArguments<'a> {
    pub children: Vec<'a, RequestedArgument<'a>>,
}

impl<'a> RequestedArguments<'a> {
    /// Checks whether this list of arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the argument supplied under the given name, if any.
    pub fn get(&self, name: &str) -> Option<&RequestedArgument<'a>> {
        self.children.iter().find(|argument| argument.name == name)
    }
}

impl<'a> DefaultIn<'a> for RequestedArguments<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        RequestedArguments {
            children: Vec::new_in(arena),
        }
    }
}

/// A single normalized requested field.
///
/// Fragments no longer exist at this stage: a fragment spread was flattened into its fields,
/// each carrying the fragment's type condition. A field with a type condition is only resolved
/// when the parent's runtime concrete type satisfies the condition; otherwise it is dropped
/// without producing a response key.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug)]
pub struct RequestedField<'a> {
    /// The field's `alias`, which is used to request information under a different name than the
    /// field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// The field's `name`, which names a resolvable field on the parent object type.
    pub name: &'a str,
    /// A type condition inherited from the fragment this field was expanded out of, if any.
    pub type_condition: Option<SchemaType<'a>>,
    /// Resolved arguments in request order.
    ///
    /// When no arguments were passed, this is an empty list, as can be checked using
    /// `RequestedArguments::is_empty`.
    pub arguments: RequestedArguments<'a>,
    /// Request directives annotating this field, in invocation order.
    pub directives: Vec<'a, DirectiveInvocation<'a>>,
    /// The nested selection to resolve below this field, present exactly when the field's output
    /// type is a composite.
    pub fields: Option<&'a FieldSet<'a>>,
}

impl<'a> RequestedField<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    ///
    /// This is the response key the field's result is recorded under.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// All sub-lists, like `arguments` and `directives`, will be created as empty defaults.
    #[inline]
    pub fn new_leaf(ctx: &'a ExecContext, name: &'a str) -> Self {
        RequestedField {
            alias: None,
            name,
            type_condition: None,
            arguments: RequestedArguments::default_in(&ctx.arena),
            directives: Vec::new_in(&ctx.arena),
            fields: None,
        }
    }

    /// Creates a new leaf field with the given `name` and `alias`.
    ///
    /// All sub-lists, like `arguments` and `directives`, will be created as empty defaults.
    #[inline]
    pub fn new_aliased_leaf(ctx: &'a ExecContext, alias: &'a str, name: &'a str) -> Self {
        RequestedField {
            alias: Some(alias),
            name,
            type_condition: None,
            arguments: RequestedArguments::default_in(&ctx.arena),
            directives: Vec::new_in(&ctx.arena),
            fields: None,
        }
    }
}

/// An ordered set of requested fields, the unit the resolution engine walks.
///
/// Field order is request order and becomes response-key order, never schema declaration order.
#[derive(Debug)]
pub struct FieldSet<'a> {
    pub fields: Vec<'a, RequestedField<'a>>,
}

impl<'a> FieldSet<'a> {
    /// Checks whether this set contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RequestedField<'a>> {
        self.fields.iter()
    }
}

impl<'a> DefaultIn<'a> for FieldSet<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        FieldSet {
            fields: Vec::new_in(arena),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ExecContext;

    #[test]
    fn alias_or_name_prefers_alias() {
        let ctx = ExecContext::new();
        let plain = RequestedField::new_leaf(&ctx, "hero");
        let aliased = RequestedField::new_aliased_leaf(&ctx, "mainCharacter", "hero");

        assert_eq!(plain.alias_or_name(), "hero");
        assert_eq!(aliased.alias_or_name(), "mainCharacter");
        assert!(plain.arguments.is_empty());
        assert!(plain.fields.is_none());
    }

    #[test]
    fn arguments_lookup_by_name() {
        let ctx = ExecContext::new();
        let mut arguments = RequestedArguments::default_in(&ctx.arena);
        arguments.children.push(RequestedArgument::new(
            &ctx,
            "episode",
            Value::Enum("EMPIRE".into()),
        ));

        assert!(arguments.get("episode").is_some());
        assert!(arguments.get("limit").is_none());
    }
}
