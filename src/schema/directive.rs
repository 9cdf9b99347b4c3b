use crate::selection::Arguments;
use crate::value::{ArgumentValues, FieldValue, ResolvedValue, Value};

/// A directive signal that is returned from field-location hooks to alter the flow of
/// resolution.
///
/// The default hooks all return `FieldOutcome::Continue`, which resolves the field as usual.
/// `Skip` may be returned from a `before` hook to abort a field before its resolver runs, or
/// from an `after` hook to discard an already-produced field result; in both cases the field
/// contributes no response key.
///
/// The enumeration is closed and every consumption site matches it exhaustively, so a hook is
/// statically unable to produce an out-of-contract outcome.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FieldOutcome {
    /// Continue resolving the field as usual.
    Continue,
    /// Drop the field from the response without resolving it any further.
    Skip,
}

/// Trait for directives attached to a field in a request.
///
/// Hooks run in the order the directives appear on the requested field. A `Skip` from
/// `before_field` short-circuits the remaining `before` hooks and the resolver itself.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
pub trait FieldDirective<'a> {
    /// The name this directive is invoked under, e.g. `skip` for `@skip`.
    fn name(&self) -> &'a str;

    /// Called before the field's resolver runs, with the directive's own arguments.
    fn before_field(&self, _arguments: &Arguments<'a>) -> FieldOutcome {
        FieldOutcome::Continue
    }

    /// Called after the field was resolved, with the directive's own arguments and the produced
    /// field result. Returning `Skip` discards the result; the field is not re-resolved.
    fn after_field(&self, _arguments: &Arguments<'a>, _result: &FieldValue<'a>) -> FieldOutcome {
        FieldOutcome::Continue
    }
}

/// Trait for directives attached to a field definition in the schema.
///
/// These hooks observe and steer every invocation of the field's resolver, regardless of the
/// request. `definition_before` is the only hook that may mutate state the engine owns: it
/// receives the materialized argument set before it is flattened for the resolver call.
pub trait FieldDefinitionDirective<'a> {
    /// The name this directive was declared under.
    fn name(&self) -> &'a str;

    /// Called first, with the parent's resolved value. Observation only.
    fn definition_start(&self, _arguments: &Arguments<'a>, _parent: &ResolvedValue<'a>) {}

    /// Called after argument materialization and before the resolver runs. May validate or
    /// mutate the argument set.
    fn definition_before(
        &self,
        _arguments: &Arguments<'a>,
        _parent: &ResolvedValue<'a>,
        _args: &mut ArgumentValues<'a>,
    ) {
    }

    /// Called with the classified resolver result. Observation only.
    fn definition_after(
        &self,
        _arguments: &Arguments<'a>,
        _resolved: &ResolvedValue<'a>,
        _args: &ArgumentValues<'a>,
    ) {
    }
}

/// Trait for directives attached to an argument value in a request.
///
/// These run before the argument set is materialized, e.g. to record that a deprecated argument
/// was supplied.
pub trait ArgumentDirective<'a> {
    /// The name this directive is invoked under.
    fn name(&self) -> &'a str;

    /// Called with the directive's own arguments and the supplied argument value.
    fn resolve_argument(&self, _arguments: &Arguments<'a>, _value: &Value<'a>) {}
}

/// A directive attached to a field definition, pairing the directive with the constant arguments
/// it was declared with. Usages run in attachment order.
pub struct DirectiveUsage<'a> {
    pub directive: &'a dyn FieldDefinitionDirective<'a>,
    pub arguments: Arguments<'a>,
}

impl<'a> DirectiveUsage<'a> {
    #[inline]
    pub fn new(directive: &'a dyn FieldDefinitionDirective<'a>, arguments: Arguments<'a>) -> Self {
        DirectiveUsage {
            directive,
            arguments,
        }
    }
}

impl<'a> std::fmt::Debug for DirectiveUsage<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveUsage")
            .field("name", &self.directive.name())
            .finish_non_exhaustive()
    }
}
