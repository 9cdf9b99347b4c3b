//! # Resolving Normalized Requests
//!
//! The `graphql_resolve::resolve` module contains the resolution engine: given a schema, a
//! normalized selection, and a raw root value, it produces the ordered response tree and the
//! list of recoverable errors collected along the way.
//!
//! The engine is two [`TypeVisitor`](crate::visit::TypeVisitor) passes working in tandem:
//!
//! - [`classify`] turns a resolver's untyped raw value into a
//!   [`ResolvedValue`](crate::value::ResolvedValue) validated against the field's declared type.
//! - [`resolve_selection`] walks the selection depth-first, running directive hooks around each
//!   field's resolver, recursing into sub-selections and list elements with fresh engine
//!   instances, and enforcing null-propagation: a recoverable failure nulls the nearest nullable
//!   ancestor while sibling fields continue to resolve.
//!
//! ```
//! use graphql_resolve::{resolve::*, schema::*, selection::*, value::*};
//!
//! let ctx = ExecContext::new();
//!
//! let resolve = resolver(&ctx, |ctx, _parent, _args| {
//!     Ok(Value::String(StringValue::new(ctx, "world")))
//! });
//! let string = ctx.alloc(SchemaScalar::new("String"));
//! let query = ctx.alloc({
//!     let mut query = SchemaObject::new(&ctx, "Query");
//!     query.add_field(
//!         &ctx,
//!         SchemaField::new(&ctx, "hello", SchemaType::Scalar(string), resolve),
//!     );
//!     query
//! });
//!
//! let mut selection = FieldSet::default_in(&ctx.arena);
//! selection.fields.push(RequestedField::new_leaf(&ctx, "hello"));
//! let selection = ctx.alloc(selection);
//!
//! let response = resolve_selection(&ctx, query, selection, Value::Null).unwrap();
//! assert!(response.errors.is_empty());
//! assert_eq!(response.data.unwrap().keys().collect::<Vec<_>>(), vec!["hello"]);
//! ```

mod classify;
#[allow(clippy::module_inception)]
mod resolve;

pub use classify::classify;
pub use resolve::*;
