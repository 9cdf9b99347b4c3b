//! # Schema Definitions
//!
//! The `graphql_resolve::schema` module contains the executable schema the resolution engine
//! runs against: the closed set of schema type kinds, field definitions carrying resolver
//! functions, and the directive contract with its extension hooks.
//!
//! A schema is built by a server process at startup, allocated inside an [`ExecContext`] that
//! outlives the requests resolved against it:
//!
//! ```
//! use graphql_resolve::{schema::*, value::*};
//!
//! let ctx = ExecContext::new();
//!
//! let resolve = resolver(&ctx, |ctx, _parent, _args| {
//!     Ok(Value::String(StringValue::new(ctx, "world")))
//! });
//!
//! let string = ctx.alloc(SchemaScalar::new("String"));
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(
//!     &ctx,
//!     SchemaField::new(&ctx, "hello", SchemaType::Scalar(string), resolve),
//! );
//! ```
//!
//! [More information on the type kinds.](SchemaType)
//!
//! [`ExecContext`]: crate::value::ExecContext

pub mod directive;
#[allow(clippy::module_inception)]
pub mod schema;

pub use directive::*;
pub use schema::*;
