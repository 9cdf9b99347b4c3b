//! # Visiting Schema Types
//!
//! The `graphql_resolve::visit` module contains the double-dispatch contract over the closed set
//! of schema type kinds. Mainly, this module exposes one trait relevant to this task:
//!
//! - The [`TypeVisitor`] trait can be used to implement a visitor over the eight kinds.
//!
//! This works via [`SchemaType::accept`], which dispatches a type to exactly one of the eight
//! visit methods. This is the sole mechanism by which classification and resolution stay closed
//! over the kind set without ad hoc type switches at call sites; both engine passes in
//! [`resolve`](crate::resolve) are `TypeVisitor` implementations.
//!
//! In this example we'll define a visitor that renders a type in wrapping notation:
//!
//! ```
//! use graphql_resolve::{schema::*, value::*, visit::*};
//!
//! struct PrintType {
//!     out: String,
//! }
//!
//! impl<'a> TypeVisitor<'a> for PrintType {
//!     type Output = ();
//!
//!     fn visit_scalar(&mut self, scalar: &'a SchemaScalar<'a>) {
//!         self.out.push_str(scalar.name);
//!     }
//!
//!     fn visit_enum(&mut self, schema_enum: &'a SchemaEnum<'a>) {
//!         self.out.push_str(schema_enum.name);
//!     }
//!
//!     fn visit_object(&mut self, object: &'a SchemaObject<'a>) {
//!         self.out.push_str(object.name);
//!     }
//!
//!     fn visit_interface(&mut self, interface: &'a SchemaInterface<'a>) {
//!         self.out.push_str(interface.name);
//!     }
//!
//!     fn visit_union(&mut self, schema_union: &'a SchemaUnion<'a>) {
//!         self.out.push_str(schema_union.name);
//!     }
//!
//!     fn visit_input_object(&mut self, input_object: &'a SchemaInputObject<'a>) {
//!         self.out.push_str(input_object.name);
//!     }
//!
//!     fn visit_list(&mut self, inner: &'a SchemaType<'a>) {
//!         self.out.push('[');
//!         inner.accept(self);
//!         self.out.push(']');
//!     }
//!
//!     fn visit_not_null(&mut self, inner: &'a SchemaType<'a>) {
//!         inner.accept(self);
//!         self.out.push('!');
//!     }
//! }
//!
//! let ctx = ExecContext::new();
//! let int = ctx.alloc(SchemaScalar::new("Int"));
//! let of_type = SchemaType::Scalar(int).into_nonnull(&ctx).into_list(&ctx);
//!
//! let mut visitor = PrintType { out: String::new() };
//! of_type.accept(&mut visitor);
//! assert_eq!(visitor.out, "[Int!]");
//! ```

mod visitor;

pub use visitor::*;
