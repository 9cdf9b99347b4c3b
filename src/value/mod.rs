//! # Value Model
//!
//! The `graphql_resolve::value` module contains every shape a value takes on its way through a
//! resolution pass:
//!
//! - [`Value`], the dynamic raw value a resolver function consumes and produces
//! - [`InputedValue`], an immutable constructed input value checked against an input type
//! - [`ResolvedValue`], a raw value after classification against its declared output type
//!
//! All of these are allocated within an [`ExecContext`], a context containing an arena that
//! defines the lifetime of one resolution pass. Raw values are ephemeral: they are produced once
//! per field invocation and abandoned after classification. Resolved values are constructed
//! bottom-up into the response tree and never mutated afterwards; the entire tree is handed to a
//! downstream serializer and dropped wholesale with the arena.
//!
//! The [`PrintValue`] trait renders raw and inputed values as compact single-line literals or as
//! pretty-indented multi-line text.

#[allow(clippy::module_inception)]
mod value;

mod conversion;
mod inputed;
mod printer;
mod resolved;

pub use conversion::*;
pub use inputed::*;
pub use printer::PrintValue;
pub use resolved::*;
pub use value::*;
