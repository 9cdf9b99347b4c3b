//! # JSON Conversion
//!
//! The `graphql_resolve::json` module contains utilities to convert from and to `serde_json`
//! values at the crate's boundaries: raw values entering the engine from stores or transports,
//! and resolved trees leaving it towards a serializer.
//!
//! The [`ValueToJson`] trait allows conversion to `serde_json` values using a `to_json` method
//! on any given raw value. Resolved trees, errors, and full [`Response`]s additionally implement
//! [`serde::Serialize`] directly, so a transport can stream them to output without building an
//! intermediate document.
//!
//! The module otherwise only contains a handful of utility functions:
//!
//! - [`value_from_json`] is used to convert any given JSON value to a raw value without casting.
//! - [`value_from_json_typed`] is used to convert a JSON value while casting it to a schema type.
//! - [`json_from_resolved`] is used to serialize a resolved value tree.
//! - [`json_from_type_value`] is used to serialize a resolved object.
//! - [`json_from_response`] is used to render a full response envelope with data and errors.
//!
//! The JSON object representation used here preserves insertion order, which keeps the
//! response-key order of resolved trees intact through serialization.
//!
//! [`Response`]: crate::resolve::Response

#[cfg(feature = "json")]
extern crate serde_json;

#[cfg(feature = "json")]
extern crate serde;

mod conversion;
mod serialize;
mod values;

pub use conversion::*;
pub use values::*;
