//! `graphql_resolve`
//! =========
//!
//! _Stupendously fast and easy GraphQL request resolution._
//!
//! The **`graphql_resolve`** library follows two goals:
//!
//! - To support a pleasant-to-use API for resolving GraphQL requests against a schema
//! - To be stupendously fast at producing resolved response trees
//!
//! In short, _surprise!_ The `graphql_resolve` crate while handling a part of GraphQL does not
//! aim to parse, validate, or transport GraphQL requests. Those are one-off, per-request text
//! operations with many excellent implementations, and a server embedding this crate is expected
//! to bring its own: requests arrive here already validated and normalized, with fragments
//! expanded and variables substituted.
//!
//! A harder focus is the hot path that runs for every field of every request: dispatching over
//! the schema's type kinds, validating what resolver functions return, running directive
//! extension hooks in a fixed order, and assembling an ordered response tree with exact
//! null-propagation semantics. Field throughput is what keeps a GraphQL layer competitive with
//! plainer protocols, and the engine here resolves entire requests out of a single arena
//! allocation that is dropped wholesale afterwards.
//!
//! As such, this library focuses on just executing normalized GraphQL selections for the purpose
//! of embedding in GraphQL servers and intermediary layers, which operate between transports and
//! application resolver functions.
//!
//! [A good place to start learning more about this crate is the `resolve` module...](resolve)

pub mod error;
pub mod resolve;
pub mod schema;
pub mod selection;
pub mod value;
pub mod visit;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
