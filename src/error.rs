//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across all resolution phases, and a
//! closed [ErrorKind] enumeration that determines how the resolution engine treats a failure.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which all resolution failures are converted into.
///
/// The error is split into a general message and a context string. For classification failures,
/// for instance, the context string is populated with a rendering of the offending value, while
/// for conformance failures the context names the expected and received types.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) kind: ErrorKind,
}

/// The closed set of failure categories the resolution engine distinguishes.
///
/// The split matters for null-propagation: recoverable kinds are caught by the nearest nullable
/// ancestor of the failing field, which substitutes `null` and records the error, while all other
/// kinds abort the resolution pass entirely.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// A resolver's output cannot satisfy its declared scalar, enum, or list shape, or a
    /// non-nullable position received `null`.
    InvalidResolvedValue,
    /// A resolver returned a concrete value inconsistent with its declared type, e.g. an object
    /// type that is not a member of the declared union.
    FieldResultTypeMismatch,
    /// The engine or schema was misused: malformed composite inputs, missing root or field
    /// definitions, or a value kind appearing in a position it can never occupy. Never
    /// recoverable.
    Configuration,
    /// A domain error raised by a resolver function. Passed through untranslated; the engine
    /// never substitutes `null` for these, leaving the policy to the caller.
    Resolver,
}

impl ErrorKind {
    /// Whether an error of this kind is absorbed by the nearest nullable ancestor instead of
    /// aborting the whole resolution pass.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidResolvedValue | ErrorKind::FieldResultTypeMismatch
        )
    }

    fn label(&self) -> &'static str {
        match self {
            ErrorKind::InvalidResolvedValue => "Invalid Resolved Value",
            ErrorKind::FieldResultTypeMismatch => "Field Result Type Mismatch",
            ErrorKind::Configuration => "Configuration Error",
            ErrorKind::Resolver => "Resolver Error",
        }
    }
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            context: None,
            kind,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(message: S, context: S, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            kind,
        }
    }

    /// Shorthand for a domain error raised from inside a resolver function.
    pub fn resolver<S: Into<String>>(message: S) -> Self {
        Self::new(message, ErrorKind::Resolver)
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the kind of the current error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = format!("{}: {}", self.kind.label(), self.message);
        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn print_with_context() {
        let error = Error::new_with_context(
            "value does not satisfy type Int",
            "got: \"abc\"",
            ErrorKind::InvalidResolvedValue,
        );
        assert_eq!(
            error.print(true),
            "Invalid Resolved Value: value does not satisfy type Int\ngot: \"abc\""
        );
        assert_eq!(
            error.print(false),
            "Invalid Resolved Value: value does not satisfy type Int"
        );
    }

    #[test]
    fn recoverability_split() {
        assert!(ErrorKind::InvalidResolvedValue.is_recoverable());
        assert!(ErrorKind::FieldResultTypeMismatch.is_recoverable());
        assert!(!ErrorKind::Configuration.is_recoverable());
        assert!(!ErrorKind::Resolver.is_recoverable());
    }
}
