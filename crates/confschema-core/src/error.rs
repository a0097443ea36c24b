//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - A validation failure is a single structured error: message plus the
//!   context path where it happened. It is built at the point of failure
//!   and propagated unchanged by every enclosing validator.
//! - Failures are fail-fast. Nothing in this workspace accumulates
//!   multiple validation errors or substitutes defaults on failure.

use thiserror::Error;

use crate::context::split_path;

/// A value did not satisfy a validator's contract.
///
/// Renders as `[<context>]: <message>` when a context is present, or just
/// `<message>` at the root of the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.context.as_deref(), .message))]
pub struct SchemaTypeError {
    message: String,
    context: Option<String>,
}

impl SchemaTypeError {
    /// Create an error located at `context` (`None` for the root).
    pub fn new(message: impl Into<String>, context: Option<&str>) -> Self {
        Self {
            message: message.into(),
            context: context.filter(|c| !c.is_empty()).map(str::to_owned),
        }
    }

    /// Standard type-mismatch error:
    /// `expected value of type [<expected>] but got [<actual>]`.
    pub fn type_mismatch(expected: &str, actual: &str, context: Option<&str>) -> Self {
        Self::new(
            format!("expected value of type [{expected}] but got [{actual}]"),
            context,
        )
    }

    /// The human-readable description, without location.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The context path of the failing value, `None` at the root.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The context path split into its segments.
    pub fn path(&self) -> Vec<String> {
        self.context.as_deref().map(split_path).unwrap_or_default()
    }
}

fn render(context: Option<&str>, message: &str) -> String {
    match context {
        Some(context) => format!("[{context}]: {message}"),
        None => message.to_owned(),
    }
}

/// Error while building a [`RawValue`](crate::RawValue) from a parsed source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueConversionError {
    /// NaN and infinities have no representation in the raw value tree.
    #[error("non-finite number {0} cannot be represented")]
    NonFiniteNumber(f64),
}
