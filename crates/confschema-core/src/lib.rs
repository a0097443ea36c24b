//! # confschema-core — Foundational Types for confschema
//!
//! This crate is the leaf of the confschema workspace. It defines the
//! pieces every validator shares, independent of any concrete validator:
//!
//! 1. **`RawValue`.** The untyped input tree produced by parsing a
//!    configuration source or an API payload. Plain attribute records and
//!    native associative containers are distinct variants, so input-shape
//!    detection is an exhaustive `match` rather than runtime duck-typing.
//!
//! 2. **Context paths.** [`extend`] derives a child path from a parent
//!    path and a segment. Paths are plain strings and are never mutated
//!    in place; the root context is `None`.
//!
//! 3. **`SchemaTypeError`.** A validation failure: a human-readable
//!    message plus the context path at the point of failure.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `confschema-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod context;
pub mod error;
pub mod value;

pub use context::extend;
pub use error::{SchemaTypeError, ValueConversionError};
pub use value::RawValue;
