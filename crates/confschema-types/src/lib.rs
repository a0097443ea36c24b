//! # confschema-types — Composable Type Validators
//!
//! Every validator implements [`Type`]: given a [`RawValue`] and a context
//! path, it returns a strongly-typed value or a [`SchemaTypeError`] that
//! names where and why validation failed. Composite validators hold their
//! children as generic `Type` parameters (or `Box<dyn Type<Output = T>>`)
//! and extend the context path before delegating, so errors from deep
//! inside a document arrive already located.
//!
//! ## Validators
//!
//! - [`MapOfType`] — associative input (plain records or native maps),
//!   validating every key and every value.
//! - [`StringType`], [`NumberType`], [`IntegerType`], [`BooleanType`],
//!   [`LiteralType`] — primitives. None of them coerces: a number is never
//!   accepted where a string is expected, or the other way round.
//!
//! ## Crate Policy
//!
//! - Validators are immutable after construction and hold no per-call
//!   state, so one instance may validate concurrently from many threads.
//! - Validation is fail-fast: the first failure aborts the call.

pub mod base;
pub mod map;
pub mod primitives;

pub use base::{CustomValidator, Type, TypeOptions};
pub use confschema_core::{extend, RawValue, SchemaTypeError};
pub use map::{InputShape, MapOfType, RawEntry};
pub use primitives::{BooleanType, IntegerType, LiteralType, NumberType, StringType};
