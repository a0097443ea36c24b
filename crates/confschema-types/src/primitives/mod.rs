//! # Primitive Validators
//!
//! Leaf validators for scalar input. They check kind and the bounds they
//! were configured with, and never coerce between kinds.

mod boolean;
mod literal;
mod number;
mod string;

pub use boolean::BooleanType;
pub use literal::LiteralType;
pub use number::{IntegerType, NumberType};
pub use string::StringType;
