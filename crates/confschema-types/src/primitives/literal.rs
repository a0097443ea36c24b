use confschema_core::{RawValue, SchemaTypeError};

use crate::base::{Type, TypeOptions};

/// Accepts exactly one configured value.
#[derive(Debug, Clone)]
pub struct LiteralType {
    expected: RawValue,
    options: TypeOptions<RawValue>,
}

impl LiteralType {
    pub fn new(expected: impl Into<RawValue>) -> Self {
        Self::with_options(expected, TypeOptions::new())
    }

    pub fn with_options(expected: impl Into<RawValue>, options: TypeOptions<RawValue>) -> Self {
        Self {
            expected: expected.into(),
            options,
        }
    }
}

impl Type for LiteralType {
    type Output = RawValue;

    fn options(&self) -> &TypeOptions<RawValue> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "literal"
    }

    fn process(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<RawValue, SchemaTypeError> {
        if *value == self.expected {
            Ok(value.clone())
        } else {
            Err(SchemaTypeError::new(
                format!("expected value to equal [{}]", self.expected),
                context,
            ))
        }
    }
}
