use confschema_core::{RawValue, SchemaTypeError};

use crate::base::{Type, TypeOptions};

/// Accepts `true` or `false`; the strings `"true"`/`"false"` are rejected.
#[derive(Debug, Clone, Default)]
pub struct BooleanType {
    options: TypeOptions<bool>,
}

impl BooleanType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TypeOptions<bool>) -> Self {
        Self { options }
    }
}

impl Type for BooleanType {
    type Output = bool;

    fn options(&self) -> &TypeOptions<bool> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "boolean"
    }

    fn process(&self, value: &RawValue, context: Option<&str>) -> Result<bool, SchemaTypeError> {
        match value {
            RawValue::Bool(b) => Ok(*b),
            other => Err(SchemaTypeError::type_mismatch(
                "boolean",
                other.kind_name(),
                context,
            )),
        }
    }
}
