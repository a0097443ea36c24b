use confschema_core::{RawValue, SchemaTypeError};

use crate::base::{Type, TypeOptions};

/// Accepts strings, optionally bounded in length (counted in characters).
#[derive(Debug, Clone, Default)]
pub struct StringType {
    min_length: Option<usize>,
    max_length: Option<usize>,
    options: TypeOptions<String>,
}

impl StringType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TypeOptions<String>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

impl Type for StringType {
    type Output = String;

    fn options(&self) -> &TypeOptions<String> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "string"
    }

    fn process(&self, value: &RawValue, context: Option<&str>) -> Result<String, SchemaTypeError> {
        let RawValue::String(s) = value else {
            return Err(SchemaTypeError::type_mismatch(
                "string",
                value.kind_name(),
                context,
            ));
        };

        let len = s.chars().count();
        if let Some(min) = self.min_length.filter(|min| len < *min) {
            return Err(SchemaTypeError::new(
                format!("value has length [{len}] but it must have a minimum length of [{min}]."),
                context,
            ));
        }
        if let Some(max) = self.max_length.filter(|max| len > *max) {
            return Err(SchemaTypeError::new(
                format!("value has length [{len}] but it must have a maximum length of [{max}]."),
                context,
            ));
        }
        Ok(s.clone())
    }
}
