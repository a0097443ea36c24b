use std::fmt::Display;

use confschema_core::{RawValue, SchemaTypeError};

use crate::base::{Type, TypeOptions};

fn check_bounds<N: PartialOrd + Display + Copy>(
    n: N,
    min: Option<N>,
    max: Option<N>,
    context: Option<&str>,
) -> Result<N, SchemaTypeError> {
    if let Some(min) = min.filter(|min| n < *min) {
        return Err(SchemaTypeError::new(
            format!("Value must be equal to or greater than [{min}]."),
            context,
        ));
    }
    if let Some(max) = max.filter(|max| n > *max) {
        return Err(SchemaTypeError::new(
            format!("Value must be equal to or lower than [{max}]."),
            context,
        ));
    }
    Ok(n)
}

/// Accepts any number as `f64`, optionally bounded.
#[derive(Debug, Clone, Default)]
pub struct NumberType {
    min: Option<f64>,
    max: Option<f64>,
    options: TypeOptions<f64>,
}

impl NumberType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TypeOptions<f64>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Type for NumberType {
    type Output = f64;

    fn options(&self) -> &TypeOptions<f64> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "number"
    }

    fn process(&self, value: &RawValue, context: Option<&str>) -> Result<f64, SchemaTypeError> {
        match value {
            RawValue::Number(n) => {
                let n = n.as_f64().ok_or_else(|| {
                    SchemaTypeError::type_mismatch("number", value.kind_name(), context)
                })?;
                check_bounds(n, self.min, self.max, context)
            }
            other => Err(SchemaTypeError::type_mismatch(
                "number",
                other.kind_name(),
                context,
            )),
        }
    }
}

/// Accepts integral numbers as `i64`, optionally bounded.
///
/// Floats with no fractional part (`10.0`) are integral; `10.5` is not.
#[derive(Debug, Clone, Default)]
pub struct IntegerType {
    min: Option<i64>,
    max: Option<i64>,
    options: TypeOptions<i64>,
}

impl IntegerType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TypeOptions<i64>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Type for IntegerType {
    type Output = i64;

    fn options(&self) -> &TypeOptions<i64> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "integer"
    }

    fn process(&self, value: &RawValue, context: Option<&str>) -> Result<i64, SchemaTypeError> {
        let RawValue::Number(n) = value else {
            return Err(SchemaTypeError::type_mismatch(
                "integer",
                value.kind_name(),
                context,
            ));
        };

        let int = n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        });
        match int {
            Some(int) => check_bounds(int, self.min, self.max, context),
            None => Err(SchemaTypeError::type_mismatch("integer", "number", context)),
        }
    }
}
