//! # The Type Contract
//!
//! [`Type`] is the single capability every validator provides. Concrete
//! validators implement [`Type::process`] (their shape and semantic
//! checks); the provided [`Type::validate`] layers the options every
//! validator shares on top: a default value for absent input and an
//! optional custom predicate.

use std::fmt;
use std::sync::Arc;

use confschema_core::{RawValue, SchemaTypeError};

/// Custom predicate run after a validator's own checks.
///
/// Returning `Err(message)` fails validation with that message at the
/// current context.
pub type CustomValidator<T> = Arc<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Static configuration shared by all validators, fixed at construction.
pub struct TypeOptions<T> {
    default_value: Option<T>,
    validate: Option<CustomValidator<T>>,
}

impl<T> TypeOptions<T> {
    pub fn new() -> Self {
        Self {
            default_value: None,
            validate: None,
        }
    }

    /// Value returned when the input is absent.
    pub fn default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Extra predicate applied to every successfully processed value.
    pub fn validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(predicate));
        self
    }

    pub fn get_default(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    /// Run the custom predicate, if any, against `value`.
    pub fn check(&self, value: &T, context: Option<&str>) -> Result<(), SchemaTypeError> {
        match &self.validate {
            Some(predicate) => {
                predicate(value).map_err(|message| SchemaTypeError::new(message, context))
            }
            None => Ok(()),
        }
    }
}

impl<T> Default for TypeOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TypeOptions<T> {
    fn clone(&self) -> Self {
        Self {
            default_value: self.default_value.clone(),
            validate: self.validate.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TypeOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeOptions")
            .field("default_value", &self.default_value)
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// A validator producing values of type [`Type::Output`].
///
/// Implementations must be stateless across calls: validating never
/// mutates the validator.
pub trait Type: Send + Sync {
    type Output: Clone + Send + Sync;

    /// Options this validator was constructed with.
    fn options(&self) -> &TypeOptions<Self::Output>;

    /// Kind name used in messages about absent input.
    fn expected_kind(&self) -> &'static str;

    /// Validator-specific checks, without default or custom predicate.
    fn process(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError>;

    /// Validate `value` located at `context` (`None` for the root).
    fn validate(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        let output = self.process(value, context)?;
        self.options().check(&output, context)?;
        Ok(output)
    }

    /// Validate a value that may be absent from its document.
    ///
    /// Absent input resolves to the configured default (still subject to
    /// the custom predicate), or fails if there is none.
    fn validate_optional(
        &self,
        value: Option<&RawValue>,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        match value {
            Some(value) => self.validate(value, context),
            None => {
                let default = self.options().get_default().cloned().ok_or_else(|| {
                    SchemaTypeError::type_mismatch(self.expected_kind(), "undefined", context)
                })?;
                self.options().check(&default, context)?;
                Ok(default)
            }
        }
    }
}

impl<T: Type + ?Sized> Type for &T {
    type Output = T::Output;

    fn options(&self) -> &TypeOptions<Self::Output> {
        (**self).options()
    }

    fn expected_kind(&self) -> &'static str {
        (**self).expected_kind()
    }

    fn process(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        (**self).process(value, context)
    }

    fn validate(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        (**self).validate(value, context)
    }
}

impl<T: Type + ?Sized> Type for Box<T> {
    type Output = T::Output;

    fn options(&self) -> &TypeOptions<Self::Output> {
        (**self).options()
    }

    fn expected_kind(&self) -> &'static str {
        (**self).expected_kind()
    }

    fn process(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        (**self).process(value, context)
    }

    fn validate(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        (**self).validate(value, context)
    }
}

impl<T: Type + ?Sized> Type for Arc<T> {
    type Output = T::Output;

    fn options(&self) -> &TypeOptions<Self::Output> {
        (**self).options()
    }

    fn expected_kind(&self) -> &'static str {
        (**self).expected_kind()
    }

    fn process(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        (**self).process(value, context)
    }

    fn validate(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        (**self).validate(value, context)
    }
}
