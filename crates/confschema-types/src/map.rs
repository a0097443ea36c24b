//! # Map Validator
//!
//! [`MapOfType`] validates associative input whose keys must each satisfy
//! a key validator and whose values must each satisfy a value validator,
//! producing a freshly built `HashMap`.
//!
//! ## Input Shapes
//!
//! Two producer shapes are accepted, resolved once by [`InputShape::of`]
//! before any entry is looked at:
//!
//! - a plain attribute record, iterated in document order;
//! - a native associative container, iterated in insertion order.
//!
//! Anything else fails with a single type-mismatch error at the caller's
//! context, never with a per-entry failure.
//!
//! ## Error Locality
//!
//! Each entry is validated under `extend(context, <raw key as string>)`.
//! The segment comes from the raw key, not the validated one, so it is
//! known before key validation runs and is shared by the key and the value
//! of that entry. The first failing entry aborts the whole call.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::Hash;

use confschema_core::{extend, RawValue, SchemaTypeError};
use indexmap::IndexMap;

use crate::base::{Type, TypeOptions};

/// One raw key/value pair awaiting validation.
pub type RawEntry<'a> = (Cow<'a, RawValue>, &'a RawValue);

/// Shape of an input offered to a [`MapOfType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputShape<'a> {
    /// Plain attribute record with string keys.
    Record(&'a IndexMap<String, RawValue>),
    /// Native associative container with arbitrary keys.
    AssociativeContainer(&'a [(RawValue, RawValue)]),
    /// Neither of the above.
    Unrecognized(&'a RawValue),
}

impl<'a> InputShape<'a> {
    pub fn of(value: &'a RawValue) -> Self {
        match value {
            RawValue::Record(record) => Self::Record(record),
            RawValue::Map(entries) => Self::AssociativeContainer(entries),
            other => Self::Unrecognized(other),
        }
    }
}

/// Validates both keys and values of associative input.
pub struct MapOfType<KT: Type, VT: Type> {
    key_type: KT,
    value_type: VT,
    options: TypeOptions<HashMap<KT::Output, VT::Output>>,
}

impl<KT, VT> MapOfType<KT, VT>
where
    KT: Type,
    VT: Type,
    KT::Output: Eq + Hash,
{
    pub fn new(key_type: KT, value_type: VT) -> Self {
        Self::with_options(key_type, value_type, TypeOptions::new())
    }

    pub fn with_options(
        key_type: KT,
        value_type: VT,
        options: TypeOptions<HashMap<KT::Output, VT::Output>>,
    ) -> Self {
        Self {
            key_type,
            value_type,
            options,
        }
    }

    /// Validate already-normalized `[raw key, raw value]` pairs.
    ///
    /// Later entries whose validated keys collide with earlier ones
    /// overwrite them. The returned map shares nothing with the input.
    pub fn process_entries<'a, I>(
        &self,
        entries: I,
        context: Option<&str>,
    ) -> Result<HashMap<KT::Output, VT::Output>, SchemaTypeError>
    where
        I: IntoIterator<Item = RawEntry<'a>>,
    {
        let entries = entries.into_iter();
        let mut validated = HashMap::with_capacity(entries.size_hint().0);

        for (raw_key, raw_value) in entries {
            let entry_context = extend(context, &raw_key.to_string());

            let key = self
                .key_type
                .validate(&raw_key, Some(&entry_context))
                .map_err(|e| entry_failed(e, context, "key"))?;
            let value = self
                .value_type
                .validate(raw_value, Some(&entry_context))
                .map_err(|e| entry_failed(e, context, "value"))?;

            validated.insert(key, value);
        }

        Ok(validated)
    }
}

fn entry_failed(error: SchemaTypeError, context: Option<&str>, part: &str) -> SchemaTypeError {
    tracing::debug!(
        context = context.unwrap_or_default(),
        entry = error.context().unwrap_or_default(),
        part,
        "map entry rejected"
    );
    error
}

impl<KT, VT> Type for MapOfType<KT, VT>
where
    KT: Type,
    VT: Type,
    KT::Output: Eq + Hash,
{
    type Output = HashMap<KT::Output, VT::Output>;

    fn options(&self) -> &TypeOptions<Self::Output> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "Map"
    }

    fn process(
        &self,
        value: &RawValue,
        context: Option<&str>,
    ) -> Result<Self::Output, SchemaTypeError> {
        let result = match InputShape::of(value) {
            InputShape::Record(record) => {
                tracing::trace!(
                    context = context.unwrap_or_default(),
                    entries = record.len(),
                    "validating record as map"
                );
                self.process_entries(
                    record
                        .iter()
                        .map(|(k, v)| (Cow::Owned(RawValue::String(k.clone())), v)),
                    context,
                )
            }
            InputShape::AssociativeContainer(entries) => {
                tracing::trace!(
                    context = context.unwrap_or_default(),
                    entries = entries.len(),
                    "validating map entries"
                );
                self.process_entries(entries.iter().map(|(k, v)| (Cow::Borrowed(k), v)), context)
            }
            InputShape::Unrecognized(other) => {
                tracing::debug!(
                    context = context.unwrap_or_default(),
                    kind = other.kind_name(),
                    "map input has unrecognized shape"
                );
                Err(SchemaTypeError::new(
                    format!(
                        "expected value of type [Map] or [object] but got [{}]",
                        other.kind_name()
                    ),
                    context,
                ))
            }
        }?;

        tracing::trace!(
            context = context.unwrap_or_default(),
            entries = result.len(),
            "map validated"
        );
        Ok(result)
    }
}
