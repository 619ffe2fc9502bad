//! User profile records submitted for validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::{Error, Result};

const NAME: &str = "name";
const EMAIL: &str = "email";
const AGE: &str = "age";
const COUNTRY: &str = "country";
const PHONE: &str = "phone";

/// A user profile exactly as the caller supplied it.
///
/// None of the well-known fields (`name`, `email`, `age`, `country`, `phone`)
/// is required. The record keeps the caller's keys, values, and key order
/// untouched so the validator sees the same object the caller built; nothing
/// is normalised or coerced on the host side. A non-numeric `age` is kept as
/// given and left for the model to judge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord {
    fields: Map<String, Value>,
}

impl ProfileRecord {
    /// Starts building a [`ProfileRecord`].
    #[must_use]
    pub fn builder() -> ProfileRecordBuilder {
        ProfileRecordBuilder::default()
    }

    /// Wraps an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::invalid_profile(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parses a profile from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for malformed JSON and
    /// [`Error::InvalidProfile`] when the document is not an object.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Parses a profile from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProfileRecord::from_json_str`].
    pub fn from_json_slice(input: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(input)?;
        Self::from_value(value)
    }

    /// Serialises the record as compact JSON, preserving key order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// Returns the `name` field when it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field(NAME)
    }

    /// Returns the `email` field when it is a string.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.str_field(EMAIL)
    }

    /// Returns the raw `age` value, numeric or not.
    #[must_use]
    pub fn age(&self) -> Option<&Value> {
        self.fields.get(AGE)
    }

    /// Returns the `country` field when it is a string.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.str_field(COUNTRY)
    }

    /// Returns the `phone` field when it is a string.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.str_field(PHONE)
    }

    /// Iterates over the fields in caller order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Builder for [`ProfileRecord`]. Fields are stored in call order.
#[derive(Debug, Default)]
pub struct ProfileRecordBuilder {
    fields: Map<String, Value>,
}

impl ProfileRecordBuilder {
    /// Sets the `name` field.
    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.field(NAME, Value::String(name.into()))
    }

    /// Sets the `email` field.
    #[must_use]
    pub fn email(self, email: impl Into<String>) -> Self {
        self.field(EMAIL, Value::String(email.into()))
    }

    /// Sets the `age` field.
    #[must_use]
    pub fn age(self, age: impl Into<Number>) -> Self {
        self.field(AGE, Value::Number(age.into()))
    }

    /// Sets the `country` field.
    #[must_use]
    pub fn country(self, country: impl Into<String>) -> Self {
        self.field(COUNTRY, Value::String(country.into()))
    }

    /// Sets the `phone` field.
    #[must_use]
    pub fn phone(self, phone: impl Into<String>) -> Self {
        self.field(PHONE, Value::String(phone.into()))
    }

    /// Sets an arbitrary field, e.g. a non-numeric `age` or an extra key.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Finalises the record.
    #[must_use]
    pub fn build(self) -> ProfileRecord {
        ProfileRecord {
            fields: self.fields,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
