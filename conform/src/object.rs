//! Validators for structured records.

use crate::{
    errors::Error,
    schema::Schema,
    value::{Map, Value, UNDEFINED},
    Validate,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// Validates an object against a fixed set of named fields.
///
/// A field is required unless its validator is
/// [optional](Schema::is_optional). Both the field order and the set of
/// required fields are decided when the validator is built.
///
/// Validation happens in two steps:
///
/// - all absent required fields are reported together,
/// - otherwise each field is validated in declaration order and the
///   first failure is returned, absent fields are validated as
///   [Undefined](Value::Undefined).
///
/// Keys that are not declared are ignored and kept.
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    fields: Arc<IndexMap<String, Schema>>,
    required: Arc<[String]>,
}

impl Default for ObjectValidator {
    fn default() -> Self {
        Self::from_fields(IndexMap::new())
    }
}

impl ObjectValidator {
    pub fn new<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Schema>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields: IndexMap<String, Schema> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self::from_fields(fields)
    }

    fn from_fields(fields: IndexMap<String, Schema>) -> Self {
        let required = fields
            .iter()
            .filter(|(_, schema)| !schema.is_optional())
            .map(|(name, _)| name.clone())
            .collect();

        Self {
            fields: Arc::new(fields),
            required,
        }
    }

    /// A new validator with one more field.
    ///
    /// Declaring an existing name again replaces its validator
    /// but keeps its position.
    #[must_use]
    pub fn field(&self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let mut fields = (*self.fields).clone();
        fields.insert(name.into(), schema.into());
        Self::from_fields(fields)
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields.get(name)
    }

    /// Names of the fields that must be present.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Strict validation that returns the object's entries.
    pub fn parse<'v>(&self, value: &'v Value) -> Result<&'v Map, Error> {
        let map = check_type!(value, Object => Object);

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| !map.contains_key(name.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            tracing::debug!(fields = ?missing, "required fields are missing");
            return Err(Error::missing_fields(missing));
        }

        for (name, schema) in self.fields.iter() {
            let field = map.get(name).unwrap_or(&UNDEFINED);
            schema.validate(field).map_err(|e| e.under(name))?;
        }

        Ok(map)
    }
}

impl Validate for ObjectValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}
