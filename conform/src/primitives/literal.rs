use crate::{
    errors::{Error, Expected},
    value::Value,
    Validate,
};
use std::sync::Arc;

/// Accepts only strings from a fixed set.
///
/// A value outside the set is not considered to have the right
/// shape at all, so it is reported as a type mismatch.
#[derive(Debug, Clone)]
pub struct LiteralValidator {
    values: Arc<[String]>,
}

impl LiteralValidator {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn parse<'v>(&self, value: &'v Value) -> Result<&'v str, Error> {
        match value {
            Value::String(s) if self.values.iter().any(|v| v == s) => Ok(s.as_str()),
            other => Err(Error::invalid_type(
                other,
                Expected::Literal(self.values.to_vec()),
            )),
        }
    }
}

impl Validate for LiteralValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}
