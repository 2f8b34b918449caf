use crate::{errors::Error, value::Value, Validate};
use chrono::{DateTime, Utc};

/// Validates date values.
///
/// Only [Value::Date](Value::Date) passes, date-like strings are
/// not parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateValidator;

impl DateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn parse<'v>(&self, value: &'v Value) -> Result<&'v DateTime<Utc>, Error> {
        Ok(check_type!(value, Date => Date))
    }
}

impl Validate for DateValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}
