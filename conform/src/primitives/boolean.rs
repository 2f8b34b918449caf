use crate::{errors::Error, value::Value, Validate};

/// Validates boolean values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl BooleanValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, value: &Value) -> Result<bool, Error> {
        Ok(*check_type!(value, Bool => Boolean))
    }
}

impl Validate for BooleanValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}
