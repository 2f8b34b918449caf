use crate::{
    constraint::{Constraint, Constraints},
    errors::Error,
    value::Value,
    Validate,
};
use std::borrow::Cow;

/// Validates numeric values.
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    constraints: Constraints<f64>,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict validation that returns the number itself.
    pub fn parse(&self, value: &Value) -> Result<f64, Error> {
        let n = *check_type!(value, Number => Number);
        self.constraints.check(&n)?;
        Ok(n)
    }

    pub fn constraints(&self) -> &Constraints<f64> {
        &self.constraints
    }

    /// A new validator with one more constraint.
    #[must_use]
    pub fn with(&self, constraint: Constraint<f64>) -> Self {
        Self {
            constraints: self.constraints.with(constraint),
        }
    }

    /// Caller-defined constraint, `message` is reported as is.
    #[must_use]
    pub fn refine<P>(
        &self,
        name: impl Into<Cow<'static, str>>,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        P: Fn(f64) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.with(Constraint::predicate(
            name,
            move |n: &f64| predicate(*n),
            move |_: &f64| message.clone(),
        ))
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn min(&self, min: f64) -> Self {
        self.with(Constraint::predicate(
            "min",
            move |n: &f64| *n >= min,
            move |n: &f64| format!("{} is less than the minimum of {}", n, min),
        ))
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn max(&self, max: f64) -> Self {
        self.with(Constraint::predicate(
            "max",
            move |n: &f64| *n <= max,
            move |n: &f64| format!("{} is greater than the maximum of {}", n, max),
        ))
    }
}

impl Validate for NumberValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}
