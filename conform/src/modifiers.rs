//! Validators that wrap exactly one inner validator.

use crate::{
    constraint::{Constraint, Constraints, Length},
    errors::Error,
    schema::Schema,
    value::Value,
    Validate,
};
use std::{borrow::Cow, sync::Arc};

/// Accepts [Undefined](Value::Undefined), everything else is
/// handed to the inner validator.
///
/// Object fields wrapped in this are not required.
#[derive(Debug, Clone)]
pub struct Optional {
    inner: Arc<Schema>,
}

impl Optional {
    pub fn new(inner: impl Into<Schema>) -> Self {
        Self {
            inner: Arc::new(inner.into()),
        }
    }

    pub fn inner(&self) -> &Schema {
        &self.inner
    }
}

impl Validate for Optional {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        if value.is_undefined() {
            return Ok(value);
        }

        self.inner.validate(value)
    }
}

/// Accepts [Null](Value::Null), everything else is handed to the
/// inner validator.
///
/// Unlike [Optional](Optional), the value must still be present
/// in an object.
#[derive(Debug, Clone)]
pub struct Nullable {
    inner: Arc<Schema>,
}

impl Nullable {
    pub fn new(inner: impl Into<Schema>) -> Self {
        Self {
            inner: Arc::new(inner.into()),
        }
    }

    pub fn inner(&self) -> &Schema {
        &self.inner
    }
}

impl Validate for Nullable {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        if value.is_null() {
            return Ok(value);
        }

        self.inner.validate(value)
    }
}

/// Validates every element of an array with the same item validator,
/// then the array's own length constraints.
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    item: Arc<Schema>,
    constraints: Constraints<[Value]>,
}

impl ArrayValidator {
    pub fn new(item: impl Into<Schema>) -> Self {
        Self {
            item: Arc::new(item.into()),
            constraints: Constraints::new(),
        }
    }

    pub fn with_length(item: impl Into<Schema>, length: Length) -> Self {
        Self::new(item).length(length)
    }

    /// The validator applied to each element.
    pub fn item(&self) -> &Schema {
        &self.item
    }

    pub fn constraints(&self) -> &Constraints<[Value]> {
        &self.constraints
    }

    /// Strict validation that returns the elements.
    ///
    /// The first rejected element fails the whole array.
    pub fn parse<'v>(&self, value: &'v Value) -> Result<&'v [Value], Error> {
        let items: &[Value] = check_type!(value, Array => Array);

        for (i, item) in items.iter().enumerate() {
            self.item.validate(item).map_err(|e| e.under(i))?;
        }

        self.constraints.check(items)?;
        Ok(items)
    }

    /// A new validator with one more constraint, sharing the
    /// item validator.
    #[must_use]
    pub fn with(&self, constraint: Constraint<[Value]>) -> Self {
        Self {
            item: self.item.clone(),
            constraints: self.constraints.with(constraint),
        }
    }

    /// Caller-defined constraint over the whole array.
    #[must_use]
    pub fn refine<P>(
        &self,
        name: impl Into<Cow<'static, str>>,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        P: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.with(Constraint::predicate(name, predicate, move |_: &[Value]| {
            message.clone()
        }))
    }

    /// Bounds on the number of elements.
    #[must_use]
    pub fn length(&self, length: Length) -> Self {
        Self {
            item: self.item.clone(),
            constraints: length.append_to(&self.constraints, "array length", |a: &[Value]| {
                a.len()
            }),
        }
    }

    #[must_use]
    pub fn min(&self, min: usize) -> Self {
        self.length(Length::new().min(min))
    }

    #[must_use]
    pub fn max(&self, max: usize) -> Self {
        self.length(Length::new().max(max))
    }

    #[must_use]
    pub fn fix(&self, fix: usize) -> Self {
        self.length(Length::new().fix(fix))
    }
}

impl Validate for ArrayValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{NumberValidator, StringValidator};

    #[test]
    fn refining_keeps_item() {
        let base = ArrayValidator::new(StringValidator::new());
        let refined = base.min(1).max(3);

        assert!(std::ptr::eq(base.item(), refined.item()));
        assert!(base.constraints().is_empty());
        assert_eq!(refined.constraints().len(), 2);
    }

    #[test]
    fn element_errors_carry_index() {
        let v = ArrayValidator::new(NumberValidator::new().min(0.0));
        let err = v.parse(&Value::array(vec![1, 2, -3])).unwrap_err();

        assert_eq!(err.span.map(|s| s.dotted()), Some("2".to_string()));
    }
}
