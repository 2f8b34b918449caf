//! The result of safe validation.

use crate::{errors::Error, value::Value};

/// Returned by [safe_validate](crate::Validate::safe_validate).
///
/// A valid value is returned as is, only failures are wrapped,
/// so callers tell the two apart by the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'v> {
    Valid(&'v Value),
    Invalid(Failure),
}

impl<'v> Outcome<'v> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn value(&self) -> Option<&'v Value> {
        match self {
            Outcome::Valid(v) => Some(*v),
            Outcome::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(f) => Some(&f.error),
        }
    }

    /// Back to strict form.
    pub fn into_result(self) -> Result<&'v Value, Error> {
        match self {
            Outcome::Valid(v) => Ok(v),
            Outcome::Invalid(f) => Err(f.error),
        }
    }
}

impl<'v> From<Result<&'v Value, Error>> for Outcome<'v> {
    fn from(r: Result<&'v Value, Error>) -> Self {
        match r {
            Ok(v) => Outcome::Valid(v),
            Err(error) => Outcome::Invalid(Failure { error }),
        }
    }
}

/// A tagged validation failure.
///
/// With the `serde` feature it serializes as
/// `{ "success": false, "error": { ... } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub error: Error,
}

impl Failure {
    /// Always `false`, present for parity with the serialized form.
    pub fn success(&self) -> bool {
        false
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Failure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Failure", 2)?;
        s.serialize_field("success", &false)?;
        s.serialize_field("error", &self.error)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'v> serde::Serialize for Outcome<'v> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Outcome::Valid(v) => v.serialize(serializer),
            Outcome::Invalid(f) => f.serialize(serializer),
        }
    }
}
