//! Error definitions used during validation.

use crate::{
    span::Keys,
    value::{Kind, Value},
};
use std::borrow::Cow;

/// A validation error.
///
/// It contains an optional span of the invalid value and the
/// failure itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The location of the invalid value, [None](Option::None)
    /// if it is the root value.
    pub span: Option<Keys>,

    /// The actual error details.
    pub value: ErrorValue,
}

impl Error {
    pub(crate) fn new(value: ErrorValue) -> Self {
        Self { span: None, value }
    }

    /// The value does not have the kind the validator expects.
    pub fn invalid_type(value: &Value, expected: impl Into<Expected>) -> Self {
        Self::new(ErrorValue::InvalidType {
            value: value.to_string(),
            expected: expected.into(),
        })
    }

    /// The value has the right kind but a refinement rejected it.
    pub fn constraint(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(ErrorValue::Constraint {
            name: name.into(),
            message: message.into(),
        })
    }

    /// One or more required object keys are absent.
    pub fn missing_fields(names: Vec<String>) -> Self {
        Self::new(ErrorValue::MissingFields { names })
    }

    /// Any error that does not originate from a validator.
    pub fn custom<T: core::fmt::Display>(error: T) -> Self {
        Self::new(ErrorValue::Custom(error.to_string()))
    }

    /// Which of the failure kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match &self.value {
            ErrorValue::InvalidType { .. } => ErrorKind::TypeMismatch,
            ErrorValue::Constraint { .. } => ErrorKind::ConstraintViolation,
            ErrorValue::MissingFields { .. } => ErrorKind::MissingFields,
            ErrorValue::Custom(_) => ErrorKind::Custom,
        }
    }

    /// The human-readable message without the span.
    pub fn message(&self) -> String {
        self.value.to_string()
    }

    /// Record that the failing value lives under `key` of its parent.
    pub(crate) fn under(mut self, key: impl ToString) -> Self {
        match &mut self.span {
            Some(span) => span.prepend(key.to_string()),
            None => self.span = Some(Keys::from(key.to_string())),
        }
        self
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "({}) ", span.dotted())?;
        }

        write!(f, "{}", self.value)
    }
}

impl std::error::Error for Error {}

/// The failure kinds, without their details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    ConstraintViolation,
    MissingFields,
    Custom,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::ConstraintViolation => "constraint_violation",
            ErrorKind::MissingFields => "missing_fields",
            ErrorKind::Custom => "custom",
        }
    }
}

/// All the validation errors that can occur.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorValue {
    /// Indicates that the value has the wrong kind.
    #[error("{value} is not a valid {expected}")]
    InvalidType { value: String, expected: Expected },

    /// Indicates that a named refinement rejected the value.
    #[error("{message}")]
    Constraint {
        name: Cow<'static, str>,
        message: String,
    },

    /// Indicates that required object keys are absent.
    #[error("missing required fields: {}", .names.join(", "))]
    MissingFields { names: Vec<String> },

    /// Any error that does not originate from a validator.
    #[error("{0}")]
    Custom(String),
}

/// What a validator expected when it reported a type mismatch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Expected {
    #[error("{0}")]
    Kind(Kind),

    #[error("literal, expected one of {}", quoted(.0))]
    Literal(Vec<String>),
}

impl From<Kind> for Expected {
    fn from(k: Kind) -> Self {
        Expected::Kind(k)
    }
}

fn quoted(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!(r#""{}""#, v)).collect();
    format!("{{{}}}", quoted.join(", "))
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: core::fmt::Display>(msg: T) -> Self {
        Error::custom(msg)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Error", 3)?;
        s.serialize_field("kind", self.kind().name())?;
        s.serialize_field("message", &self.message())?;
        s.serialize_field("path", &self.span.as_ref().map(Keys::dotted))?;
        s.end()
    }
}
