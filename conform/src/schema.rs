//! The sum type over every validator in the crate.

use crate::{
    errors::Error,
    modifiers::{ArrayValidator, Nullable, Optional},
    object::ObjectValidator,
    primitives::{
        BooleanValidator, DateValidator, FileValidator, LiteralValidator, NumberValidator,
        StringValidator,
    },
    value::Value,
    Validate,
};

/// Any validator, tagged by what it is.
///
/// Composite validators hold their children as `Schema`, which lets
/// them inspect a child (is it optional?) without running it.
#[derive(Debug, Clone)]
pub enum Schema {
    String(StringValidator),
    Number(NumberValidator),
    Boolean(BooleanValidator),
    Date(DateValidator),
    Literal(LiteralValidator),
    File(FileValidator),
    Optional(Optional),
    Nullable(Nullable),
    Array(ArrayValidator),
    Object(ObjectValidator),
}

impl Schema {
    /// Whether an object field with this validator may be absent.
    ///
    /// True for [Optional](Optional), also when it sits under
    /// one or more [Nullable](Nullable) layers.
    pub fn is_optional(&self) -> bool {
        match self {
            Schema::Optional(_) => true,
            Schema::Nullable(n) => n.inner().is_optional(),
            _ => false,
        }
    }

    /// Whether an explicit null is accepted without reaching a
    /// leaf validator.
    pub fn is_nullable(&self) -> bool {
        match self {
            Schema::Nullable(_) => true,
            Schema::Optional(o) => o.inner().is_nullable(),
            _ => false,
        }
    }

    /// Short name of the outermost validator.
    pub fn name(&self) -> &'static str {
        match self {
            Schema::String(_) => "string",
            Schema::Number(_) => "number",
            Schema::Boolean(_) => "boolean",
            Schema::Date(_) => "date",
            Schema::Literal(_) => "literal",
            Schema::File(_) => "file",
            Schema::Optional(_) => "optional",
            Schema::Nullable(_) => "nullable",
            Schema::Array(_) => "array",
            Schema::Object(_) => "object",
        }
    }
}

impl Validate for Schema {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        match self {
            Schema::String(v) => v.validate(value),
            Schema::Number(v) => v.validate(value),
            Schema::Boolean(v) => v.validate(value),
            Schema::Date(v) => v.validate(value),
            Schema::Literal(v) => v.validate(value),
            Schema::File(v) => v.validate(value),
            Schema::Optional(v) => v.validate(value),
            Schema::Nullable(v) => v.validate(value),
            Schema::Array(v) => v.validate(value),
            Schema::Object(v) => v.validate(value),
        }
    }
}

macro_rules! from_validator {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Schema {
                fn from(v: $ty) -> Self {
                    Schema::$variant(v)
                }
            }
        )*
    };
}

from_validator!(
    String(StringValidator),
    Number(NumberValidator),
    Boolean(BooleanValidator),
    Date(DateValidator),
    Literal(LiteralValidator),
    File(FileValidator),
    Optional(Optional),
    Nullable(Nullable),
    Array(ArrayValidator),
    Object(ObjectValidator),
);

/// Wrapping any validator in a modifier.
pub trait SchemaExt: Into<Schema> + Sized {
    /// Absent values pass.
    fn optional(self) -> Optional {
        Optional::new(self)
    }

    /// Explicit nulls pass.
    fn nullable(self) -> Nullable {
        Nullable::new(self)
    }

    /// An array of values that each pass this validator.
    fn array(self) -> ArrayValidator {
        ArrayValidator::new(self)
    }
}

impl<T: Into<Schema>> SchemaExt for T {}
