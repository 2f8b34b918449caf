//! Constructors for every validator, re-exported at the crate root.
//!
//! ```
//! use conform::{Length, Validate};
//!
//! let signup = conform::object! {
//!     "email" => conform::string().email(),
//!     "password" => conform::string().password(),
//!     "age" => conform::optional(conform::number().min(18.0)),
//!     "roles" => conform::array(conform::literal(["admin", "user"])).length(Length::new().min(1)),
//! };
//!
//! let input = conform::Value::object(vec![
//!     ("email", conform::Value::from("dev@example.com")),
//!     ("password", conform::Value::from("Sup3rSecret")),
//!     ("roles", conform::Value::array(vec!["user"])),
//! ]);
//!
//! assert!(signup.validate(&input).is_ok());
//! ```

use crate::{
    modifiers::{ArrayValidator, Nullable, Optional},
    object::ObjectValidator,
    primitives::{
        BooleanValidator, DateValidator, FileValidator, LiteralValidator, NumberValidator,
        StringValidator,
    },
    schema::Schema,
};

pub fn string() -> StringValidator {
    StringValidator::new()
}

pub fn number() -> NumberValidator {
    NumberValidator::new()
}

pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

pub fn date() -> DateValidator {
    DateValidator::new()
}

pub fn file() -> FileValidator {
    FileValidator::new()
}

/// Only the given strings are accepted.
pub fn literal<I>(values: I) -> LiteralValidator
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    LiteralValidator::new(values)
}

pub fn optional(inner: impl Into<Schema>) -> Optional {
    Optional::new(inner)
}

pub fn nullable(inner: impl Into<Schema>) -> Nullable {
    Nullable::new(inner)
}

pub fn array(item: impl Into<Schema>) -> ArrayValidator {
    ArrayValidator::new(item)
}

/// An object validator from `(name, validator)` pairs.
///
/// The validators must already be [Schemas](Schema), the
/// [object!](crate::object!) macro converts them instead.
pub fn object<K, I>(fields: I) -> ObjectValidator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Schema)>,
{
    ObjectValidator::new(fields)
}

/// Builds an [ObjectValidator](crate::ObjectValidator) from
/// `name => validator` pairs of any validator type.
#[macro_export]
macro_rules! object {
    ($($name:expr => $schema:expr),* $(,)?) => {
        {
            let fields: ::std::vec::Vec<(::std::string::String, $crate::Schema)> = ::std::vec![
                $((::std::string::String::from($name), $crate::Schema::from($schema))),*
            ];
            $crate::ObjectValidator::new(fields)
        }
    };
}
