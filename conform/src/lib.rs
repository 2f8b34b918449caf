#![cfg_attr(feature = "docs", feature(doc_cfg))]

/*!

# Overview

Conform checks untyped values (decoded payloads, form submissions, uploads)
against a declared shape and returns either the value itself or an [Error](errors::Error).

Validators are built once and shared: every refinement returns a new validator
and leaves the original untouched, and no validator holds state between calls.

The building blocks are:

- [primitives]: string, number, boolean, date, literal and file validators,
  each with a kind check and an ordered list of [constraints](constraint::Constraint).
- [modifiers]: [Optional](modifiers::Optional), [Nullable](modifiers::Nullable)
  and [ArrayValidator](modifiers::ArrayValidator), each wrapping one inner validator.
- [ObjectValidator](object::ObjectValidator): named fields, with required fields
  derived from whether each field's validator is optional.
- [Schema](schema::Schema): the tagged sum of all of the above.

Every validator implements [Validate](Validate), which has a strict form that
returns a [Result](Result) and a safe form that returns an [Outcome](outcome::Outcome).

# Basic Usage

```
use conform::{SchemaExt, Validate, Value};

let user = conform::object! {
    "email" => conform::string().email(),
    "age" => conform::number().min(18.0).max(120.0),
    "nickname" => conform::string().username().optional(),
};

let input = Value::object(vec![
    ("email", Value::from("dev@example.com")),
    ("age", Value::from(15)),
]);

let err = user.validate(&input).unwrap_err();
assert_eq!(err.to_string(), "(age) 15 is less than the minimum of 18");
```

With the `serde` feature (on by default) any [Serialize](::serde::Serialize) value
can be checked through [Verifier](Verifier), and types can check themselves
with `#[derive(Verify)]`.

*/

#[macro_use]
mod macros;

pub mod constraint;
pub mod errors;
mod factory;
pub mod modifiers;
pub mod object;
pub mod outcome;
pub mod primitives;
pub mod schema;
pub mod span;
pub mod value;

#[cfg(feature = "serde")]
#[cfg_attr(feature = "docs", doc(cfg(feature = "serde")))]
pub mod serde;

pub use constraint::{Constraint, Length};
pub use errors::{Error, ErrorKind};
pub use factory::*;
pub use modifiers::{ArrayValidator, Nullable, Optional};
pub use object::ObjectValidator;
pub use outcome::{Failure, Outcome};
pub use primitives::{
    BooleanValidator, DateValidator, FileValidator, LiteralValidator, NumberValidator,
    StringValidator,
};
pub use schema::{Schema, SchemaExt};
pub use value::{File, Kind, Value};

/**

Macro for deriving [Verify](Verify).

The type must implement [Serialize](::serde::Serialize), it is converted
with [to_value](crate::serde::to_value) and checked against the given schema.

# Attributes

All options are set by the `verify` attribute.

### schema

An expression that evaluates to any [Validate](Validate) implementor.
It is evaluated on every call, so prefer a function returning a shared validator.

**Example:**

```ignore
#[derive(Serialize, Verify)]
#[verify(schema = "schemas::signup()")]
pub struct Signup { ... }
```

*/
#[cfg(feature = "serde")]
#[cfg_attr(feature = "docs", doc(cfg(feature = "serde")))]
pub use conform_macros::Verify;

/// Validators check values against their kind and constraints.
pub trait Validate {
    /// Strict validation.
    ///
    /// The value is returned unchanged on success, the first failure
    /// is returned otherwise.
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error>;

    /// Safe validation, the failure is returned as a tagged
    /// [Outcome](Outcome) instead of an error.
    fn safe_validate<'v>(&self, value: &'v Value) -> Outcome<'v> {
        let outcome = Outcome::from(self.validate(value));

        if let Some(err) = outcome.error() {
            tracing::debug!(
                kind = err.kind().name(),
                path = %err.span.as_ref().map(span::Keys::dotted).unwrap_or_default(),
                "validation failed"
            );
        }

        outcome
    }
}

impl<V: ?Sized + Validate> Validate for &V {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        (**self).validate(value)
    }
}

impl<V: ?Sized + Validate> Validate for std::sync::Arc<V> {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        (**self).validate(value)
    }
}

/// This trait is implemented by types that can validate themselves.
pub trait Verify {
    /// Validate self internally.
    fn verify(&self) -> Result<(), Error>;
}

/// Validates any serializable value, not only [Values](Value).
#[cfg(feature = "serde")]
#[cfg_attr(feature = "docs", doc(cfg(feature = "serde")))]
pub trait Verifier {
    /// Convert `value` with [to_value](crate::serde::to_value)
    /// and validate the result.
    fn verify_value<T: ?Sized + ::serde::Serialize>(&self, value: &T) -> Result<(), Error>;
}

#[cfg(feature = "serde")]
impl<V: ?Sized + Validate> Verifier for V {
    fn verify_value<T: ?Sized + ::serde::Serialize>(&self, value: &T) -> Result<(), Error> {
        let value = crate::serde::to_value(value)?;
        self.validate(&value).map(|_| ())
    }
}
