use crate::{
    constraint::{Constraint, Constraints, Length},
    errors::Error,
    value::Value,
    Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Minimum number of characters in a password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is valid"));

/// Validates string values.
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    constraints: Constraints<str>,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict validation that returns the string itself.
    pub fn parse<'v>(&self, value: &'v Value) -> Result<&'v str, Error> {
        let s: &str = check_type!(value, String => String);
        self.constraints.check(s)?;
        Ok(s)
    }

    pub fn constraints(&self) -> &Constraints<str> {
        &self.constraints
    }

    /// A new validator with one more constraint.
    #[must_use]
    pub fn with(&self, constraint: Constraint<str>) -> Self {
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
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.with(Constraint::predicate(name, predicate, move |_: &str| {
            message.clone()
        }))
    }

    /// Something that looks like `local@domain.tld`.
    #[must_use]
    pub fn email(&self) -> Self {
        self.with(Constraint::predicate(
            "email",
            |s: &str| EMAIL.is_match(s),
            |s: &str| format!(r#""{}" is not a valid email"#, s),
        ))
    }

    /// At least [PASSWORD_MIN_LENGTH](PASSWORD_MIN_LENGTH) characters with
    /// a lowercase letter, an uppercase letter and a digit.
    ///
    /// The rejected value never appears in the error, it is
    /// replaced by one `*` per character.
    #[must_use]
    pub fn password(&self) -> Self {
        self.with(Constraint::predicate(
            "password",
            |s: &str| {
                s.chars().count() >= PASSWORD_MIN_LENGTH
                    && s.chars().any(|c| c.is_ascii_lowercase())
                    && s.chars().any(|c| c.is_ascii_uppercase())
                    && s.chars().any(|c| c.is_ascii_digit())
            },
            |s: &str| {
                format!(
                    r#""{}" is not a valid password, it must be at least {} characters long and contain a lowercase letter, an uppercase letter and a digit"#,
                    "*".repeat(s.chars().count()),
                    PASSWORD_MIN_LENGTH
                )
            },
        ))
    }

    /// Letters, digits and underscores only.
    #[must_use]
    pub fn username(&self) -> Self {
        self.with(Constraint::predicate(
            "username",
            |s: &str| USERNAME.is_match(s),
            |s: &str| {
                format!(
                    r#""{}" is not a valid username, only letters, digits and underscores are allowed"#,
                    s
                )
            },
        ))
    }

    /// Length bounds, measured in characters.
    #[must_use]
    pub fn length(&self, length: Length) -> Self {
        Self {
            constraints: length.append_to(&self.constraints, "string length", |s: &str| {
                s.chars().count()
            }),
        }
    }

    #[must_use]
    pub fn min_length(&self, min: usize) -> Self {
        self.length(Length::new().min(min))
    }

    #[must_use]
    pub fn max_length(&self, max: usize) -> Self {
        self.length(Length::new().max(max))
    }

    #[must_use]
    pub fn fix_length(&self, fix: usize) -> Self {
        self.length(Length::new().fix(fix))
    }

    /// Exactly `expected`.
    #[must_use]
    pub fn equals(&self, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        let reported = expected.clone();

        self.with(Constraint::predicate(
            "equals",
            move |s: &str| s == expected,
            move |s: &str| format!(r#""{}" does not match "{}""#, s, reported),
        ))
    }
}

impl Validate for StringValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn password_is_redacted() {
        let err = StringValidator::new()
            .password()
            .parse(&Value::from("hunter2"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        assert!(err.message().starts_with(r#""*******" is not a valid password"#));
        assert!(!err.message().contains("hunter2"));
    }

    #[test]
    fn password_requirements() {
        let v = StringValidator::new().password();

        assert!(v.parse(&Value::from("Passw0rdX")).is_ok());
        assert!(v.parse(&Value::from("password1")).is_err());
        assert!(v.parse(&Value::from("PASSWORD1")).is_err());
        assert!(v.parse(&Value::from("Password")).is_err());
        assert!(v.parse(&Value::from("Pass1")).is_err());
    }

    #[test]
    fn username_charset() {
        let v = StringValidator::new().username();

        assert!(v.parse(&Value::from("dev_42")).is_ok());
        assert!(v.parse(&Value::from("dev-42")).is_err());
        assert!(v.parse(&Value::from("")).is_err());
    }

    #[test]
    fn length_counts_characters() {
        let v = StringValidator::new().fix_length(3);
        assert!(v.parse(&Value::from("héé")).is_ok());
    }
}
