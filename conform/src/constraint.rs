//! Named refinements and the append-only sequences that hold them.

use crate::errors::Error;
use std::{borrow::Cow, sync::Arc};

/// A named check attached to a validator.
///
/// The check closure captures its own parameters (a bound, a pattern)
/// and is evaluated again for every validated value.
pub struct Constraint<T: ?Sized> {
    name: Cow<'static, str>,
    check: Arc<dyn Fn(&T) -> Result<(), Error> + Send + Sync>,
}

impl<T: ?Sized> Constraint<T> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), Error> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// A constraint from a predicate, `message` builds the
    /// failure text for a rejected value.
    pub fn predicate<P, M>(name: impl Into<Cow<'static, str>>, predicate: P, message: M) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        M: Fn(&T) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        let error_name = name.clone();

        Self::new(name, move |v: &T| {
            if predicate(v) {
                Ok(())
            } else {
                Err(Error::constraint(error_name.clone(), message(v)))
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check(&self, value: &T) -> Result<(), Error> {
        (self.check)(value)
    }
}

impl<T: ?Sized> Clone for Constraint<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: self.check.clone(),
        }
    }
}

impl<T: ?Sized> core::fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Constraint").field(&self.name).finish()
    }
}

#[cfg(feature = "smallvec")]
type ConstraintsInner<T> = smallvec_crate::SmallVec<[Constraint<T>; 4]>;

#[cfg(not(feature = "smallvec"))]
type ConstraintsInner<T> = Vec<Constraint<T>>;

/// An ordered sequence of constraints.
///
/// Sequences are never modified in place, [with](Constraints::with)
/// returns a copy with one more entry.
pub struct Constraints<T: ?Sized>(ConstraintsInner<T>);

impl<T: ?Sized> Constraints<T> {
    pub fn new() -> Self {
        Constraints(ConstraintsInner::new())
    }

    /// A new sequence: this one followed by `constraint`.
    #[must_use]
    pub fn with(&self, constraint: Constraint<T>) -> Self {
        let mut inner = ConstraintsInner::with_capacity(self.0.len() + 1);
        inner.extend(self.0.iter().cloned());
        inner.push(constraint);
        Constraints(inner)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint<T>> {
        self.0.iter()
    }

    /// Run every constraint in attachment order, the first
    /// failure is returned.
    pub fn check(&self, value: &T) -> Result<(), Error> {
        for c in self.0.iter() {
            if let Err(e) = c.check(value) {
                tracing::trace!(constraint = c.name(), "constraint rejected value");
                return Err(e);
            }
        }

        Ok(())
    }
}

impl<T: ?Sized> Default for Constraints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Constraints<T> {
    fn clone(&self) -> Self {
        Constraints(self.0.iter().cloned().collect())
    }
}

impl<T: ?Sized> core::fmt::Debug for Constraints<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Length bounds shared by strings and arrays.
///
/// All three bounds may be set at once, each is checked on its own
/// in the order `min`, `max`, `fix`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub fix: Option<usize>,
}

impl Length {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn fix(mut self, fix: usize) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Append one constraint per bound that is set.
    ///
    /// `measure` returns the length of a value, `subject` names
    /// what is measured in the messages (e.g. "string length").
    pub(crate) fn append_to<T, F>(
        self,
        constraints: &Constraints<T>,
        subject: &'static str,
        measure: F,
    ) -> Constraints<T>
    where
        T: ?Sized,
        F: Fn(&T) -> usize + Clone + Send + Sync + 'static,
    {
        let mut out = constraints.clone();

        if let Some(min) = self.min {
            let (check, report) = (measure.clone(), measure.clone());
            out = out.with(Constraint::predicate(
                "min_length",
                move |v: &T| check(v) >= min,
                move |v: &T| {
                    format!("{} {} is less than the minimum of {}", subject, report(v), min)
                },
            ));
        }

        if let Some(max) = self.max {
            let (check, report) = (measure.clone(), measure.clone());
            out = out.with(Constraint::predicate(
                "max_length",
                move |v: &T| check(v) <= max,
                move |v: &T| {
                    format!("{} {} is greater than the maximum of {}", subject, report(v), max)
                },
            ));
        }

        if let Some(fix) = self.fix {
            let (check, report) = (measure.clone(), measure);
            out = out.with(Constraint::predicate(
                "fix_length",
                move |v: &T| check(v) == fix,
                move |v: &T| format!("{} {} is not exactly {}", subject, report(v), fix),
            ));
        }

        out
    }
}
