use crate::{
    constraint::{Constraint, Constraints},
    errors::Error,
    value::{File, Value},
    Validate,
};
use std::{borrow::Cow, collections::BTreeSet};

/// MIME types accepted by [image](FileValidator::image) in
/// addition to the ones given by the caller.
pub const DEFAULT_IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/bmp",
    "image/avif",
];

/// Validates uploaded files by their declared MIME type and size.
#[derive(Debug, Clone, Default)]
pub struct FileValidator {
    constraints: Constraints<File>,
}

impl FileValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<'v>(&self, value: &'v Value) -> Result<&'v File, Error> {
        let file = check_type!(value, File => File);
        self.constraints.check(file)?;
        Ok(file)
    }

    pub fn constraints(&self) -> &Constraints<File> {
        &self.constraints
    }

    /// A new validator with one more constraint.
    #[must_use]
    pub fn with(&self, constraint: Constraint<File>) -> Self {
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
        P: Fn(&File) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.with(Constraint::predicate(name, predicate, move |_: &File| {
            message.clone()
        }))
    }

    /// The declared MIME type must be one of `extra` or
    /// [DEFAULT_IMAGE_MIME_TYPES](DEFAULT_IMAGE_MIME_TYPES).
    #[must_use]
    pub fn image<I>(&self, extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let allowed: BTreeSet<String> = extra
            .into_iter()
            .map(Into::into)
            .chain(DEFAULT_IMAGE_MIME_TYPES.iter().map(|m| m.to_string()))
            .collect();
        let listed = allowed.iter().cloned().collect::<Vec<_>>().join(", ");

        self.with(Constraint::predicate(
            "image",
            move |f: &File| allowed.contains(&f.mime),
            move |f: &File| {
                format!(
                    r#""{}" is not an allowed image type, expected one of {{{}}}"#,
                    f.mime, listed
                )
            },
        ))
    }

    /// The file must not be larger than `bytes`.
    #[must_use]
    pub fn size_max(&self, bytes: u64) -> Self {
        self.with(Constraint::predicate(
            "size_max",
            move |f: &File| f.size <= bytes,
            move |f: &File| {
                format!(
                    "file size {} bytes is greater than the maximum of {} bytes",
                    f.size, bytes
                )
            },
        ))
    }
}

impl Validate for FileValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.parse(value).map(|_| value)
    }
}
