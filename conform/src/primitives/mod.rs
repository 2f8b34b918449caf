//! Leaf validators.
//!
//! Each primitive checks the kind of the value first, then runs its
//! constraints in the order they were attached. Refinement methods
//! borrow the validator and return a new one.

mod boolean;
mod date;
mod file;
mod literal;
mod number;
mod string;

pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use file::{FileValidator, DEFAULT_IMAGE_MIME_TYPES};
pub use literal::LiteralValidator;
pub use number::NumberValidator;
pub use string::{StringValidator, PASSWORD_MIN_LENGTH};
