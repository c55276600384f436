//! Native failure inspection.
//!
//! The classifier never looks at concrete error types. It asks an
//! [`Inspect`] impl two questions: what code does this failure carry, and
//! what [`Shape`] is it. Shapes are the fixed categories a native failure
//! falls into:
//!
//! | Source                                 | Shape        |
//! |----------------------------------------|--------------|
//! | `Failure`                              | as built     |
//! | `std::io::Error`                       | `Plain` (code from errno / kind) |
//! | `TryFromIntError`, `CharTryFromError`  | `Range`      |
//! | `ParseIntError` (overflow)             | `Range`      |
//! | `ParseIntError` (other), `ParseFloatError`, `ParseBoolError` | `Type` |
//! | `Utf8Error`, `FromUtf8Error`           | `Uri`        |
//! | `serde_json::Error` syntax / EOF       | `Syntax`     |
//! | `serde_json::Error` data               | `Type`       |
//! | `serde_json::Error` io                 | `Plain`      |
//! | `SError`                               | `Classified` |

use std::fmt;
use std::io;
use std::num::{IntErrorKind, ParseFloatError, ParseIntError, TryFromIntError};
use std::sync::Arc;

use serror_core::codes::io_error_code;

use crate::error::SError;
use crate::kind::Kind;

/// Category of a native failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Nothing more specific is known.
    Plain,
    /// Malformed encoded input (URI components, byte encodings).
    Uri,
    /// A value outside the representable or accepted range.
    Range,
    /// A value of the wrong type or format.
    Type,
    /// Use of something that does not exist.
    Reference,
    /// Unparseable structured input.
    Syntax,
    /// Already a cataloged error.
    Classified,
}

/// What the classifier and re-throw filter can learn about a failure.
pub trait Inspect {
    fn code(&self) -> Option<&str> {
        None
    }

    fn shape(&self) -> Shape {
        Shape::Plain
    }

    fn status(&self) -> Option<u16> {
        None
    }

    /// The cataloged kind, for already-classified errors.
    fn kind(&self) -> Option<Kind> {
        None
    }

    /// The failure's own locality claim.
    fn is_local(&self) -> Option<bool> {
        None
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn code(&self) -> Option<&str> {
        (**self).code()
    }
    fn shape(&self) -> Shape {
        (**self).shape()
    }
    fn status(&self) -> Option<u16> {
        (**self).status()
    }
    fn kind(&self) -> Option<Kind> {
        (**self).kind()
    }
    fn is_local(&self) -> Option<bool> {
        (**self).is_local()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn code(&self) -> Option<&str> {
        (**self).code()
    }
    fn shape(&self) -> Shape {
        (**self).shape()
    }
    fn status(&self) -> Option<u16> {
        (**self).status()
    }
    fn kind(&self) -> Option<Kind> {
        (**self).kind()
    }
    fn is_local(&self) -> Option<bool> {
        (**self).is_local()
    }
}

// ── Failure ───────────────────────────────────────────────────────

/// A hand-built native failure: a message, a shape and optionally a code,
/// status or locality.
///
/// ```
/// use serror::{wrap, Failure, Kind, Options};
///
/// let wrapped = wrap(Failure::range("index 9 out of bounds"), Options::new());
/// assert!(wrapped.was_wrapped());
/// assert_eq!(wrapped.as_wrapped().map(|e| e.kind()), Some(Kind::ArgumentOutOfRange));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    shape: Shape,
    message: String,
    code: Option<String>,
    status: Option<u16>,
    is_local: Option<bool>,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_shape(Shape::Plain, message)
    }

    pub fn with_shape(shape: Shape, message: impl Into<String>) -> Self {
        Self {
            shape,
            message: message.into(),
            code: None,
            status: None,
            is_local: None,
        }
    }

    pub fn uri(message: impl Into<String>) -> Self {
        Self::with_shape(Shape::Uri, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::with_shape(Shape::Range, message)
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::with_shape(Shape::Type, message)
    }

    pub fn reference(message: impl Into<String>) -> Self {
        Self::with_shape(Shape::Reference, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::with_shape(Shape::Syntax, message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_locality(mut self, is_local: bool) -> Self {
        self.is_local = Some(is_local);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

impl Inspect for Failure {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    fn shape(&self) -> Shape {
        self.shape
    }
    fn status(&self) -> Option<u16> {
        self.status
    }
    fn is_local(&self) -> Option<bool> {
        self.is_local
    }
}

// ── Library and std types ─────────────────────────────────────────

impl Inspect for SError {
    fn code(&self) -> Option<&str> {
        SError::code(self)
    }
    fn shape(&self) -> Shape {
        Shape::Classified
    }
    fn status(&self) -> Option<u16> {
        Some(SError::status(self))
    }
    fn kind(&self) -> Option<Kind> {
        Some(SError::kind(self))
    }
    fn is_local(&self) -> Option<bool> {
        SError::is_local(self)
    }
}

impl Inspect for io::Error {
    fn code(&self) -> Option<&str> {
        io_error_code(self)
    }
}

impl Inspect for TryFromIntError {
    fn shape(&self) -> Shape {
        Shape::Range
    }
}

impl Inspect for std::char::CharTryFromError {
    fn shape(&self) -> Shape {
        Shape::Range
    }
}

impl Inspect for ParseIntError {
    fn shape(&self) -> Shape {
        match self.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Shape::Range,
            _ => Shape::Type,
        }
    }
}

impl Inspect for ParseFloatError {
    fn shape(&self) -> Shape {
        Shape::Type
    }
}

impl Inspect for std::str::ParseBoolError {
    fn shape(&self) -> Shape {
        Shape::Type
    }
}

impl Inspect for std::str::Utf8Error {
    fn shape(&self) -> Shape {
        Shape::Uri
    }
}

impl Inspect for std::string::FromUtf8Error {
    fn shape(&self) -> Shape {
        Shape::Uri
    }
}

impl Inspect for serde_json::Error {
    fn shape(&self) -> Shape {
        use serde_json::error::Category;
        match self.classify() {
            Category::Syntax | Category::Eof => Shape::Syntax,
            Category::Data => Shape::Type,
            Category::Io => Shape::Plain,
        }
    }
}
