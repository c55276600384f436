//! Classifier: wrap a native failure in the closest cataloged kind.
//!
//! Decision order, first match wins:
//!
//! ```text
//!   no_instance_hiding_on_wrap && shape != Plain  → unchanged
//!   connection code (ECONNRESET, ETIMEDOUT, ...)  → ConnectionError
//!   access code (EACCES, EPERM)                   → NoAccessError
//!   not-found code (ENOENT)                       → NotFoundError
//!   Shape::Uri                                    → ArgumentInvalidError     ┐ or
//!   Shape::Range                                  → ArgumentOutOfRangeError  │ wrap_user_error_type
//!   Shape::Type                                   → ArgumentTypeError        ┘
//!   Shape::Reference | Shape::Syntax              → SystemError
//!   otherwise                                     → CommonError
//! ```
//!
//! The wrapper keeps the failure as its cause and hoists its code, unless
//! the options supply their own.

use std::error::Error;

use serror_core::codes::{is_access_code, is_connection_code, is_not_found_code};

use crate::error::SError;
use crate::inspect::{Inspect, Shape};
use crate::kind::Kind;
use crate::options::{Cause, Options};
use crate::registry::{self, StatusRegistry};
use crate::settings::{self, Settings};

/// Outcome of [`wrap`].
#[derive(Debug)]
pub enum Wrapped<E> {
    /// The failure, now the cause of a cataloged error.
    Wrapped(SError),
    /// The failure as given.
    Unchanged(E),
}

impl<E> Wrapped<E> {
    #[inline]
    pub fn was_wrapped(&self) -> bool {
        matches!(self, Wrapped::Wrapped(_))
    }

    pub fn as_wrapped(&self) -> Option<&SError> {
        match self {
            Wrapped::Wrapped(err) => Some(err),
            Wrapped::Unchanged(_) => None,
        }
    }

    pub fn into_wrapped(self) -> Option<SError> {
        match self {
            Wrapped::Wrapped(err) => Some(err),
            Wrapped::Unchanged(_) => None,
        }
    }

    pub fn into_unchanged(self) -> Option<E> {
        match self {
            Wrapped::Wrapped(_) => None,
            Wrapped::Unchanged(cause) => Some(cause),
        }
    }
}

impl<E> Wrapped<E>
where
    E: Error + Send + Sync + 'static,
{
    /// Either side as a boxed error, for `?` into `Box<dyn Error>` code.
    pub fn into_boxed(self) -> Box<dyn Error + Send + Sync> {
        match self {
            Wrapped::Wrapped(err) => Box::new(err),
            Wrapped::Unchanged(cause) => Box::new(cause),
        }
    }
}

/// Wrap `cause` against the process-wide registries.
///
/// ```
/// use serror::{wrap, Kind, Options};
/// use std::io;
///
/// let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
/// let err = wrap(refused, Options::new()).into_wrapped().unwrap();
/// assert_eq!(err.kind(), Kind::Connection);
/// assert_eq!(err.code(), Some("ECONNREFUSED"));
/// assert_eq!(err.message(), "The remote service connection was refused.");
/// ```
pub fn wrap<E>(cause: E, options: Options) -> Wrapped<E>
where
    E: Error + Inspect + Send + Sync + 'static,
{
    let status = registry::read_global();
    let settings = settings::read_global();
    wrap_with(cause, options, &status, &settings)
}

pub(crate) fn wrap_with<E>(
    cause: E,
    options: Options,
    status: &StatusRegistry,
    settings: &Settings,
) -> Wrapped<E>
where
    E: Error + Inspect + Send + Sync + 'static,
{
    let keep_instance = options
        .no_instance_hiding_on_wrap
        .unwrap_or_else(|| settings.no_instance_hiding_on_wrap());
    if keep_instance && cause.shape() != Shape::Plain {
        tracing::trace!(shape = ?cause.shape(), "instance hiding disabled; left unchanged");
        return Wrapped::Unchanged(cause);
    }
    Wrapped::Wrapped(classify_with(cause, options, status, settings))
}

/// Classify and wrap; never leaves the failure unchanged.
pub(crate) fn classify_with<E>(
    cause: E,
    mut options: Options,
    status: &StatusRegistry,
    settings: &Settings,
) -> SError
where
    E: Error + Inspect + Send + Sync + 'static,
{
    let user_kind = options
        .wrap_user_error_type
        .or_else(|| settings.wrap_user_error_type());
    let kind = classify(&cause, user_kind);
    tracing::trace!(
        %kind,
        code = cause.code().unwrap_or(""),
        shape = ?cause.shape(),
        "classified failure"
    );

    // The failure's own code holds even when the caller supplies a cause.
    if options.code.is_none() && !options.no_code_hoisting {
        options.code = cause.code().map(str::to_string);
    }
    if options.cause.is_none() {
        options.cause = Some(Cause::new(cause));
    }
    SError::build(kind, options, status, settings)
}

/// [`classify_with`] against the process-wide registries.
pub(crate) fn classify_global<E>(cause: E, options: Options) -> SError
where
    E: Error + Inspect + Send + Sync + 'static,
{
    let status = registry::read_global();
    let settings = settings::read_global();
    classify_with(cause, options, &status, &settings)
}

/// The kind a failure maps to.
pub fn classify<E: Inspect + ?Sized>(cause: &E, user_kind: Option<Kind>) -> Kind {
    if let Some(code) = cause.code() {
        if is_connection_code(code) {
            return Kind::Connection;
        }
        if is_access_code(code) {
            return Kind::NoAccess;
        }
        if is_not_found_code(code) {
            return Kind::NotFound;
        }
    }
    match cause.shape() {
        Shape::Uri => user_kind.unwrap_or(Kind::ArgumentInvalid),
        Shape::Range => user_kind.unwrap_or(Kind::ArgumentOutOfRange),
        Shape::Type => user_kind.unwrap_or(Kind::ArgumentType),
        Shape::Reference | Shape::Syntax => Kind::System,
        Shape::Plain | Shape::Classified => Kind::Common,
    }
}
