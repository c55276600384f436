use std::error::Error;
use std::io;

use crate::error::{SError, SResult};
use crate::inspect::Inspect;
use crate::kind::Kind;
use crate::options::Options;
use crate::wrap::classify_global;

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for SError {
    /// Classify an `io::Error` by its code; always wraps.
    fn from(err: io::Error) -> Self {
        classify_global(err, Options::new())
    }
}

impl From<serde_json::Error> for SError {
    /// Syntax errors become `SystemError`, data errors `ArgumentTypeError`.
    fn from(err: serde_json::Error) -> Self {
        classify_global(err, Options::new())
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<SError> for io::Error {
    /// Wrap an `SError` as a custom `io::Error` of the nearest kind.
    fn from(err: SError) -> Self {
        let kind = if err.is_a(Kind::NotFound) {
            io::ErrorKind::NotFound
        } else if err.is_a(Kind::NoAccess) || err.is_a(Kind::OperationNotPermitted) {
            io::ErrorKind::PermissionDenied
        } else if err.is_a(Kind::Timeout) {
            io::ErrorKind::TimedOut
        } else if err.is_a(Kind::EndOfStream) {
            io::ErrorKind::UnexpectedEof
        } else if err.is_a(Kind::ArgumentInvalid) {
            io::ErrorKind::InvalidInput
        } else {
            io::ErrorKind::Other
        };
        io::Error::new(kind, err)
    }
}

// ── ResultExt ─────────────────────────────────────────────────────

/// Extension trait turning any inspectable error into an `SError` during
/// propagation.
///
/// ```
/// use serror::{Kind, Options, ResultExt, SResult};
///
/// fn port(raw: &str) -> SResult<u16> {
///     raw.parse::<u16>()
///         .wrap_err_with(Options::new().field("argument_name", "port"))
/// }
///
/// let err = port("70000").unwrap_err();
/// assert_eq!(err.kind(), Kind::ArgumentOutOfRange);
/// assert!(err.message().starts_with("Function argument 'port' is out of range."));
/// ```
pub trait ResultExt<T> {
    /// Classify the error into the closest kind.
    fn wrap_err(self) -> SResult<T>;

    /// Classify with extra construction options.
    fn wrap_err_with(self, options: Options) -> SResult<T>;

    /// Wrap as an explicit kind, keeping the error as the cause.
    fn kind_err(self, kind: Kind, options: Options) -> SResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Inspect + Send + Sync + 'static,
{
    fn wrap_err(self) -> SResult<T> {
        self.wrap_err_with(Options::new())
    }

    fn wrap_err_with(self, options: Options) -> SResult<T> {
        self.map_err(|e| classify_global(e, options))
    }

    fn kind_err(self, kind: Kind, options: Options) -> SResult<T> {
        self.map_err(|e| SError::new(kind, options.cause(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Failure;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn question_mark_conversion() {
        fn inner() -> Result<(), io::Error> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }
        fn outer() -> SResult<()> {
            inner()?;
            Ok(())
        }
        let err = outer().unwrap_err();
        assert_eq!(err.kind(), Kind::NotFound);
        assert_eq!(err.code(), Some("ENOENT"));
        assert!(err.source().is_some());
    }

    #[test]
    fn connection_reset_by_kind() {
        let err = SError::from(io::Error::new(io::ErrorKind::ConnectionReset, "peer"));
        assert_eq!(err.kind(), Kind::Connection);
        assert_eq!(err.message(), "The remote service connection has been reset.");
        assert_eq!(err.status(), 502);
    }

    #[test]
    #[serial(settings)]
    fn json_syntax_is_system() {
        let err: SError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.kind(), Kind::System);
        assert_eq!(err.message(), "A system error has occurred.");
    }

    #[test]
    fn into_io_error() {
        let io_err: io::Error = SError::from(Kind::FileNotFound).into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.to_string(), "File not found.");

        let io_err: io::Error = SError::from(Kind::BadCredentials).into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }

    #[test]
    #[serial(settings)]
    fn result_ext() {
        let r: Result<(), Failure> = Err(Failure::type_mismatch("expected number"));
        let err = r.wrap_err().unwrap_err();
        assert_eq!(err.kind(), Kind::ArgumentType);

        let r: Result<(), Failure> = Err(Failure::new("disk full").with_code("ENOSPC"));
        let err = r
            .kind_err(Kind::FileLoad, Options::new().field("target", "index"))
            .unwrap_err();
        assert_eq!(err.kind(), Kind::FileLoad);
        assert_eq!(err.code(), Some("ENOSPC"));
        assert_eq!(err.message(), "Loading the index failed.");
    }
}
