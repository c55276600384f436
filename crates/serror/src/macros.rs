/// Construct an `SError` of a cataloged kind.
///
/// # Forms
///
/// ```ignore
/// // Bare kind:
/// serr!(NotFound)
///
/// // With fields (`message`, `code`, `status` and `hint` are recognised):
/// serr!(NotFound, { resource: "the hidden garden", hint: "Check the map." })
///
/// // With a hint:
/// serr!(AuthenticationRequired, hint = "Log in first.")
///
/// // With a cause:
/// serr!(FileLoad, cause = io_err)
///
/// // With a cause + fields:
/// serr!(FileLoad, cause = io_err, { target: "config.toml" })
/// ```
#[macro_export]
macro_rules! serr {
    // ── Bare kind ─────────────────────────────────────────────
    ($kind:ident) => {
        $crate::SError::new($crate::Kind::$kind, $crate::Options::new())
    };

    // ── With fields ───────────────────────────────────────────
    ($kind:ident, { $($field:ident : $value:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut opts = $crate::Options::new();
        $( opts = opts.with(stringify!($field), $value); )*
        $crate::SError::new($crate::Kind::$kind, opts)
    }};

    // ── With hint ─────────────────────────────────────────────
    ($kind:ident, hint = $hint:expr) => {
        $crate::SError::new($crate::Kind::$kind, $crate::Options::new().hint($hint))
    };

    // ── With hint + fields ────────────────────────────────────
    ($kind:ident, hint = $hint:expr, { $($field:ident : $value:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut opts = $crate::Options::new().hint($hint);
        $( opts = opts.with(stringify!($field), $value); )*
        $crate::SError::new($crate::Kind::$kind, opts)
    }};

    // ── With cause ────────────────────────────────────────────
    ($kind:ident, cause = $cause:expr) => {
        $crate::SError::new($crate::Kind::$kind, $crate::Options::new().cause($cause))
    };

    // ── With cause + fields ───────────────────────────────────
    ($kind:ident, cause = $cause:expr, { $($field:ident : $value:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut opts = $crate::Options::new().cause($cause);
        $( opts = opts.with(stringify!($field), $value); )*
        $crate::SError::new($crate::Kind::$kind, opts)
    }};
}

/// Early-return an `SError` if a condition is false.
///
/// ```ignore
/// ensure!(port >= 1024, ArgumentOutOfRange, { argument_name: "port", min: 1024 });
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident) => {
        if !$cond {
            return Err($crate::serr!($kind).into());
        }
    };
    ($cond:expr, $kind:ident, { $($field:ident : $value:expr),* $(,)? }) => {
        if !$cond {
            return Err($crate::serr!($kind, { $($field : $value),* }).into());
        }
    };
}

/// Dispatch on an error's kind. Arms are tried in order and match the
/// named kind or any of its descendants, so list specific kinds first.
///
/// ```ignore
/// match_kind!(err, {
///     FileNotFound    => { /* create it */ },
///     NotFound        => { /* any other not-found */ },
///     ArgumentInvalid => { /* any argument error */ },
///     _               => { /* fallback */ },
/// })
/// ```
#[macro_export]
macro_rules! match_kind {
    ($error:expr, { $( $kind:ident => $handler:expr ),+ , _ => $default:expr $(,)? }) => {{
        let __kind: $crate::Kind = $error.kind();
        $( if __kind.is_a($crate::Kind::$kind) { $handler } else )+ { $default }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Failure, Kind, SError, SResult};
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn serr_bare() {
        let e = serr!(NotFound);
        assert_eq!(e.kind(), Kind::NotFound);
        assert_eq!(e.message(), "Resource not found.");
    }

    #[test]
    #[serial(settings)]
    fn serr_with_fields() {
        let e = serr!(NotFound, {
            resource: "the hidden garden",
            hint: "Check the map.",
            status: 410,
        });
        assert_eq!(e.message(), "The hidden garden not found. Check the map.");
        assert_eq!(e.status(), 410);
        assert_eq!(e.status_name(), "Gone");
    }

    #[test]
    fn serr_with_hint() {
        let e = serr!(AuthenticationRequired, hint = "Log in first.");
        assert_eq!(e.message(), "Action requires authentication. Log in first.");
        assert_eq!(e.hint(), Some("Log in first."));

        let e = serr!(NoAccessFile, hint = "Ask the owner.", { target: "ledger" });
        assert!(e.message().ends_with(" Ask the owner."));
        assert_eq!(e.field("hint"), None);
    }

    #[test]
    fn serr_with_cause() {
        let e = serr!(FileLoad, cause = Failure::new("bad header"), { target: "archive" });
        assert_eq!(e.message(), "Loading the archive failed.");
        assert_eq!(e.cause().map(|c| c.to_string()), Some("bad header".to_string()));

        let e = serr!(Io, cause = Failure::new("x").with_code("EIO"));
        assert_eq!(e.code(), Some("EIO"));
    }

    #[test]
    fn ensure_returns_early() {
        fn check(port: u32) -> SResult<u32> {
            ensure!(port >= 1024, ArgumentOutOfRange, {
                argument_name: "port",
                argument_value: port,
                min: 1024,
            });
            Ok(port)
        }
        assert_eq!(check(8080).unwrap(), 8080);
        let e = check(80).unwrap_err();
        assert_eq!(e.kind(), Kind::ArgumentOutOfRange);
        assert_eq!(
            e.message(),
            "Function argument 'port' with value '80' is out of range. \
             Value must be greater than or equal to '1024'."
        );
    }

    #[test]
    fn ensure_bare() {
        fn gate(open: bool) -> Result<(), Box<dyn std::error::Error>> {
            ensure!(open, AuthenticationRequired);
            Ok(())
        }
        assert!(gate(true).is_ok());
        assert_eq!(gate(false).unwrap_err().to_string(), "Action requires authentication.");
    }

    #[test]
    fn match_kind_most_specific_first() {
        let classify = |e: SError| -> &'static str {
            match_kind!(e, {
                FileNotFound => "file",
                NotFound => "other not found",
                ArgumentInvalid => "argument",
                _ => "fallback",
            })
        };
        assert_eq!(classify(serr!(FileNotFound)), "file");
        assert_eq!(classify(serr!(DirectoryNotFound)), "other not found");
        assert_eq!(classify(serr!(ArgumentMissing)), "argument");
        assert_eq!(classify(serr!(Timeout)), "fallback");
    }
}
