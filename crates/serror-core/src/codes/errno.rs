//! POSIX errno names.
//!
//! On unix the raw value is matched against `libc`'s constants, so the
//! mapping is correct on every platform `libc` supports (errno values differ
//! between Linux and macOS). Elsewhere only the `io::ErrorKind` fallback is
//! available.

use std::io;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        /// Symbolic name for a raw errno value.
        ///
        /// Only the errnos an application commonly handles are named;
        /// anything else yields `None`.
        pub fn errno_name(errno: i32) -> Option<&'static str> {
            let name = match errno {
                // ── Process / permission ──────────────────────────
                libc::EPERM => "EPERM",
                libc::ENOENT => "ENOENT",
                libc::ESRCH => "ESRCH",
                libc::EINTR => "EINTR",
                libc::EIO => "EIO",
                libc::ENXIO => "ENXIO",
                libc::EACCES => "EACCES",
                libc::EEXIST => "EEXIST",
                libc::ENOTDIR => "ENOTDIR",
                libc::EISDIR => "EISDIR",

                // ── Memory / resources ────────────────────────────
                libc::ENOMEM => "ENOMEM",
                libc::EAGAIN => "EAGAIN",
                libc::EMFILE => "EMFILE",
                libc::ENFILE => "ENFILE",

                // ── I/O ───────────────────────────────────────────
                libc::EBADF => "EBADF",
                libc::EINVAL => "EINVAL",
                libc::EPIPE => "EPIPE",
                libc::EFBIG => "EFBIG",
                libc::ENOSPC => "ENOSPC",

                // ── Networking ────────────────────────────────────
                libc::EADDRINUSE => "EADDRINUSE",
                libc::EADDRNOTAVAIL => "EADDRNOTAVAIL",
                libc::ENETDOWN => "ENETDOWN",
                libc::ENETUNREACH => "ENETUNREACH",
                libc::ECONNABORTED => "ECONNABORTED",
                libc::ECONNRESET => "ECONNRESET",
                libc::ENOBUFS => "ENOBUFS",
                libc::EISCONN => "EISCONN",
                libc::ENOTCONN => "ENOTCONN",
                libc::ETIMEDOUT => "ETIMEDOUT",
                libc::ECONNREFUSED => "ECONNREFUSED",
                libc::EHOSTUNREACH => "EHOSTUNREACH",
                libc::EALREADY => "EALREADY",
                libc::EINPROGRESS => "EINPROGRESS",
                _ => return None,
            };
            Some(name)
        }
    } else {
        /// Symbolic name for a raw errno value.
        ///
        /// Raw values are not portable off unix; always `None`.
        pub fn errno_name(_errno: i32) -> Option<&'static str> {
            None
        }
    }
}

/// Code name for an `io::ErrorKind`, used when no raw errno is available
/// (custom `io::Error`s, non-unix targets).
pub fn io_kind_code(kind: io::ErrorKind) -> Option<&'static str> {
    let name = match kind {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::ConnectionRefused => "ECONNREFUSED",
        io::ErrorKind::ConnectionReset => "ECONNRESET",
        io::ErrorKind::ConnectionAborted => "ECONNABORTED",
        io::ErrorKind::NotConnected => "ENOTCONN",
        io::ErrorKind::AddrInUse => "EADDRINUSE",
        io::ErrorKind::AddrNotAvailable => "EADDRNOTAVAIL",
        io::ErrorKind::BrokenPipe => "EPIPE",
        io::ErrorKind::AlreadyExists => "EEXIST",
        io::ErrorKind::WouldBlock => "EAGAIN",
        io::ErrorKind::InvalidInput => "EINVAL",
        io::ErrorKind::TimedOut => "ETIMEDOUT",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::OutOfMemory => "ENOMEM",
        _ => return None,
    };
    Some(name)
}

/// Code name for an `io::Error`: the raw errno name when there is one,
/// otherwise the name derived from its kind.
pub fn io_error_code(err: &io::Error) -> Option<&'static str> {
    err.raw_os_error()
        .and_then(errno_name)
        .or_else(|| io_kind_code(err.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn errno_names_known() {
        assert_eq!(errno_name(libc::ECONNRESET), Some("ECONNRESET"));
        assert_eq!(errno_name(libc::ENOENT), Some("ENOENT"));
        assert_eq!(errno_name(libc::EACCES), Some("EACCES"));
    }

    #[cfg(unix)]
    #[test]
    fn errno_names_unknown() {
        assert_eq!(errno_name(0), None);
        assert_eq!(errno_name(-1), None);
    }

    #[cfg(unix)]
    #[test]
    fn raw_os_error_wins() {
        let err = io::Error::from_raw_os_error(libc::ECONNREFUSED);
        assert_eq!(io_error_code(&err), Some("ECONNREFUSED"));
    }

    #[test]
    fn custom_io_error_uses_kind() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(io_error_code(&err), Some("ENOENT"));

        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(io_error_code(&err), Some("EACCES"));
    }

    #[test]
    fn unmapped_kind() {
        let err = io::Error::new(io::ErrorKind::Other, "odd");
        assert_eq!(io_error_code(&err), None);
        assert_eq!(io_kind_code(io::ErrorKind::UnexpectedEof), None);
    }
}
