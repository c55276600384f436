//! Code families used by the classifier.
//!
//! `ENOTFOUND` and `EAI_AGAIN` are resolver codes rather than errnos;
//! they show up on failures produced by DNS clients and are kept here so
//! those failures classify the same way socket errors do.

/// Codes that mean a connection to a remote endpoint failed.
pub const CONNECTION_CODES: &[&str] = &[
    "ECONNRESET",
    "ENOTFOUND",
    "ETIMEDOUT",
    "ECONNREFUSED",
    "EADDRINUSE",
    "EADDRNOTAVAIL",
    "ECONNABORTED",
    "EHOSTUNREACH",
    "EAI_AGAIN",
];

/// Codes that mean access was denied.
pub const ACCESS_CODES: &[&str] = &["EACCES", "EPERM"];

/// Codes that mean the target does not exist.
pub const NOT_FOUND_CODES: &[&str] = &["ENOENT"];

#[inline]
pub fn is_connection_code(code: &str) -> bool {
    CONNECTION_CODES.contains(&code)
}

#[inline]
pub fn is_access_code(code: &str) -> bool {
    ACCESS_CODES.contains(&code)
}

#[inline]
pub fn is_not_found_code(code: &str) -> bool {
    NOT_FOUND_CODES.contains(&code)
}

/// What happened to a connection, phrased to follow "The remote service
/// connection ...".
pub fn connection_issue(code: &str) -> Option<&'static str> {
    let issue = match code {
        "ECONNRESET" => "has been reset",
        "ENOTFOUND" => "failed because the host could not be found",
        "ETIMEDOUT" => "timed out",
        "ECONNREFUSED" => "was refused",
        "EADDRINUSE" => "failed because the local address is already in use",
        "EADDRNOTAVAIL" => "failed because the address is not available",
        "ECONNABORTED" => "was aborted",
        "EHOSTUNREACH" => "failed because the host is unreachable",
        "EAI_AGAIN" => "failed because of a temporary DNS failure",
        _ => return None,
    };
    Some(issue)
}
